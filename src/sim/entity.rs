//! Entity kinds and their per-tick behavior
//!
//! Capabilities are split into three traits so that each kind implements
//! exactly what it supports: the player only renders, everything else also
//! moves and eventually expires. Entities never reference each other or the
//! collections that hold them.

use glam::Vec2;
use rand::Rng;

use super::state::Playfield;
use super::tween::Tween;
use crate::consts::*;
use crate::render::{Canvas, FillStyle};
use crate::{calc_angle, rand_int};

/// Draw onto a canvas
pub trait Render {
    fn render(&self, canvas: &mut dyn Canvas);
}

/// Advance one tick of motion
pub trait Advance {
    fn advance(&mut self);
}

/// Removal condition, checked once per tick after the entity has advanced
pub trait Expire {
    fn is_expired(&self, playfield: &Playfield, tick: u64) -> bool;
}

/// True when the center lies outside the playfield grown by `radius` on every side
#[inline]
pub fn out_of_bounds(pos: Vec2, radius: f32, playfield: &Playfield) -> bool {
    pos.x < -radius
        || pos.y < -radius
        || pos.x > playfield.width + radius
        || pos.y > playfield.height + radius
}

#[inline]
fn step_along(pos: Vec2, angle: f32, velocity: f32) -> Vec2 {
    pos + Vec2::from_angle(angle) * velocity
}

/// The turret at the center of the playfield
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub style: FillStyle,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: PLAYER_RADIUS,
            style: FillStyle::WHITE,
        }
    }
}

impl Render for Player {
    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.draw_circle(self.pos, self.radius, self.style, 1.0);
    }
}

/// A shot travelling in a straight line from the player
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    pub radius: f32,
    pub style: FillStyle,
    pub velocity: f32,
    pub angle: f32,
}

impl Projectile {
    /// Fire from `origin` toward `target`
    pub fn new(origin: Vec2, target: Vec2) -> Self {
        Self {
            pos: origin,
            radius: PROJECTILE_RADIUS,
            style: FillStyle::WHITE,
            velocity: PROJECTILE_SPEED,
            angle: calc_angle(origin, target),
        }
    }
}

impl Render for Projectile {
    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.draw_circle(self.pos, self.radius, self.style, 1.0);
    }
}

impl Advance for Projectile {
    fn advance(&mut self) {
        self.pos = step_along(self.pos, self.angle, self.velocity);
    }
}

impl Expire for Projectile {
    fn is_expired(&self, playfield: &Playfield, _tick: u64) -> bool {
        out_of_bounds(self.pos, self.radius, playfield)
    }
}

/// Result of a projectile striking an enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Points awarded for this hit
    pub points: u64,
    /// The hit was lethal
    pub killed: bool,
}

/// An enemy heading for the player; its size is its health
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    /// Rendered (and collided) radius, easing toward `health`
    pub radius: Tween,
    /// Remaining hit points
    pub health: f32,
    pub hue: u16,
    pub velocity: f32,
    /// Heading fixed at spawn time
    pub angle: f32,
    /// Tick the enemy died on, if dead
    pub dead_since: Option<u64>,
}

impl Enemy {
    pub fn new(pos: Vec2, radius: f32, hue: u16, velocity: f32, angle: f32) -> Self {
        Self {
            pos,
            radius: Tween::new(radius),
            health: radius,
            hue,
            velocity,
            angle,
            dead_since: None,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.dead_since.is_none()
    }

    pub fn style(&self) -> FillStyle {
        if self.is_alive() {
            FillStyle::hsl(self.hue, 50, 50)
        } else {
            FillStyle::hsl(self.hue, 20, 50)
        }
    }

    /// Take one projectile hit on `tick`
    ///
    /// Below the kill threshold the remaining health is paid out and the enemy
    /// dies; otherwise it loses a fixed chunk of health and shrinks toward it.
    pub fn hit(&mut self, tick: u64) -> Hit {
        if self.health < KILL_THRESHOLD {
            let points = self.health.max(0.0).floor() as u64;
            self.die(tick);
            Hit {
                points,
                killed: true,
            }
        } else {
            self.health -= HIT_DAMAGE;
            self.radius.retarget(self.health);
            Hit {
                points: HIT_SCORE,
                killed: false,
            }
        }
    }

    /// Enter the dead state: dimmed, crawling, ignored by collisions
    pub fn die(&mut self, tick: u64) {
        self.velocity = DEAD_CRAWL_SPEED;
        self.dead_since = Some(tick);
    }
}

impl Render for Enemy {
    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.draw_circle(self.pos, self.radius.value(), self.style(), 1.0);
    }
}

impl Advance for Enemy {
    fn advance(&mut self) {
        self.pos = step_along(self.pos, self.angle, self.velocity);
        self.radius.step();
    }
}

impl Expire for Enemy {
    fn is_expired(&self, playfield: &Playfield, tick: u64) -> bool {
        out_of_bounds(self.pos, self.radius.value(), playfield)
            || self
                .dead_since
                .is_some_and(|since| tick.saturating_sub(since) >= DEAD_GRACE_TICKS)
    }
}

/// Cosmetic debris thrown off by a hit
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub radius: f32,
    pub hue: u16,
    pub alpha: Tween,
    pub velocity: Tween,
    pub angle: f32,
    pub born_tick: u64,
}

impl Particle {
    pub fn new(pos: Vec2, radius: f32, hue: u16, velocity: f32, angle: f32, tick: u64) -> Self {
        Self {
            pos,
            radius,
            hue,
            alpha: Tween::new(1.0),
            velocity: Tween::new(velocity),
            angle,
            born_tick: tick,
        }
    }

    /// Particles thrown off an enemy of the given radius
    ///
    /// Burst size is `rand_int(5, 10) * radius / 10`, rounded up.
    pub fn burst<R: Rng + ?Sized>(
        rng: &mut R,
        pos: Vec2,
        enemy_radius: f32,
        hue: u16,
        tick: u64,
    ) -> Vec<Particle> {
        let scale = rand_int(rng, PARTICLE_BURST_MIN, PARTICLE_BURST_MAX) as f32;
        let count = (scale * enemy_radius / 10.0).ceil().max(0.0) as usize;
        (0..count)
            .map(|_| {
                let radius = rng.random::<f32>() * enemy_radius / 10.0 + 2.0;
                let angle = (2.0 * rng.random::<f32>() - 1.0) * std::f32::consts::PI;
                Particle::new(pos, radius, hue, PARTICLE_SPEED, angle, tick)
            })
            .collect()
    }

    pub fn style(&self) -> FillStyle {
        FillStyle::hsl(self.hue, 80, 80)
    }
}

impl Render for Particle {
    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.draw_circle(self.pos, self.radius, self.style(), self.alpha.value());
    }
}

impl Advance for Particle {
    fn advance(&mut self) {
        self.pos = step_along(self.pos, self.angle, self.velocity.value());
        self.velocity
            .retarget(self.velocity.value() * PARTICLE_VELOCITY_DECAY);
        self.alpha.retarget(self.alpha.value() * PARTICLE_ALPHA_DECAY);
        self.velocity.step();
        self.alpha.step();
    }
}

impl Expire for Particle {
    fn is_expired(&self, playfield: &Playfield, tick: u64) -> bool {
        out_of_bounds(self.pos, self.radius, playfield)
            || tick.saturating_sub(self.born_tick) >= PARTICLE_LIFETIME_TICKS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawList;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::f32::consts::PI;

    fn field() -> Playfield {
        Playfield::new(800.0, 600.0)
    }

    fn assert_disposable<T: Render + Advance + Expire>() {}

    #[test]
    fn test_every_disposable_kind_has_all_capabilities() {
        assert_disposable::<Projectile>();
        assert_disposable::<Enemy>();
        assert_disposable::<Particle>();

        let mut canvas = DrawList::new();
        Player::new(Vec2::new(400.0, 300.0)).render(&mut canvas);
        assert_eq!(canvas.circles_with(FillStyle::WHITE).count(), 1);
    }

    #[test]
    fn test_out_of_bounds_boundary() {
        let field = field();
        let r = 10.0;
        // Exactly at the expanded edge is still in bounds
        assert!(!out_of_bounds(Vec2::new(-r, 300.0), r, &field));
        assert!(!out_of_bounds(Vec2::new(800.0 + r, 300.0), r, &field));
        assert!(!out_of_bounds(Vec2::new(400.0, -r), r, &field));
        assert!(!out_of_bounds(Vec2::new(400.0, 600.0 + r), r, &field));

        assert!(out_of_bounds(Vec2::new(-r - 0.5, 300.0), r, &field));
        assert!(out_of_bounds(Vec2::new(800.0 + r + 0.5, 300.0), r, &field));
        assert!(out_of_bounds(Vec2::new(400.0, -r - 0.5), r, &field));
        assert!(out_of_bounds(Vec2::new(400.0, 600.0 + r + 0.5), r, &field));
    }

    #[test]
    fn test_projectile_travels_toward_target() {
        let mut p = Projectile::new(Vec2::new(100.0, 100.0), Vec2::new(100.0, 0.0));
        p.advance();
        assert!((p.pos.x - 100.0).abs() < 1e-4);
        assert!((p.pos.y - 95.0).abs() < 1e-4);
    }

    #[test]
    fn test_projectile_expires_off_field() {
        let field = field();
        let mut p = Projectile::new(Vec2::new(2.0, 300.0), Vec2::new(-100.0, 300.0));
        let mut ticks = 0;
        while !p.is_expired(&field, 0) {
            p.advance();
            ticks += 1;
        }
        // From x = 2 the projectile must pass x = -5 at 5 units per tick
        assert_eq!(ticks, 2);
    }

    #[test]
    fn test_enemy_hit_then_kill() {
        let mut enemy = Enemy::new(Vec2::ZERO, 25.0, 120, 1.0, 0.0);

        let first = enemy.hit(3);
        assert_eq!(first, Hit { points: 10, killed: false });
        assert_eq!(enemy.health, 15.0);
        assert_eq!(enemy.radius.target(), 15.0);
        assert_eq!(enemy.radius.value(), 25.0);
        assert!(enemy.is_alive());

        let second = enemy.hit(4);
        assert_eq!(second, Hit { points: 15, killed: true });
        assert!(!enemy.is_alive());
        assert_eq!(enemy.dead_since, Some(4));
        assert_eq!(enemy.velocity, DEAD_CRAWL_SPEED);
        assert_eq!(enemy.style(), FillStyle::hsl(120, 20, 50));
    }

    #[test]
    fn test_dead_enemy_grace_period() {
        let field = field();
        let mut enemy = Enemy::new(Vec2::new(400.0, 300.0), 12.0, 0, 1.0, 0.0);
        enemy.hit(10);
        assert!(!enemy.is_expired(&field, 10));
        assert!(enemy.is_expired(&field, 11));
    }

    #[test]
    fn test_enemy_moves_along_heading() {
        let mut enemy = Enemy::new(Vec2::new(300.0, 100.0), 50.0, 0, 0.6, PI);
        enemy.advance();
        assert!((enemy.pos.x - 299.4).abs() < 1e-4);
        assert!((enemy.pos.y - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_particle_decays_and_expires() {
        let field = field();
        let mut particle = Particle::new(Vec2::new(400.0, 300.0), 3.0, 10, 10.0, 0.0, 5);
        particle.advance();
        assert!(particle.velocity.value() < 10.0);
        assert!(particle.alpha.value() < 1.0);
        assert!(particle.alpha.value() > 0.5);

        assert!(!particle.is_expired(&field, 29));
        assert!(particle.is_expired(&field, 30));
    }

    #[test]
    fn test_burst_size_scales_with_radius() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..50 {
            let burst = Particle::burst(&mut rng, Vec2::ZERO, 30.0, 200, 0);
            assert!((15..=30).contains(&burst.len()));
            for p in &burst {
                assert!(p.radius >= 2.0 && p.radius < 5.0);
                assert!((-PI..=PI).contains(&p.angle));
                assert_eq!(p.velocity.value(), PARTICLE_SPEED);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_health_never_increases(radius in 10i32..=50, hits in 1usize..10) {
            let mut enemy = Enemy::new(Vec2::ZERO, radius as f32, 0, 1.0, 0.0);
            let mut last = enemy.health;
            for tick in 0..hits as u64 {
                if !enemy.is_alive() {
                    break;
                }
                let below_threshold = enemy.health < KILL_THRESHOLD;
                let before = enemy.health;
                let hit = enemy.hit(tick);
                prop_assert!(enemy.health <= last);
                prop_assert!(enemy.health >= 0.0);
                if below_threshold {
                    prop_assert!(hit.killed);
                    prop_assert_eq!(hit.points, before.floor() as u64);
                } else {
                    prop_assert_eq!(hit.points, HIT_SCORE);
                }
                last = enemy.health;
            }
        }
    }
}
