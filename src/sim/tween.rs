//! Per-tick property easing
//!
//! A tween moves a value toward a target by a fixed fraction of the remaining
//! distance each tick, and lands on the target exactly when its duration runs
//! out. Retargeting restarts the duration from the current value.

/// Tween duration in ticks (half a second at the default tick interval)
pub const TWEEN_DURATION_TICKS: u32 = 25;
/// Fraction of the remaining distance covered per tick
pub const TWEEN_RATE: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    value: f32,
    target: f32,
    ticks_left: u32,
}

impl Tween {
    /// A settled tween holding `value`
    pub fn new(value: f32) -> Self {
        Self {
            value,
            target: value,
            ticks_left: 0,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.ticks_left == 0
    }

    /// Start easing toward `target`
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
        self.ticks_left = TWEEN_DURATION_TICKS;
    }

    /// Advance one tick
    pub fn step(&mut self) {
        if self.ticks_left == 0 {
            return;
        }
        self.ticks_left -= 1;
        if self.ticks_left == 0 {
            self.value = self.target;
        } else {
            self.value += (self.target - self.value) * TWEEN_RATE;
        }
    }
}
