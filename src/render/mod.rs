//! Drawing interface consumed by the simulation
//!
//! The simulation never rasterizes anything itself. It issues a handful of
//! primitive calls against a [`Canvas`], with fill styles expressed as CSS-like
//! color strings.

pub mod draw_list;

pub use draw_list::{DrawCommand, DrawList};

use std::fmt;

use glam::Vec2;

/// Axis-aligned rectangle in playfield coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Fill style for regions and circles
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillStyle {
    /// A named CSS color
    Named(&'static str),
    /// `hsl(hue, saturation%, lightness%)`
    Hsl { hue: u16, saturation: u8, lightness: u8 },
    /// `rgba(r, g, b, a)`
    Rgba { r: u8, g: u8, b: u8, a: f32 },
}

impl FillStyle {
    pub const WHITE: FillStyle = FillStyle::Named("white");
    /// Translucent black used to fade the previous frame
    pub const FADE: FillStyle = FillStyle::Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.1,
    };

    pub const fn hsl(hue: u16, saturation: u8, lightness: u8) -> Self {
        FillStyle::Hsl {
            hue,
            saturation,
            lightness,
        }
    }
}

impl fmt::Display for FillStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillStyle::Named(name) => write!(f, "{name}"),
            FillStyle::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({hue}, {saturation}%, {lightness}%)"),
            FillStyle::Rgba { r, g, b, a } => write!(f, "rgba({r}, {g}, {b}, {a})"),
        }
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Rendering collaborator
pub trait Canvas {
    fn clear_region(&mut self, rect: Rect);
    fn fill_region(&mut self, rect: Rect, style: FillStyle);
    fn draw_circle(&mut self, center: Vec2, radius: f32, style: FillStyle, alpha: f32);
    fn draw_text(&mut self, text: &str, pos: Vec2, font: &str, align: TextAlign);
}
