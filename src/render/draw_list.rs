//! Recorded draw commands
//!
//! A [`Canvas`] that stores every call instead of drawing it. Hosts without a
//! real surface use it, and tests inspect it to see what a tick rendered.

use glam::Vec2;

use super::{Canvas, FillStyle, Rect, TextAlign};

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    Fill(Rect, FillStyle),
    Circle {
        center: Vec2,
        radius: f32,
        style: FillStyle,
        alpha: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        font: String,
        align: TextAlign,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands (call once per frame)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Circles drawn with the given style
    pub fn circles_with(&self, style: FillStyle) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(move |c| matches!(c, DrawCommand::Circle { style: s, .. } if *s == style))
    }

    /// All text drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn clear_region(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn fill_region(&mut self, rect: Rect, style: FillStyle) {
        self.commands.push(DrawCommand::Fill(rect, style));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, style: FillStyle, alpha: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            style,
            alpha,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font: &str, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            font: font.to_string(),
            align,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut list = DrawList::new();
        list.fill_region(Rect::new(0.0, 0.0, 10.0, 10.0), FillStyle::FADE);
        list.draw_circle(Vec2::new(5.0, 5.0), 2.0, FillStyle::WHITE, 1.0);
        list.draw_text("42", Vec2::new(5.0, 5.0), "48px sans-serif", TextAlign::Center);

        assert_eq!(list.len(), 3);
        assert!(matches!(&list.commands[0], DrawCommand::Fill(_, style) if *style == FillStyle::FADE));
        assert_eq!(list.circles_with(FillStyle::WHITE).count(), 1);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["42"]);

        list.clear();
        assert!(list.is_empty());
    }
}
