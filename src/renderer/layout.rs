//! Text layout
//!
//! Menus, pause, victory and game-over screens are all a stack of lines
//! centred on a point; they share [`centered_text_block`].

use glam::Vec2;

use super::commands::{Color, DrawCommand};

/// One line of a text block
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub color: Color,
    pub scale: f32,
}

impl TextLine {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            scale: 1.0,
        }
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Rendered width of `text` with fixed-advance glyphs
pub fn text_width(text: &str, scale: f32, glyph: Vec2) -> f32 {
    text.chars().count() as f32 * glyph.x * scale
}

/// Lay out `lines` as a block centred on `center`, `spacing` pixels apart
pub fn centered_text_block(lines: &[TextLine], center: Vec2, spacing: f32, glyph: Vec2) -> Vec<DrawCommand> {
    let total_height: f32 = lines.iter().map(|l| glyph.y * l.scale).sum::<f32>()
        + spacing * lines.len().saturating_sub(1) as f32;

    let mut y = center.y - total_height / 2.0;
    let mut commands = Vec::with_capacity(lines.len());
    for line in lines {
        let width = text_width(&line.text, line.scale, glyph);
        commands.push(DrawCommand::Text {
            text: line.text.clone(),
            pos: Vec2::new(center.x - width / 2.0, y),
            color: line.color,
            scale: line.scale,
        });
        y += glyph.y * line.scale + spacing;
    }
    commands
}
