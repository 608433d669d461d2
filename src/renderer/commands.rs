//! Draw command types and the colour palette

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::SpriteId;
use crate::sim::ParticleTint;

/// Linear RGBA
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const TITLE: Color = [1.0, 0.85, 0.3, 1.0];
    pub const SELECTED: Color = [1.0, 0.9, 0.2, 1.0];
    pub const UNSELECTED: Color = [0.7, 0.7, 0.8, 1.0];
    pub const HINT: Color = [0.55, 0.55, 0.65, 1.0];
    pub const DANGER: Color = [1.0, 0.3, 0.25, 1.0];
    pub const VICTORY: Color = [0.4, 1.0, 0.5, 1.0];

    pub const SPARK: Color = [1.0, 0.27, 0.0, 1.0]; // Orange-red
    pub const FLASH: Color = [1.0, 1.0, 0.85, 1.0];
    pub const FLAME: Color = [1.0, 0.6, 0.1, 1.0];
    pub const EMBER: Color = [0.8, 0.2, 0.05, 1.0];

    /// Backgrounds cycled by level
    pub const BACKGROUNDS: [Color; 5] = [
        [0.39, 0.58, 0.93, 1.0], // Cornflower blue
        [0.10, 0.10, 0.30, 1.0],
        [0.20, 0.05, 0.25, 1.0],
        [0.25, 0.08, 0.05, 1.0],
        [0.02, 0.02, 0.05, 1.0],
    ];
}

/// One backend call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Textured sprite with its top-left corner at `pos`
    Sprite {
        sprite: SpriteId,
        pos: Vec2,
        scale: f32,
        rotation: f32,
        tint: Color,
    },
    /// Text with its top-left corner at `pos`
    Text {
        text: String,
        pos: Vec2,
        color: Color,
        scale: f32,
    },
}

/// Everything to draw for one frame, in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub clear: Color,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new(clear: Color) -> Self {
        Self {
            clear,
            commands: Vec::new(),
        }
    }

    pub fn sprite(&mut self, sprite: SpriteId, pos: Vec2, scale: f32, tint: Color) {
        self.commands.push(DrawCommand::Sprite {
            sprite,
            pos,
            scale,
            rotation: 0.0,
            tint,
        });
    }

    pub fn extend(&mut self, commands: impl IntoIterator<Item = DrawCommand>) {
        self.commands.extend(commands);
    }

    /// All text strings in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Sprite { .. } => None,
        })
    }

    /// Number of sprite commands for `sprite`
    pub fn sprite_count(&self, sprite: SpriteId) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { sprite: s, .. } if *s == sprite))
            .count()
    }
}

/// Clear colour for a level (1-based, cycles through the palette)
pub fn background_for_level(level: u32) -> Color {
    let idx = level.saturating_sub(1) as usize % colors::BACKGROUNDS.len();
    colors::BACKGROUNDS[idx]
}

pub fn tint_color(tint: ParticleTint) -> Color {
    match tint {
        ParticleTint::Spark => colors::SPARK,
        ParticleTint::Flash => colors::FLASH,
        ParticleTint::Flame => colors::FLAME,
        ParticleTint::Ember => colors::EMBER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_cycles() {
        assert_eq!(background_for_level(1), colors::BACKGROUNDS[0]);
        assert_eq!(background_for_level(6), colors::BACKGROUNDS[0]);
        assert_eq!(background_for_level(0), colors::BACKGROUNDS[0]);
        assert_ne!(background_for_level(2), background_for_level(1));
    }
}
