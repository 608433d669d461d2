//! Rendering boundary
//!
//! The core does not own a graphics context. Each frame it produces a clear
//! colour and an ordered list of sprite/text commands that a batched sprite
//! backend replays as-is.

pub mod commands;
pub mod layout;
pub mod scene;

pub use commands::{Color, DrawCommand, Frame, background_for_level, colors, tint_color};
pub use layout::{TextLine, centered_text_block, text_width};
pub use scene::build_frame;
