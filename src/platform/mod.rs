//! Platform abstraction layer
//!
//! The shell polls its keyboard/gamepad and clock and hands the core plain
//! values:
//! - Input snapshots (current + previous frame)
//! - Per-tick time deltas

pub mod input;
pub mod time;

pub use input::{InputFrame, InputSnapshot, Key, KeySet};
pub use time::FrameClock;
