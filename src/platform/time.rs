//! Frame timing

use crate::consts::MAX_FRAME_DT;

/// Turns wall-clock timestamps (seconds) into per-tick deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous call, clamped to `0..=MAX_FRAME_DT`
    ///
    /// The first call returns 0. Clock jumps backwards (or NaN) also give 0,
    /// and long stalls are capped so a hitch never teleports entities.
    pub fn advance(&mut self, now: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => (now - last) as f32,
            None => 0.0,
        };
        self.last_time = Some(now);
        clamp_dt(dt)
    }
}

/// Clamp a raw delta into the range a tick may integrate
pub fn clamp_dt(dt: f32) -> f32 {
    if dt.is_nan() {
        0.0
    } else {
        dt.clamp(0.0, MAX_FRAME_DT)
    }
}
