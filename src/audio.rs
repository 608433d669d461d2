//! Sound cue requests
//!
//! The core never plays audio itself. It turns gameplay events into
//! "play cue N at volume V" requests; the backend owns voices and restarts a
//! cue from the beginning if it is already playing.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Base gunshot, every shot
    Shot,
    /// Extra layer from gun level 2
    ShotLayer2,
    /// Extra layer from gun level 3
    ShotLayer3,
    /// Hostile destroyed
    Explosion,
    /// Hostile reached the bottom line
    HullBreach,
    LevelUp,
    MenuMove,
    MenuSelect,
    GameOver,
    Victory,
    HighScore,
}

impl SoundCue {
    /// Mix level of the cue before user volume is applied
    pub fn base_volume(self) -> f32 {
        match self {
            SoundCue::Shot => 0.5,
            SoundCue::ShotLayer2 | SoundCue::ShotLayer3 => 0.35,
            SoundCue::Explosion => 0.8,
            SoundCue::HullBreach => 0.9,
            SoundCue::LevelUp => 0.7,
            SoundCue::MenuMove => 0.3,
            SoundCue::MenuSelect => 0.5,
            SoundCue::GameOver | SoundCue::Victory | SoundCue::HighScore => 1.0,
        }
    }
}

/// A single "play this now" request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CueRequest {
    pub cue: SoundCue,
    pub volume: f32,
}

impl CueRequest {
    pub fn new(cue: SoundCue) -> Self {
        Self {
            cue,
            volume: cue.base_volume(),
        }
    }
}

/// Map a tick's events to cue requests, in event order
pub fn cues_for_events(events: &[GameEvent]) -> Vec<CueRequest> {
    let mut cues = Vec::new();
    for event in events {
        match event {
            GameEvent::Shot { gun_level } => {
                cues.push(CueRequest::new(SoundCue::Shot));
                if *gun_level >= 2 {
                    cues.push(CueRequest::new(SoundCue::ShotLayer2));
                }
                if *gun_level >= 3 {
                    cues.push(CueRequest::new(SoundCue::ShotLayer3));
                }
            }
            GameEvent::HostileDestroyed { .. } => cues.push(CueRequest::new(SoundCue::Explosion)),
            GameEvent::HullBreach { .. } => cues.push(CueRequest::new(SoundCue::HullBreach)),
            GameEvent::LevelUp { .. } => cues.push(CueRequest::new(SoundCue::LevelUp)),
            GameEvent::MenuMove => cues.push(CueRequest::new(SoundCue::MenuMove)),
            GameEvent::MenuSelect => cues.push(CueRequest::new(SoundCue::MenuSelect)),
            GameEvent::GameOver { .. } => cues.push(CueRequest::new(SoundCue::GameOver)),
            GameEvent::Victory { .. } => cues.push(CueRequest::new(SoundCue::Victory)),
            GameEvent::NewHighScore { .. } => cues.push(CueRequest::new(SoundCue::HighScore)),
        }
    }
    cues
}

/// Playback engine supplied by the shell
pub trait AudioBackend {
    /// Start `cue` at `volume`, restarting it if already playing
    fn trigger(&mut self, cue: SoundCue, volume: f32);
}

/// Applies user volume to requests and forwards them to a backend
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut manager = Self::new();
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager.set_muted(settings.muted);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Forward every audible request to `backend`
    pub fn dispatch(&self, backend: &mut dyn AudioBackend, requests: &[CueRequest]) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        for request in requests {
            let volume = (request.volume * vol).clamp(0.0, 1.0);
            if volume > 0.0 {
                backend.trigger(request.cue, volume);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<(SoundCue, f32)>);

    impl AudioBackend for Recorder {
        fn trigger(&mut self, cue: SoundCue, volume: f32) {
            self.0.push((cue, volume));
        }
    }

    fn shot_cues(gun_level: u32) -> Vec<SoundCue> {
        cues_for_events(&[GameEvent::Shot { gun_level }])
            .into_iter()
            .map(|r| r.cue)
            .collect()
    }

    #[test]
    fn test_shot_layers_by_gun_level() {
        assert_eq!(shot_cues(1), vec![SoundCue::Shot]);
        assert_eq!(shot_cues(2), vec![SoundCue::Shot, SoundCue::ShotLayer2]);
        assert_eq!(
            shot_cues(5),
            vec![SoundCue::Shot, SoundCue::ShotLayer2, SoundCue::ShotLayer3]
        );
    }

    #[test]
    fn test_dispatch_scales_volume() {
        let mut manager = AudioManager::new();
        manager.set_master_volume(0.5);
        let mut backend = Recorder::default();
        manager.dispatch(&mut backend, &[CueRequest::new(SoundCue::Explosion)]);
        assert_eq!(backend.0.len(), 1);
        assert!((backend.0[0].1 - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_muted_dispatches_nothing() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let manager = AudioManager::from_settings(&settings);
        let mut backend = Recorder::default();
        manager.dispatch(&mut backend, &[CueRequest::new(SoundCue::Shot)]);
        assert!(backend.0.is_empty());
    }
}
