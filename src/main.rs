//! Astro Defender entry point
//!
//! Runs the game core headless: a scripted pilot stands in for the keyboard,
//! audio and draw output go to the log. A windowed shell replaces the pilot
//! and the log backends with real devices and feeds `Game::step` the same way.

use std::time::{SystemTime, UNIX_EPOCH};

use astro_defender::assets::AssetManifest;
use astro_defender::audio::{AudioBackend, AudioManager, SoundCue};
use astro_defender::platform::{FrameClock, InputFrame, InputSnapshot, Key};
use astro_defender::{Game, HighScoreStore, Mode, Settings, Tuning};

/// Simulated frame rate of the headless loop
const FRAME_RATE: f64 = 60.0;
/// Seconds of play before the pilot leaves to the menu
const PLAY_SECONDS: f64 = 90.0;
/// Hard stop for the loop
const MAX_FRAMES: u64 = 60 * 60 * 5;

/// Logs cues instead of playing them
struct LogAudio;

impl AudioBackend for LogAudio {
    fn trigger(&mut self, cue: SoundCue, volume: f32) {
        log::trace!("play {:?} @ {:.2}", cue, volume);
    }
}

/// Scripted input: one run, then back to the menu and out
struct Pilot {
    previous: InputSnapshot,
    runs: u32,
    play_frames: u64,
}

impl Pilot {
    fn new() -> Self {
        Self {
            previous: InputSnapshot::default(),
            runs: 0,
            play_frames: 0,
        }
    }

    /// A fresh press of `key` (released for one frame if it was already down)
    fn tap(&self, key: Key) -> InputSnapshot {
        if self.previous.keys.contains(key) {
            InputSnapshot::default()
        } else {
            InputSnapshot::pressed(&[key])
        }
    }

    fn next_input(&mut self, game: &Game) -> InputFrame {
        let current = match game.mode() {
            Mode::Menu { selection } => {
                if self.runs == 0 && selection == 0 {
                    self.play_frames = 0;
                    self.tap(Key::Enter)
                } else if self.runs > 0 && selection != 2 {
                    self.tap(Key::Up)
                } else if self.runs > 0 {
                    self.tap(Key::Enter)
                } else {
                    self.tap(Key::Down)
                }
            }
            Mode::Playing => {
                self.play_frames += 1;
                if self.play_frames as f64 > PLAY_SECONDS * FRAME_RATE {
                    self.runs += 1;
                    self.tap(Key::Escape)
                } else {
                    self.steer(game)
                }
            }
            Mode::Paused { selection } => {
                if selection == 0 {
                    self.tap(Key::Down)
                } else {
                    self.tap(Key::Enter)
                }
            }
            Mode::Options => self.tap(Key::Escape),
            Mode::Victory | Mode::GameOver => {
                self.runs += 1;
                self.tap(Key::Escape)
            }
        };

        let frame = InputFrame::new(current, self.previous);
        self.previous = current;
        frame
    }

    /// Chase the lowest hostile and keep the trigger down
    fn steer(&self, game: &Game) -> InputSnapshot {
        let session = game.session();
        let ship_x = session.ship.bounds().center().x;
        let target = session
            .hostiles
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|h| h.bounds().center().x);

        let mut keys = vec![Key::Fire];
        match target {
            Some(x) if x < ship_x - 8.0 => keys.push(Key::Left),
            Some(x) if x > ship_x + 8.0 => keys.push(Key::Right),
            _ => {}
        }
        InputSnapshot::pressed(&keys)
    }
}

fn main() {
    env_logger::init();
    log::info!("Astro Defender (headless) starting...");

    let tuning = Tuning::load_from("tuning.json");
    let settings = Settings::load_from("settings.json");
    let highscore_path =
        std::env::var("ASTRO_DEFENDER_HIGHSCORE").unwrap_or_else(|_| "highscore.txt".to_string());
    let high_score = HighScoreStore::open(highscore_path);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let audio = AudioManager::from_settings(&settings);
    let mut game = Game::new(tuning, settings, AssetManifest::default(), high_score, seed);
    let mut backend = LogAudio;
    let mut clock = FrameClock::new();
    let mut pilot = Pilot::new();

    for frame_index in 0..MAX_FRAMES {
        let dt = clock.advance(frame_index as f64 / FRAME_RATE);
        let input = pilot.next_input(&game);
        let output = game.step(input, dt);

        audio.dispatch(&mut backend, &output.cues);
        log::trace!(
            "frame {}: {} draw commands",
            frame_index,
            output.frame.commands.len()
        );

        if output.exit {
            log::info!("Exit after {} frames", frame_index + 1);
            break;
        }
    }

    println!(
        "Final level {}, high score {}",
        game.session().level,
        game.high_score()
    );
}
