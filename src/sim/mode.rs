//! Game-mode state machine
//!
//! Exactly one mode handles input and update per tick. Every transition returns
//! straight out of the dispatch, so the new mode first runs on the next tick.
//!
//! ```text
//! Menu ──Start──▶ Playing ──Esc──▶ Paused ──Continue──▶ Playing
//!  ▲  ◀──Esc── Options              │
//!  │                                └──Leave──▶ Menu
//!  └──Esc── GameOver / Victory ──Enter──▶ Playing
//! ```

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, Session};
use super::tick::{PlayOutcome, tick_playing};
use crate::assets::AssetManifest;
use crate::audio::{self, CueRequest};
use crate::consts::{MENU_ITEMS, PAUSE_ITEMS};
use crate::highscores::HighScoreStore;
use crate::platform::input::{InputFrame, Key, KeySet};
use crate::platform::time::clamp_dt;
use crate::renderer::{self, Frame};
use crate::settings::Settings;
use crate::tuning::Tuning;
use crate::wrap_index;

/// Main menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuItem {
    StartGame,
    Options,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; MENU_ITEMS] = [MenuItem::StartGame, MenuItem::Options, MenuItem::Exit];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::StartGame => "Start Game",
            MenuItem::Options => "Options",
            MenuItem::Exit => "Exit",
        }
    }
}

/// Pause menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PauseItem {
    Continue,
    LeaveToMenu,
}

impl PauseItem {
    pub const ALL: [PauseItem; PAUSE_ITEMS] = [PauseItem::Continue, PauseItem::LeaveToMenu];

    pub fn label(self) -> &'static str {
        match self {
            PauseItem::Continue => "Continue",
            PauseItem::LeaveToMenu => "Leave to Menu",
        }
    }
}

/// Active mode plus its mode-local state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Menu { selection: usize },
    Playing,
    Paused { selection: usize },
    Options,
    Victory,
    GameOver,
}

impl Mode {
    pub const MENU: Mode = Mode::Menu { selection: 0 };

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Menu { .. } => "Menu",
            Mode::Playing => "Playing",
            Mode::Paused { .. } => "Paused",
            Mode::Options => "Options",
            Mode::Victory => "Victory",
            Mode::GameOver => "GameOver",
        }
    }
}

/// Everything one `step` hands back to the shell
#[derive(Debug, Clone)]
pub struct StepOutput {
    /// Draw commands for this frame
    pub frame: Frame,
    /// Sounds to trigger
    pub cues: Vec<CueRequest>,
    /// The process should exit normally
    pub exit: bool,
}

/// Top-level game controller
#[derive(Debug)]
pub struct Game {
    mode: Mode,
    session: Session,
    /// Start level chosen in the menu
    selected_level: u32,
    high_score: HighScoreStore,
    /// Presses already acted on, suppressed until released
    consumed: KeySet,
    tuning: Tuning,
    settings: Settings,
    assets: AssetManifest,
}

impl Game {
    pub fn new(
        tuning: Tuning,
        settings: Settings,
        assets: AssetManifest,
        high_score: HighScoreStore,
        seed: u64,
    ) -> Self {
        let session = Session::new(&tuning, &assets, seed, settings.max_particles());
        Self {
            mode: Mode::MENU,
            session,
            selected_level: 1,
            high_score,
            consumed: KeySet::EMPTY,
            tuning,
            settings,
            assets,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn selected_level(&self) -> u32 {
        self.selected_level
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.value()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn assets(&self) -> &AssetManifest {
        &self.assets
    }

    /// Run one tick: update the active mode, then build its frame
    pub fn step(&mut self, input: InputFrame, dt: f32) -> StepOutput {
        let exit = self.update(input, clamp_dt(dt));
        let frame = renderer::build_frame(self);
        let cues = audio::cues_for_events(&self.session.drain_events());
        StepOutput { frame, cues, exit }
    }

    /// Dispatch to the active mode; returns true when the game should exit
    fn update(&mut self, mut input: InputFrame, dt: f32) -> bool {
        if input.quit_requested() {
            log::info!("Quit requested from {}", self.mode.name());
            return true;
        }

        input.carry(self.consumed);
        let exit = match self.mode {
            Mode::Menu { selection } => self.update_menu(selection, &mut input),
            Mode::Playing => {
                self.update_playing(&mut input, dt);
                false
            }
            Mode::Paused { selection } => {
                self.update_paused(selection, &mut input);
                false
            }
            Mode::Options => {
                if input.just_pressed(Key::Escape) {
                    input.consume(Key::Escape);
                    self.set_mode(Mode::Menu {
                        selection: menu_index(MenuItem::Options),
                    });
                }
                false
            }
            Mode::Victory | Mode::GameOver => {
                self.update_terminal(&mut input);
                false
            }
        };
        self.consumed = input.consumed();
        exit
    }

    fn update_menu(&mut self, selection: usize, input: &mut InputFrame) -> bool {
        if input.just_pressed(Key::Enter) {
            input.consume(Key::Enter);
            self.session.events.push(GameEvent::MenuSelect);
            match MenuItem::ALL[selection] {
                MenuItem::StartGame => {
                    self.session.reset(self.selected_level, &self.tuning);
                    log::info!("Starting run at level {}", self.selected_level);
                    self.set_mode(Mode::Playing);
                }
                MenuItem::Options => self.set_mode(Mode::Options),
                MenuItem::Exit => {
                    log::info!("Exit selected");
                    return true;
                }
            }
            return false;
        }

        let mut selection = selection;
        if input.just_pressed(Key::Up) {
            selection = wrap_index(selection, -1, MENU_ITEMS);
        }
        if input.just_pressed(Key::Down) {
            selection = wrap_index(selection, 1, MENU_ITEMS);
        }

        let mut level = self.selected_level as i64;
        if input.just_pressed(Key::Left) {
            level -= 1;
        }
        if input.just_pressed(Key::Right) {
            level += 1;
        }
        let level = self.tuning.clamp_level(level);

        let next = Mode::Menu { selection };
        if next != self.mode || level != self.selected_level {
            self.session.events.push(GameEvent::MenuMove);
        }
        self.selected_level = level;
        self.mode = next;
        false
    }

    fn update_playing(&mut self, input: &mut InputFrame, dt: f32) {
        if input.just_pressed(Key::Escape) {
            input.consume(Key::Escape);
            self.set_mode(Mode::Paused { selection: 0 });
            return;
        }

        match tick_playing(&mut self.session, input, dt, &self.tuning) {
            PlayOutcome::Continue => {}
            PlayOutcome::GameOver => {
                self.session.events.push(GameEvent::GameOver {
                    score: self.session.score,
                });
                self.enter_terminal(Mode::GameOver);
            }
            PlayOutcome::Victory => {
                self.session.events.push(GameEvent::Victory {
                    score: self.session.score,
                });
                self.enter_terminal(Mode::Victory);
            }
        }
    }

    fn update_paused(&mut self, selection: usize, input: &mut InputFrame) {
        if input.just_pressed(Key::Enter) {
            input.consume(Key::Enter);
            self.session.events.push(GameEvent::MenuSelect);
            match PauseItem::ALL[selection] {
                PauseItem::Continue => self.set_mode(Mode::Playing),
                PauseItem::LeaveToMenu => {
                    self.session.reset(self.selected_level, &self.tuning);
                    self.set_mode(Mode::MENU);
                }
            }
            return;
        }

        let mut next = selection;
        if input.just_pressed(Key::Up) {
            next = wrap_index(next, -1, PAUSE_ITEMS);
        }
        if input.just_pressed(Key::Down) {
            next = wrap_index(next, 1, PAUSE_ITEMS);
        }
        if next != selection {
            self.session.events.push(GameEvent::MenuMove);
            self.mode = Mode::Paused { selection: next };
        }
    }

    fn update_terminal(&mut self, input: &mut InputFrame) {
        self.record_high_score();

        if input.just_pressed(Key::Enter) {
            input.consume(Key::Enter);
            let level = self.session.start_level;
            self.session.reset(level, &self.tuning);
            self.set_mode(Mode::Playing);
        } else if input.just_pressed(Key::Escape) {
            input.consume(Key::Escape);
            self.session.reset(self.selected_level, &self.tuning);
            self.set_mode(Mode::MENU);
        }
    }

    fn enter_terminal(&mut self, mode: Mode) {
        self.set_mode(mode);
        self.record_high_score();
    }

    fn record_high_score(&mut self) {
        let score = self.session.score;
        if self.high_score.record(score) {
            self.session.events.push(GameEvent::NewHighScore { score });
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        log::info!("Mode {} -> {}", self.mode.name(), mode.name());
        self.mode = mode;
    }
}

fn menu_index(item: MenuItem) -> usize {
    MenuItem::ALL.iter().position(|&i| i == item).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::input::InputSnapshot;

    fn game() -> Game {
        Game::new(
            Tuning::default(),
            Settings::default(),
            AssetManifest::default(),
            HighScoreStore::in_memory(0),
            1234,
        )
    }

    fn press(game: &mut Game, key: Key) -> StepOutput {
        game.step(
            InputFrame::new(InputSnapshot::pressed(&[key]), InputSnapshot::default()),
            0.016,
        )
    }

    fn idle(game: &mut Game) -> StepOutput {
        game.step(InputFrame::default(), 0.016)
    }

    #[test]
    fn test_menu_selection_wraps() {
        let mut g = game();
        press(&mut g, Key::Up);
        assert_eq!(g.mode(), Mode::Menu { selection: 2 });
        press(&mut g, Key::Down);
        assert_eq!(g.mode(), Mode::Menu { selection: 0 });
    }

    #[test]
    fn test_level_selection_clamps() {
        let mut g = game();
        press(&mut g, Key::Left);
        assert_eq!(g.selected_level(), 1);
        for _ in 0..20 {
            press(&mut g, Key::Right);
        }
        assert_eq!(g.selected_level(), 10);
    }

    #[test]
    fn test_held_key_does_not_repeat() {
        let mut g = game();
        let down = InputSnapshot::pressed(&[Key::Down]);
        g.step(InputFrame::new(down, InputSnapshot::default()), 0.016);
        g.step(InputFrame::new(down, down), 0.016);
        assert_eq!(g.mode(), Mode::Menu { selection: 1 });
    }

    #[test]
    fn test_start_uses_selected_level() {
        let mut g = game();
        press(&mut g, Key::Right);
        press(&mut g, Key::Right);
        press(&mut g, Key::Enter);
        assert_eq!(g.mode(), Mode::Playing);
        assert_eq!(g.session().level, 3);
        assert_eq!(g.session().threshold, 9000);
    }

    #[test]
    fn test_options_and_back() {
        let mut g = game();
        press(&mut g, Key::Down);
        press(&mut g, Key::Enter);
        assert_eq!(g.mode(), Mode::Options);
        press(&mut g, Key::Enter);
        assert_eq!(g.mode(), Mode::Options);
        press(&mut g, Key::Escape);
        assert_eq!(g.mode(), Mode::Menu { selection: 1 });
    }

    #[test]
    fn test_exit_item_requests_exit() {
        let mut g = game();
        press(&mut g, Key::Up);
        assert!(press(&mut g, Key::Enter).exit);
    }

    #[test]
    fn test_quit_button_from_any_mode() {
        let mut g = game();
        press(&mut g, Key::Enter);
        assert_eq!(g.mode(), Mode::Playing);
        let quit = InputSnapshot {
            quit: true,
            ..Default::default()
        };
        assert!(g.step(InputFrame::new(quit, InputSnapshot::default()), 0.016).exit);
    }

    #[test]
    fn test_pause_and_continue_keeps_state() {
        let mut g = game();
        press(&mut g, Key::Enter);
        g.session_mut().score = 300;
        press(&mut g, Key::Escape);
        assert_eq!(g.mode(), Mode::Paused { selection: 0 });

        // Simulation is frozen while paused
        let timer = g.session().spawner.timer;
        idle(&mut g);
        assert_eq!(g.session().spawner.timer, timer);

        press(&mut g, Key::Enter);
        assert_eq!(g.mode(), Mode::Playing);
        assert_eq!(g.session().score, 300);
    }

    #[test]
    fn test_pause_leave_to_menu_resets() {
        let mut g = game();
        press(&mut g, Key::Enter);
        g.session_mut().score = 700;
        g.session_mut().health = 40;
        press(&mut g, Key::Escape);
        press(&mut g, Key::Down);
        assert_eq!(g.mode(), Mode::Paused { selection: 1 });
        press(&mut g, Key::Enter);

        assert_eq!(g.mode(), Mode::Menu { selection: 0 });
        assert_eq!(g.session().score, 0);
        assert_eq!(g.session().health, 100);
        assert!(g.session().hostiles.is_empty());
        assert!(g.session().projectiles.is_empty());
    }

    #[test]
    fn test_held_confirm_does_not_leak_into_menu() {
        let mut g = game();
        press(&mut g, Key::Enter);
        press(&mut g, Key::Escape);
        press(&mut g, Key::Down);
        assert_eq!(g.mode(), Mode::Paused { selection: 1 });

        // Leave to Menu, then the shell keeps reporting Enter as a fresh press
        press(&mut g, Key::Enter);
        assert_eq!(g.mode(), Mode::MENU);
        press(&mut g, Key::Enter);
        assert_eq!(g.mode(), Mode::MENU);

        // Released and pressed again: Start Game
        idle(&mut g);
        press(&mut g, Key::Enter);
        assert_eq!(g.mode(), Mode::Playing);
    }

    #[test]
    fn test_game_over_records_and_restarts() {
        let mut g = game();
        press(&mut g, Key::Enter);
        g.session_mut().score = 2500;
        g.session_mut().health = 0;
        idle(&mut g);
        assert_eq!(g.mode(), Mode::GameOver);
        assert_eq!(g.high_score(), 2500);

        press(&mut g, Key::Enter);
        assert_eq!(g.mode(), Mode::Playing);
        assert_eq!(g.session().score, 0);
    }

    #[test]
    fn test_game_over_escape_to_menu() {
        let mut g = game();
        press(&mut g, Key::Enter);
        g.session_mut().health = 0;
        idle(&mut g);
        assert_eq!(g.mode(), Mode::GameOver);
        press(&mut g, Key::Escape);
        assert_eq!(g.mode(), Mode::MENU);
    }
}
