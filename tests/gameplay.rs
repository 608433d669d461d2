//! End-to-end runs through the public `Game` API

use astro_defender::assets::AssetManifest;
use astro_defender::audio::SoundCue;
use astro_defender::platform::{InputFrame, InputSnapshot, Key};
use astro_defender::sim::{GameEvent, Hostile, Projectile};
use astro_defender::{Game, HighScoreStore, Mode, QualityPreset, Settings, StepOutput, Tuning};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn game_with(store: HighScoreStore, seed: u64) -> Game {
    Game::new(
        Tuning::default(),
        Settings::default(),
        AssetManifest::default(),
        store,
        seed,
    )
}

fn press(game: &mut Game, key: Key) -> StepOutput {
    game.step(
        InputFrame::new(InputSnapshot::pressed(&[key]), InputSnapshot::default()),
        DT,
    )
}

fn idle(game: &mut Game) -> StepOutput {
    game.step(InputFrame::default(), DT)
}

fn hostile_over(pos: Vec2) -> Hostile {
    Hostile::new(pos, Vec2::ZERO, Vec2::splat(160.0), 0.5)
}

#[test]
fn test_malformed_high_score_file_reads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.txt");
    std::fs::write(&path, "abc").unwrap();

    let game = game_with(HighScoreStore::open(&path), 1);
    assert_eq!(game.high_score(), 0);
}

#[test]
fn test_game_over_persists_high_score() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.txt");
    std::fs::write(&path, "1000").unwrap();

    let mut game = game_with(HighScoreStore::open(&path), 2);
    press(&mut game, Key::Enter);
    game.session_mut().score = 1500;
    game.session_mut().threshold = 10_000;
    game.session_mut().health = 10;
    game.session_mut()
        .hostiles
        .push(hostile_over(Vec2::new(100.0, 1300.0)));

    let out = idle(&mut game);
    assert_eq!(game.mode(), Mode::GameOver);
    assert_eq!(game.high_score(), 1500);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1500");

    let cues: Vec<SoundCue> = out.cues.iter().map(|c| c.cue).collect();
    assert_eq!(
        cues,
        vec![SoundCue::HullBreach, SoundCue::GameOver, SoundCue::HighScore]
    );

    // A worse run leaves the file alone
    press(&mut game, Key::Enter);
    game.session_mut().score = 200;
    game.session_mut().health = 0;
    idle(&mut game);
    assert_eq!(game.mode(), Mode::GameOver);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1500");
}

#[test]
fn test_ship_contact_is_instant_game_over() {
    let mut game = game_with(HighScoreStore::in_memory(0), 3);
    press(&mut game, Key::Enter);
    let ship = game.session().ship.bounds();
    game.session_mut().hostiles.push(hostile_over(ship.min));
    idle(&mut game);
    assert_eq!(game.mode(), Mode::GameOver);
    assert_eq!(game.session().health, 100);
}

#[test]
fn test_clearing_last_level_is_victory() {
    let mut game = game_with(HighScoreStore::in_memory(0), 4);
    for _ in 0..12 {
        press(&mut game, Key::Right);
    }
    assert_eq!(game.selected_level(), 10);
    press(&mut game, Key::Enter);
    assert_eq!(game.session().threshold, 100_000);

    game.session_mut().score = 99_950;
    game.session_mut()
        .hostiles
        .push(hostile_over(Vec2::new(500.0, 300.0)));
    game.session_mut()
        .projectiles
        .push(Projectile::new(Vec2::new(540.0, 345.0), Vec2::ZERO));

    let out = idle(&mut game);
    assert_eq!(game.mode(), Mode::Victory);
    // 10 levels' worth of points per kill, threshold taken off before winning
    assert_eq!(game.session().score, 950);
    assert_eq!(game.high_score(), 950);
    assert!(out.frame.texts().any(|t| t == "VICTORY!"));

    press(&mut game, Key::Enter);
    assert_eq!(game.mode(), Mode::Playing);
    assert_eq!(game.session().level, 10);
}

#[test]
fn test_same_seed_same_run() {
    let fire = InputSnapshot::pressed(&[Key::Fire, Key::Left]);
    let run = |seed: u64| {
        let mut game = game_with(HighScoreStore::in_memory(0), seed);
        press(&mut game, Key::Enter);
        for _ in 0..600 {
            game.step(InputFrame::new(fire, fire), DT);
        }
        let s = game.session();
        (
            s.score,
            s.health,
            s.hostiles.iter().map(|h| h.pos).collect::<Vec<_>>(),
        )
    };
    assert_eq!(run(77), run(77));
}

#[test]
fn test_hostiles_arrive_and_descend() {
    let mut game = game_with(HighScoreStore::in_memory(0), 5);
    press(&mut game, Key::Enter);
    // Spawn interval is 2s at level 1
    for _ in 0..130 {
        idle(&mut game);
    }
    let session = game.session();
    assert_eq!(session.hostiles.len(), 1);
    let area = game.tuning().play_area();
    let h = &session.hostiles[0];
    assert!(h.pos.x >= area.left());
    assert!(h.bounds().right() <= area.right());
    assert!(h.bounds().bottom() > area.top());
    assert_eq!(h.vel, Vec2::new(0.0, 150.0));
}

#[test]
fn test_low_quality_caps_particles() {
    let mut game = Game::new(
        Tuning::default(),
        Settings::from_preset(QualityPreset::Low),
        AssetManifest::default(),
        HighScoreStore::in_memory(0),
        6,
    );
    press(&mut game, Key::Enter);
    for i in 0..5 {
        let x = 200.0 + i as f32 * 200.0;
        game.session_mut()
            .hostiles
            .push(hostile_over(Vec2::new(x, 300.0)));
        game.session_mut()
            .projectiles
            .push(Projectile::new(Vec2::new(x + 40.0, 345.0), Vec2::ZERO));
    }
    idle(&mut game);
    assert_eq!(game.session().particles.len(), 100);
}

#[test]
fn test_level_up_event_and_cue() {
    let mut game = game_with(HighScoreStore::in_memory(0), 8);
    press(&mut game, Key::Enter);
    game.session_mut().score = 1000;
    game.session_mut().events.clear();
    let out = idle(&mut game);
    assert_eq!(game.session().level, 2);
    assert_eq!(game.session().gun_level, 2);
    assert!(out.cues.iter().any(|c| c.cue == SoundCue::LevelUp));
    assert!(game.session().events.is_empty());

    // Events are drained into cues every step
    game.session_mut().events.push(GameEvent::MenuMove);
    let out = idle(&mut game);
    assert!(out.cues.iter().any(|c| c.cue == SoundCue::MenuMove));
}

#[test]
fn test_pause_freezes_hostiles() {
    let mut game = game_with(HighScoreStore::in_memory(0), 9);
    press(&mut game, Key::Enter);
    game.session_mut().hostiles.push(Hostile::new(
        Vec2::new(300.0, 300.0),
        Vec2::new(0.0, 150.0),
        Vec2::splat(160.0),
        0.5,
    ));
    press(&mut game, Key::Escape);
    let before = game.session().hostiles[0].pos;
    for _ in 0..30 {
        idle(&mut game);
    }
    assert_eq!(game.session().hostiles[0].pos, before);
    assert!(matches!(game.mode(), Mode::Paused { .. }));
}

#[test]
fn test_long_frame_is_clamped() {
    let mut game = game_with(HighScoreStore::in_memory(0), 10);
    press(&mut game, Key::Enter);
    game.session_mut().hostiles.push(Hostile::new(
        Vec2::new(300.0, 300.0),
        Vec2::new(0.0, 150.0),
        Vec2::splat(160.0),
        0.5,
    ));
    game.step(InputFrame::default(), 5.0);
    // 0.1s at 150 px/s
    assert!((game.session().hostiles[0].pos.y - 315.0).abs() < 1e-3);
}
