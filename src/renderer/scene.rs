//! Per-mode frame building

use glam::Vec2;

use super::commands::{Color, DrawCommand, Frame, background_for_level, colors, tint_color};
use super::layout::{TextLine, centered_text_block};
use crate::assets::SpriteId;
use crate::sim::{Game, MenuItem, Mode, PauseItem};

const LINE_SPACING: f32 = 18.0;
const HUD_MARGIN: f32 = 16.0;
const PROJECTILE_SCALE: f32 = 0.5;

/// Build the frame for whatever mode is active
pub fn build_frame(game: &Game) -> Frame {
    let mut frame = Frame::new(background_for_level(game.session().level));

    match game.mode() {
        Mode::Menu { selection } => draw_menu(&mut frame, game, selection),
        Mode::Playing => {
            draw_world(&mut frame, game);
            draw_hud(&mut frame, game);
        }
        Mode::Paused { selection } => {
            draw_world(&mut frame, game);
            draw_hud(&mut frame, game);
            draw_pause(&mut frame, game, selection);
        }
        Mode::Options => draw_options(&mut frame, game),
        Mode::Victory => draw_result(&mut frame, game, "VICTORY!", colors::VICTORY),
        Mode::GameOver => draw_result(&mut frame, game, "GAME OVER", colors::DANGER),
    }

    frame
}

fn screen_center(game: &Game) -> Vec2 {
    game.tuning().screen_size / 2.0
}

fn push_block(frame: &mut Frame, game: &Game, lines: &[TextLine]) {
    frame.extend(centered_text_block(
        lines,
        screen_center(game),
        LINE_SPACING,
        game.assets().glyph,
    ));
}

fn selectable(label: &str, selected: bool) -> TextLine {
    if selected {
        TextLine::new(format!("> {} <", label), colors::SELECTED).scaled(1.25)
    } else {
        TextLine::new(label, colors::UNSELECTED)
    }
}

fn draw_menu(frame: &mut Frame, game: &Game, selection: usize) {
    let mut lines = vec![TextLine::new("ASTRO DEFENDER", colors::TITLE).scaled(3.0)];
    lines.extend(
        MenuItem::ALL
            .iter()
            .enumerate()
            .map(|(i, item)| selectable(item.label(), i == selection)),
    );
    lines.push(TextLine::new(
        format!("Start level: < {} >", game.selected_level()),
        colors::WHITE,
    ));
    lines.push(TextLine::new(
        format!("High score: {}", game.high_score()),
        colors::HINT,
    ));
    push_block(frame, game, &lines);
}

fn draw_world(frame: &mut Frame, game: &Game) {
    let session = game.session();
    let assets = game.assets();

    // Ship (kicked down briefly after each shot)
    let mut ship_pos = session.ship.pos;
    if session.ship.is_recoiling() && game.settings().effective_recoil() {
        ship_pos += game.tuning().recoil_offset;
    }
    frame.sprite(SpriteId::Ship, ship_pos, 1.0, colors::WHITE);

    for particle in session.particles.iter() {
        let half = assets.particle * particle.size / 2.0;
        frame.sprite(
            SpriteId::Particle,
            particle.pos - half,
            particle.size,
            tint_color(particle.tint),
        );
    }

    for hostile in &session.hostiles {
        frame.sprite(hostile.sprite, hostile.pos, hostile.scale, colors::WHITE);
    }

    let half = assets.projectile * PROJECTILE_SCALE / 2.0;
    for projectile in &session.projectiles {
        frame.sprite(
            SpriteId::Projectile,
            projectile.pos - half,
            PROJECTILE_SCALE,
            colors::WHITE,
        );
    }
}

fn draw_hud(frame: &mut Frame, game: &Game) {
    let session = game.session();
    let health_color = if session.health <= 30 {
        colors::DANGER
    } else {
        colors::WHITE
    };
    let lines = [
        (format!("Score: {} / {}", session.score, session.threshold), colors::WHITE),
        (format!("Health: {}", session.health), health_color),
        (format!("Level: {}", session.level), colors::WHITE),
        (format!("Gun: {}", session.gun_level), colors::WHITE),
        (format!("High score: {}", game.high_score()), colors::HINT),
    ];

    let line_height = game.assets().glyph.y;
    for (i, (text, color)) in lines.into_iter().enumerate() {
        frame.commands.push(DrawCommand::Text {
            text,
            pos: Vec2::new(HUD_MARGIN, HUD_MARGIN + i as f32 * (line_height + 4.0)),
            color,
            scale: 1.0,
        });
    }
}

fn draw_pause(frame: &mut Frame, game: &Game, selection: usize) {
    let mut lines = vec![TextLine::new("PAUSED", colors::TITLE).scaled(2.0)];
    lines.extend(
        PauseItem::ALL
            .iter()
            .enumerate()
            .map(|(i, item)| selectable(item.label(), i == selection)),
    );
    push_block(frame, game, &lines);
}

fn draw_options(frame: &mut Frame, game: &Game) {
    let settings = game.settings();
    let lines = [
        TextLine::new("OPTIONS", colors::TITLE).scaled(2.0),
        TextLine::new(format!("Quality: {}", settings.quality.as_str()), colors::UNSELECTED),
        TextLine::new(
            format!("Particles: {}", if settings.particles { "on" } else { "off" }),
            colors::UNSELECTED,
        ),
        TextLine::new(
            format!("Volume: {:.0}%", settings.master_volume * 100.0),
            colors::UNSELECTED,
        ),
        TextLine::new("Press Escape to return", colors::HINT),
    ];
    push_block(frame, game, &lines);
}

fn draw_result(frame: &mut Frame, game: &Game, title: &str, color: Color) {
    let session = game.session();
    let lines = [
        TextLine::new(title, color).scaled(3.0),
        TextLine::new(format!("Score: {}", session.score), colors::WHITE),
        TextLine::new(format!("Level reached: {}", session.level), colors::WHITE),
        TextLine::new(format!("High score: {}", game.high_score()), colors::TITLE),
        TextLine::new("Enter: play again   Escape: menu", colors::HINT),
    ];
    push_block(frame, game, &lines);
}
