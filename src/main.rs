//! Brick Pong entry point
//!
//! Thin macroquad frontend: maps keys to tick inputs, advances the fixed
//! 50 Hz simulation behind an accumulator and draws the result. Quitting
//! mid-run quicksaves; the next launch resumes it.

use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::prelude::*;

use brick_pong::consts::*;
use brick_pong::persistence::{self, SaveSlots};
use brick_pong::render;
use brick_pong::sim::{GameOutcome, GamePhase, GameState, Steer, TickInput, tick};
use brick_pong::{HighScores, Settings};

const QUICKSAVE_SLOT: &str = "quicksave";

fn window_conf() -> Conf {
    Conf {
        window_title: "Brick Pong".to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Brick Pong starting");

    let settings = Settings::load();
    // Write back so a fresh install gets an editable file with sane values
    settings.save();
    let mut highscores = HighScores::load();

    let save_path = persistence::quicksave_path();
    let mut slots = SaveSlots::new();
    match persistence::load_from(&save_path) {
        Ok(saved) if saved.phase == GamePhase::Running => {
            log::info!("Resuming saved game (score {})", saved.score);
            slots.insert(QUICKSAVE_SLOT, saved);
        }
        Ok(_) => persistence::remove_save(&save_path),
        Err(err) => log::debug!("No resumable save: {err}"),
    }
    let state = slots.slot_mut(QUICKSAVE_SLOT, || {
        let seed = seed_from_clock();
        log::info!("New game with seed {seed}");
        GameState::with_grid(seed, settings.brick_rows, settings.brick_cols)
    });

    let mut input = TickInput::default();
    let mut accumulator = 0.0f32;
    let mut last_phase = state.phase;

    loop {
        input.steer = if is_key_down(KeyCode::Left) {
            Some(Steer::Left)
        } else if is_key_down(KeyCode::Right) {
            Some(Steer::Right)
        } else {
            None
        };
        if is_key_pressed(KeyCode::R) {
            input.restart = true;
        }
        if is_key_pressed(KeyCode::Q) {
            input.quit = true;
        }
        // A click dismisses the game-over screen
        if state.phase == GamePhase::GameOver && is_mouse_button_pressed(MouseButton::Left) {
            input.quit = true;
        }

        accumulator += get_frame_time();
        accumulator = accumulator.min(SIM_DT * MAX_SUBSTEPS as f32);
        while accumulator >= SIM_DT {
            tick(state, &input);
            accumulator -= SIM_DT;
            // One-shot inputs apply to a single tick
            input.restart = false;
            input.quit = false;
        }

        if state.phase != last_phase {
            if state.phase == GamePhase::GameOver {
                let cleared = matches!(state.outcome, Some(GameOutcome::Cleared));
                if let Some(rank) = highscores.add_score(state.score, cleared, unix_seconds()) {
                    log::info!("Run ended with score {} (rank {rank})", state.score);
                    highscores.save();
                }
                // Finished runs are not resumable
                persistence::remove_save(&save_path);
            }
            last_phase = state.phase;
        }

        if !state.running {
            break;
        }

        render::draw_frame(state, &settings, highscores.top_score(), get_fps());
        next_frame().await;
    }

    if state.phase == GamePhase::Running {
        match persistence::save_to(&save_path, state) {
            Ok(()) => log::info!("Game saved (score {})", state.score),
            Err(err) => log::warn!("Failed to save game: {err}"),
        }
    }
    log::info!("Bye");
}
