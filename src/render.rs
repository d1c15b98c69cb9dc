//! Frame drawing
//!
//! Draws the playfield with macroquad: black background, blue paddle, white
//! ball, brick rows cycling through five colors, plus the HUD text and the
//! game-over overlay.

use macroquad::prelude::*;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GameOutcome, GamePhase, GameState};

/// Row colors, cycled by `Brick::color_index`
const BRICK_COLORS: [Color; BRICK_COLOR_COUNT as usize] = [RED, ORANGE, YELLOW, GREEN, BLUE];

const HUD_FONT_SIZE: f32 = 24.0;
const OVERLAY_FONT_SIZE: f32 = 32.0;

/// Draw one frame of the current game state
pub fn draw_frame(state: &GameState, settings: &Settings, top_score: Option<u64>, fps: i32) {
    clear_background(BLACK);

    for brick in state.bricks.iter() {
        if brick.is_destroyed() {
            continue;
        }
        let rect = brick.rect;
        let color = BRICK_COLORS[brick.color_index as usize % BRICK_COLORS.len()];
        draw_rectangle(rect.min.x, rect.min.y, rect.size.x, rect.size.y, color);
        draw_rectangle_lines(rect.min.x, rect.min.y, rect.size.x, rect.size.y, 2.0, BLACK);
    }

    let paddle = state.paddle.as_rect();
    draw_rectangle(paddle.min.x, paddle.min.y, paddle.size.x, paddle.size.y, BLUE);

    draw_circle(state.ball.pos.x, state.ball.pos.y, state.ball.radius, WHITE);

    draw_hud(state, settings, top_score, fps);

    if state.phase == GamePhase::GameOver {
        draw_game_over(state);
    }
}

fn draw_hud(state: &GameState, settings: &Settings, top_score: Option<u64>, fps: i32) {
    draw_text(&format!("Score: {}", state.score), 20.0, 28.0, HUD_FONT_SIZE, WHITE);

    if let Some(best) = top_score {
        draw_text(&format!("Best: {best}"), 180.0, 28.0, HUD_FONT_SIZE, WHITE);
    }

    if settings.show_instructions {
        draw_centered(
            "Use LEFT and RIGHT arrow keys to move paddle. Press 'R' to restart",
            28.0,
            20.0,
            GRAY,
        );
    }

    if settings.show_fps {
        draw_text(&format!("{fps} fps"), SCREEN_WIDTH - 80.0, 28.0, HUD_FONT_SIZE, GRAY);
    }
}

fn draw_game_over(state: &GameState) {
    let message = match state.outcome {
        Some(GameOutcome::Cleared) => "You Win! All bricks destroyed!",
        _ => "Game Over! Ball fell below paddle.",
    };
    draw_centered(message, SCREEN_HEIGHT / 2.0, OVERLAY_FONT_SIZE, WHITE);
    draw_centered(
        "Press 'R' to restart, 'Q' to quit, or click to close",
        SCREEN_HEIGHT / 2.0 + 36.0,
        HUD_FONT_SIZE,
        WHITE,
    );
}

fn draw_centered(text: &str, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, (SCREEN_WIDTH - dims.width) / 2.0, y, font_size, color);
}
