//! Fixed timestep simulation tick
//!
//! One tick = one iteration of the classic input -> update loop. Order per
//! tick: one buffered input, ball movement, wall resolution, paddle bounce,
//! brick bounce and score, loss check, win check.

use super::collision::resolve_wall_collision;
use super::state::{GameOutcome, GamePhase, GameState};
use crate::consts::*;

/// Paddle steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
}

/// Input commands for a single tick. At most one buffered key event is
/// carried per tick; the frontend clears one-shot flags after each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Paddle steering (held key)
    pub steer: Option<Steer>,
    /// Restart the run ('r')
    pub restart: bool,
    /// Quit the game ('q', or a click on the game-over screen)
    pub quit: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.quit {
        state.running = false;
        return;
    }

    if input.restart {
        state.restart();
        return;
    }

    // Game over is terminal: nothing moves until restart or quit
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    match input.steer {
        Some(Steer::Left) => state.paddle.move_left(),
        Some(Steer::Right) => state.paddle.move_right(SCREEN_WIDTH),
        None => {}
    }

    state.ball.step();
    resolve_wall_collision(&mut state.ball, SCREEN_WIDTH);

    if state.paddle.hits_ball(&state.ball) {
        state.ball.bounce_vertical();
    }

    if state.bricks.resolve_ball_collision(&state.ball) {
        state.ball.bounce_vertical();
        state.score += SCORE_PER_BRICK;
    }

    if state.ball.is_below_screen(SCREEN_HEIGHT) {
        state.phase = GamePhase::GameOver;
        state.outcome = Some(GameOutcome::BallLost);
    }

    if state.bricks.all_destroyed() {
        state.phase = GamePhase::GameOver;
        state.outcome = Some(GameOutcome::Cleared);
    }
}
