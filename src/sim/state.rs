//! Game state and core simulation types
//!
//! Everything that must be persisted for resume lives here.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision;
use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; only restart or quit act on the state
    GameOver,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Ball fell below the paddle
    BallLost,
    /// Every brick destroyed
    Cleared,
}

/// The bouncing ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Per-tick displacement. Component magnitudes stay constant; bounces
    /// only flip signs.
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// New ball at the serve position. The horizontal direction comes from
    /// the seeded RNG; vertical always starts downward.
    pub fn new(pos: Vec2, serve_left: bool) -> Self {
        let dx = if serve_left { -BALL_STEP } else { BALL_STEP };
        Self {
            pos,
            vel: Vec2::new(dx, BALL_STEP),
            radius: BALL_RADIUS,
        }
    }

    /// Advance one tick of movement, unconditionally
    pub fn step(&mut self) {
        self.pos += self.vel;
    }

    /// Flip horizontal direction (left/right wall)
    pub fn bounce_horizontal(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Flip vertical direction (top wall, paddle, brick)
    pub fn bounce_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// True once the ball's center has fallen past the bottom edge
    pub fn is_below_screen(&self, height: f32) -> bool {
        self.pos.y > height
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    /// Center position
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Distance moved per steering input
    pub step: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PADDLE_START_X, PADDLE_Y),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            step: PADDLE_STEP,
        }
    }
}

impl Paddle {
    /// The paddle as a screen rectangle (for rendering)
    pub fn as_rect(&self) -> Rect {
        Rect::from_center(self.pos, self.width, self.height)
    }

    /// Step left. A step that would leave the playfield is a silent no-op.
    pub fn move_left(&mut self) {
        if self.pos.x - self.width / 2.0 > self.step {
            self.pos.x -= self.step;
        }
    }

    /// Step right, bounded by the playfield width. Out-of-range steps are
    /// silently ignored.
    pub fn move_right(&mut self, screen_width: f32) {
        if self.pos.x + self.width / 2.0 < screen_width - self.step {
            self.pos.x += self.step;
        }
    }

    /// Ball-vs-paddle hit test. Uses the ball's vertical span but only its
    /// horizontal center: edge grazes within one radius are misses (see
    /// `test_paddle_edge_graze_is_a_miss`).
    pub fn hits_ball(&self, ball: &Ball) -> bool {
        collision::ball_paddle_collision(ball, self)
    }
}

/// A single destructible brick
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// Row color index (0..BRICK_COLOR_COUNT)
    pub color_index: u32,
    destroyed: bool,
}

impl Brick {
    pub fn new(rect: Rect, color_index: u32) -> Self {
        Self {
            rect,
            color_index,
            destroyed: false,
        }
    }

    /// Ball-vs-brick hit test. Always false once destroyed.
    pub fn hits_ball(&self, ball: &Ball) -> bool {
        if self.destroyed {
            return false;
        }
        self.rect.overlaps_circle_box(ball.pos, ball.radius)
    }

    /// Mark destroyed. Idempotent; live→destroyed happens at most once.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

/// Row-major grid of bricks. Dimensions are fixed for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: u32,
    cols: u32,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn new(rows: u32, cols: u32, brick_width: f32, brick_height: f32, origin: Vec2) -> Self {
        let mut bricks = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows {
            for col in 0..cols {
                let rect = Rect::new(
                    origin.x + col as f32 * brick_width,
                    origin.y + row as f32 * brick_height,
                    brick_width,
                    brick_height,
                );
                bricks.push(Brick::new(rect, row % BRICK_COLOR_COUNT));
            }
        }
        Self { rows, cols, bricks }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    /// Destroy the first brick the ball overlaps, in row-major scan order.
    /// At most one brick per tick, even when the ball overlaps two.
    pub fn resolve_ball_collision(&mut self, ball: &Ball) -> bool {
        for brick in &mut self.bricks {
            if brick.hits_ball(ball) {
                brick.destroy();
                return true;
            }
        }
        false
    }

    /// Win condition: full scan over every brick
    pub fn all_destroyed(&self) -> bool {
        self.bricks.iter().all(Brick::is_destroyed)
    }

    /// Bricks still standing
    pub fn remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.is_destroyed()).count()
    }
}

fn default_running() -> bool {
    true
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Score; increases by SCORE_PER_BRICK per destroyed brick, never drops
    pub score: u64,
    pub phase: GamePhase,
    /// Set exactly when phase becomes GameOver
    pub outcome: Option<GameOutcome>,
    /// Cleared by the quit input; the frontend exits when false. Excluded
    /// from saves so a resumed run is always runnable.
    #[serde(skip, default = "default_running")]
    pub running: bool,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
}

impl GameState {
    /// New game with the default 5x10 grid
    pub fn new(seed: u64) -> Self {
        Self::with_grid(seed, GRID_ROWS, GRID_COLS)
    }

    /// New game with a custom grid size (from settings)
    pub fn with_grid(seed: u64, rows: u32, cols: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let serve_left = rng.random_bool(0.5);
        Self {
            seed,
            time_ticks: 0,
            score: 0,
            phase: GamePhase::Running,
            outcome: None,
            running: true,
            ball: Ball::new(Vec2::new(BALL_START_X, BALL_START_Y), serve_left),
            paddle: Paddle::default(),
            bricks: BrickGrid::new(
                rows,
                cols,
                BRICK_WIDTH,
                BRICK_HEIGHT,
                Vec2::new(GRID_START_X, GRID_START_Y),
            ),
        }
    }

    /// Rebuild the world for a fresh run, keeping the grid dimensions.
    /// The seed is advanced so the new serve direction is independent.
    pub fn restart(&mut self) {
        let next_seed = self.seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
        *self = Self::with_grid(next_seed, self.bricks.rows(), self.bricks.cols());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_step_is_pure_translation() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), false);
        ball.step();
        assert_eq!(ball.pos, Vec2::new(403.0, 303.0));
    }

    #[test]
    fn test_bounce_flips_sign_only() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), true);
        let speed = ball.vel.abs();
        ball.bounce_horizontal();
        assert_eq!(ball.vel.x, BALL_STEP);
        ball.bounce_vertical();
        assert_eq!(ball.vel.y, -BALL_STEP);
        assert_eq!(ball.vel.abs(), speed);
    }

    #[test]
    fn test_paddle_ignores_out_of_range_steps() {
        let mut paddle = Paddle::default();
        // Walk all the way left; position must never pass the edge guard
        for _ in 0..100 {
            paddle.move_left();
        }
        let x_at_edge = paddle.pos.x;
        assert!(x_at_edge - paddle.width / 2.0 <= paddle.step);
        paddle.move_left();
        assert_eq!(paddle.pos.x, x_at_edge);

        for _ in 0..100 {
            paddle.move_right(SCREEN_WIDTH);
        }
        let x_at_edge = paddle.pos.x;
        assert!(x_at_edge + paddle.width / 2.0 >= SCREEN_WIDTH - paddle.step);
        paddle.move_right(SCREEN_WIDTH);
        assert_eq!(paddle.pos.x, x_at_edge);
    }

    #[test]
    fn test_brick_destroy_is_idempotent() {
        let mut brick = Brick::new(Rect::new(0.0, 50.0, 80.0, 30.0), 0);
        assert!(!brick.is_destroyed());
        brick.destroy();
        assert!(brick.is_destroyed());
        brick.destroy();
        assert!(brick.is_destroyed());
    }

    #[test]
    fn test_destroyed_brick_never_hits() {
        let mut brick = Brick::new(Rect::new(0.0, 50.0, 80.0, 30.0), 0);
        let ball = Ball::new(Vec2::new(40.0, 65.0), false);
        assert!(brick.hits_ball(&ball));
        brick.destroy();
        assert!(!brick.hits_ball(&ball));
    }

    #[test]
    fn test_grid_single_brick_hits_once() {
        let mut grid = BrickGrid::new(1, 1, 80.0, 30.0, Vec2::new(0.0, 50.0));
        let ball = Ball::new(Vec2::new(40.0, 65.0), false);
        assert!(grid.resolve_ball_collision(&ball));
        // Identical second call: the brick is gone
        assert!(!grid.resolve_ball_collision(&ball));
        assert!(grid.all_destroyed());
    }

    #[test]
    fn test_grid_destroys_at_most_one_per_call() {
        // Two adjacent bricks, ball overlapping both near the shared edge
        let mut grid = BrickGrid::new(1, 2, 80.0, 30.0, Vec2::new(0.0, 50.0));
        let ball = Ball::new(Vec2::new(80.0, 65.0), false);
        assert!(grid.resolve_ball_collision(&ball));
        assert_eq!(grid.remaining(), 1);
    }

    #[test]
    fn test_grid_layout_row_major() {
        let grid = BrickGrid::new(2, 3, 80.0, 30.0, Vec2::new(0.0, 50.0));
        let rects: Vec<_> = grid.iter().map(|b| b.rect).collect();
        assert_eq!(rects.len(), 6);
        assert_eq!(rects[0].min, Vec2::new(0.0, 50.0));
        assert_eq!(rects[2].min, Vec2::new(160.0, 50.0));
        assert_eq!(rects[3].min, Vec2::new(0.0, 80.0));
    }

    #[test]
    fn test_grid_color_cycles_by_row() {
        let grid = BrickGrid::new(7, 1, 80.0, 30.0, Vec2::new(0.0, 50.0));
        let colors: Vec<_> = grid.iter().map(|b| b.color_index).collect();
        assert_eq!(colors, vec![0, 1, 2, 3, 4, 0, 1]);
    }

    #[test]
    fn test_determinism() {
        let state1 = GameState::new(99999);
        let state2 = GameState::new(99999);
        assert_eq!(state1.ball.vel, state2.ball.vel);
        assert_eq!(state1.ball.pos, state2.ball.pos);
    }

    #[test]
    fn test_restart_resets_world() {
        let mut state = GameState::with_grid(7, 3, 4);
        state.score = 120;
        state.phase = GamePhase::GameOver;
        state.outcome = Some(GameOutcome::BallLost);
        state.restart();
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.outcome.is_none());
        assert_eq!(state.bricks.rows(), 3);
        assert_eq!(state.bricks.cols(), 4);
        assert_ne!(state.seed, 7);
    }
}
