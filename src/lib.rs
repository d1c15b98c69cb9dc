//! Brick Pong - a classic paddle-and-bricks arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `render`: macroquad frame drawing
//! - `persistence`: Save/load with versioned JSON envelopes
//! - `settings`: Player preferences
//! - `highscores`: Local leaderboard

pub mod highscores;
pub mod persistence;
pub mod render;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (50 Hz, the classic fixed-sleep pacing)
    pub const SIM_DT: f32 = 1.0 / 50.0;
    /// Maximum queued ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-tick magnitude of each velocity component (only signs ever flip)
    pub const BALL_STEP: f32 = 3.0;
    pub const BALL_START_X: f32 = 400.0;
    pub const BALL_START_Y: f32 = 300.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Distance moved per steering input
    pub const PADDLE_STEP: f32 = 15.0;
    pub const PADDLE_START_X: f32 = 400.0;
    pub const PADDLE_Y: f32 = 550.0;

    /// Brick grid defaults
    pub const GRID_ROWS: u32 = 5;
    pub const GRID_COLS: u32 = 10;
    pub const BRICK_WIDTH: f32 = 80.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const GRID_START_X: f32 = 0.0;
    pub const GRID_START_Y: f32 = 50.0;
    /// Number of distinct brick row colors (rows cycle through them)
    pub const BRICK_COLOR_COUNT: u32 = 5;

    /// Points per destroyed brick
    pub const SCORE_PER_BRICK: u64 = 10;
}
