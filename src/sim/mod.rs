//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{ball_paddle_collision, resolve_wall_collision};
pub use rect::Rect;
pub use state::{Ball, Brick, BrickGrid, GameOutcome, GamePhase, GameState, Paddle};
pub use tick::{Steer, TickInput, tick};
