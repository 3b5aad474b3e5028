//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (velocities are in pixels per tick)
//! - Stable iteration order (blocks in grid order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use autopilot::steer;
pub use collision::{hits_block, hits_paddle, Aabb};
pub use input::{PaddleCommand, apply_command};
pub use state::{Ball, Block, GameEvent, GamePhase, GameState, Paddle, generate_grid};
pub use tick::tick;
