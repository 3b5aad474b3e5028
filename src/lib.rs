//! Brick Tap - a pocket-sized Breakout for chat mini-app containers
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, blocks, scoring, levels)
//! - `renderer`: WebGPU rendering pipeline
//! - `audio`: Procedural sound effects
//! - `platform`: Host (Telegram WebApp) handshake
//! - `settings`: Runtime configuration

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick every 8 ms)
    pub const SIM_DT: f32 = 0.008;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena dimensions (origin top-left, y grows downward)
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 450.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_X: f32 = 200.0;
    pub const BALL_START_Y: f32 = 200.0;
    /// Starting velocity, pixels per tick on each axis
    pub const BALL_START_SPEED: f32 = 2.0;
    /// Added to |dx| and |dy| on every level clear
    pub const BALL_SPEED_STEP: f32 = 0.5;

    /// Paddle defaults
    pub const PADDLE_START_X: f32 = 150.0;
    pub const PADDLE_Y: f32 = 400.0;
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Distance moved per left/right command
    pub const PADDLE_STEP: f32 = 30.0;

    /// Block grid layout
    pub const BLOCK_WIDTH: f32 = 60.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_COLUMNS: usize = 5;
    pub const BLOCK_COLUMN_SPACING: f32 = 80.0;
    pub const BLOCK_ROW_SPACING: f32 = 30.0;
    pub const BLOCK_TOP: f32 = 50.0;
    /// Blocks in the level 1 grid
    pub const INITIAL_BLOCKS: usize = 5;

    /// Score per destroyed block
    pub const SCORE_PER_BLOCK: u64 = 10;
}
