//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ball fell past the bottom edge; only restart leaves this phase
    Lost,
}

/// Something that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the paddle
    PaddleHit,
    /// A block was destroyed at the given position
    BlockBroken { pos: Vec2 },
    /// Grid cleared, now on `level`
    LevelCleared { level: u32 },
    /// Ball crossed the bottom edge
    BallLost,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            vel: Vec2::splat(BALL_START_SPEED),
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    /// Ball back at the start position, each velocity axis `step` faster
    /// in its current direction
    pub fn relaunched(&self, step: f32) -> Self {
        let speed_up = |v: f32| if v > 0.0 { v + step } else { v - step };
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            vel: Vec2::new(speed_up(self.vel.x), speed_up(self.vel.y)),
            radius: self.radius,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PADDLE_START_X, PADDLE_Y),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(self.width, self.height))
    }

    /// Rightmost x the paddle may occupy
    pub fn max_x(&self) -> f32 {
        ARENA_WIDTH - self.width
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }
}

/// A destructible block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Block {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width: BLOCK_WIDTH,
            height: BLOCK_HEIGHT,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(self.width, self.height))
    }
}

/// Lay out `count` blocks five to a row, left to right, top to bottom
pub fn generate_grid(count: usize) -> Vec<Block> {
    (0..count)
        .map(|i| {
            let col = (i % BLOCK_COLUMNS) as f32;
            let row = (i / BLOCK_COLUMNS) as f32;
            Block::new(
                col * BLOCK_COLUMN_SPACING,
                BLOCK_TOP + row * BLOCK_ROW_SPACING,
            )
        })
        .collect()
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current level (1-based)
    pub level: u32,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Active blocks, in grid order
    pub blocks: Vec<Block>,
    /// Blocks destroyed this level (drawn as wreckage, never collide)
    pub destroyed: Vec<Block>,
    /// Events since the shell last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            level: 1,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            ball: Ball::default(),
            paddle: Paddle::default(),
            blocks: generate_grid(INITIAL_BLOCKS),
            destroyed: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Back to level 1 with a fresh grid and ball. The paddle stays put.
    pub fn restart(&mut self) {
        self.level = 1;
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.ball = Ball::default();
        self.blocks = generate_grid(INITIAL_BLOCKS);
        self.destroyed.clear();
        self.events.clear();
    }

    /// Advance to the next level: bigger grid, faster ball
    pub fn advance_level(&mut self) {
        let previous = self.level;
        self.level += 1;
        self.blocks = generate_grid(INITIAL_BLOCKS + previous as usize);
        self.destroyed.clear();
        self.ball = self.ball.relaunched(BALL_SPEED_STEP);
        self.events.push(GameEvent::LevelCleared { level: self.level });
        log::info!(
            "Level {} cleared -> level {} ({} blocks, ball speed {:?})",
            previous,
            self.level,
            self.blocks.len(),
            self.ball.vel.abs()
        );
    }

    /// Move the block at `index` to the wreckage list and score it
    pub fn destroy_block(&mut self, index: usize) {
        let block = self.blocks.remove(index);
        self.score += SCORE_PER_BLOCK;
        self.events.push(GameEvent::BlockBroken { pos: block.pos });
        self.destroyed.push(block);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_lost(&self) -> bool {
        self.phase == GamePhase::Lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_grid_is_one_row() {
        let state = GameState::new();
        let xs: Vec<f32> = state.blocks.iter().map(|b| b.pos.x).collect();
        assert_eq!(xs, vec![0.0, 80.0, 160.0, 240.0, 320.0]);
        assert!(state.blocks.iter().all(|b| b.pos.y == 50.0));
        assert!(state.blocks.iter().all(|b| b.width == 60.0 && b.height == 20.0));
    }

    #[test]
    fn test_grid_wraps_every_five() {
        let grid = generate_grid(12);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid[5].pos, Vec2::new(0.0, 80.0));
        assert_eq!(grid[9].pos, Vec2::new(320.0, 80.0));
        assert_eq!(grid[11].pos, Vec2::new(80.0, 110.0));
    }

    #[test]
    fn test_relaunch_keeps_direction() {
        let ball = Ball {
            pos: Vec2::new(12.0, 300.0),
            vel: Vec2::new(-2.5, 3.0),
            radius: BALL_RADIUS,
        };
        let next = ball.relaunched(0.5);
        assert_eq!(next.pos, Vec2::new(200.0, 200.0));
        assert_eq!(next.vel, Vec2::new(-3.0, 3.5));
    }

    #[test]
    fn test_advance_level_grows_grid() {
        let mut state = GameState::new();
        state.blocks.clear();
        state.destroyed.push(Block::new(0.0, 50.0));
        state.advance_level();
        assert_eq!(state.level, 2);
        assert_eq!(state.blocks.len(), 6);
        assert!(state.destroyed.is_empty());
        assert_eq!(state.events, vec![GameEvent::LevelCleared { level: 2 }]);
    }

    #[test]
    fn test_destroy_block_scores() {
        let mut state = GameState::new();
        state.destroy_block(2);
        assert_eq!(state.score, 10);
        assert_eq!(state.blocks.len(), 4);
        assert_eq!(state.destroyed, vec![Block::new(160.0, 50.0)]);
        assert!(state.blocks.iter().all(|b| b.pos.x != 160.0));
    }

    #[test]
    fn test_restart_keeps_paddle() {
        let mut state = GameState::new();
        state.paddle.pos.x = 270.0;
        state.score = 90;
        state.level = 4;
        state.phase = GamePhase::Lost;
        state.blocks.clear();
        state.restart();
        assert_eq!(state.paddle.pos.x, 270.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.blocks.len(), 5);
        assert_eq!(state.ball, Ball::default());
    }
}
