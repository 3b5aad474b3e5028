//! Collision detection for axis-aligned geometry
//!
//! The ball is tested as a point on the x axis and as a point offset by its
//! radius on the y axis. Only the edge facing the ball is checked, so a ball
//! anywhere above a block's bottom edge inside its span counts as a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Block, Paddle};
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Axis-aligned box, `min` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Inclusive horizontal span check
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.min.x && x <= self.max().x
    }
}

/// Ball touches or passes the left/right wall
#[inline]
pub fn hits_side_wall(pos: Vec2) -> bool {
    pos.x <= 0.0 || pos.x >= ARENA_WIDTH
}

/// Ball touches or passes the top wall
#[inline]
pub fn hits_ceiling(pos: Vec2) -> bool {
    pos.y <= 0.0
}

/// Ball centre reached the bottom edge
#[inline]
pub fn past_floor(pos: Vec2) -> bool {
    pos.y >= ARENA_HEIGHT
}

/// Ball's lower edge reached the paddle top while inside its span
pub fn hits_paddle(pos: Vec2, radius: f32, paddle: &Paddle) -> bool {
    let bounds = paddle.bounds();
    pos.y + radius >= bounds.top() && bounds.spans_x(pos.x)
}

/// Ball's upper edge reached the block bottom while inside its span
pub fn hits_block(pos: Vec2, radius: f32, block: &Block) -> bool {
    let bounds = block.bounds();
    pos.y - radius <= bounds.bottom() && bounds.spans_x(pos.x)
}
