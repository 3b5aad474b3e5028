//! Turns a `GameState` into one triangle list, back to front

use glam::Vec2;

use super::shapes::{circle, rect, rect_outline};
use super::vertex::{Vertex, colors};
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::sim::GameState;

const BALL_SEGMENTS: u32 = 24;
const WRECK_OUTLINE: f32 = 2.0;

/// Build the frame: arena, wreckage, blocks, paddle, ball, then the
/// game-over veil when the ball is lost
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(
        6 * (2 + state.blocks.len()) + 24 * state.destroyed.len() + 3 * BALL_SEGMENTS as usize,
    );
    let arena = Vec2::new(ARENA_WIDTH, ARENA_HEIGHT);

    vertices.extend(rect(Vec2::ZERO, arena, colors::ARENA));

    for block in &state.destroyed {
        vertices.extend(rect_outline(
            block.pos,
            Vec2::new(block.width, block.height),
            WRECK_OUTLINE,
            colors::BLOCK_WRECK,
        ));
    }
    for block in &state.blocks {
        vertices.extend(rect(
            block.pos,
            Vec2::new(block.width, block.height),
            colors::BLOCK,
        ));
    }

    let paddle = &state.paddle;
    vertices.extend(rect(
        paddle.pos,
        Vec2::new(paddle.width, paddle.height),
        colors::PADDLE,
    ));
    vertices.extend(circle(
        state.ball.pos,
        state.ball.radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));

    if state.is_lost() {
        vertices.extend(rect(Vec2::ZERO, arena, colors::LOST_VEIL));
    }

    vertices
}

/// Map arena pixels (origin top-left, y down) to normalized device
/// coordinates, letterboxed so the arena keeps its aspect ratio
pub fn arena_to_ndc(p: Vec2, viewport: (u32, u32)) -> Vec2 {
    let (w, h) = viewport;
    let view_aspect = w.max(1) as f32 / h.max(1) as f32;
    let arena_aspect = ARENA_WIDTH / ARENA_HEIGHT;

    let ndc = Vec2::new(p.x / ARENA_WIDTH * 2.0 - 1.0, 1.0 - p.y / ARENA_HEIGHT * 2.0);
    if view_aspect > arena_aspect {
        // Viewport wider than arena: bars left and right
        Vec2::new(ndc.x * arena_aspect / view_aspect, ndc.y)
    } else {
        Vec2::new(ndc.x, ndc.y * view_aspect / arena_aspect)
    }
}
