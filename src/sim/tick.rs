//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision::{hits_block, hits_ceiling, hits_paddle, hits_side_wall, past_floor};
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState) {
    // Nothing moves after the ball is lost
    if state.phase == GamePhase::Lost {
        return;
    }

    state.time_ticks += 1;

    // A level clears on the tick after its last block breaks
    let level_cleared = state.blocks.is_empty();

    let mut ball = state.ball;
    ball.pos += ball.vel;

    // --- WALLS ---
    if hits_side_wall(ball.pos) {
        ball.vel.x = -ball.vel.x;
    }
    if hits_ceiling(ball.pos) {
        ball.vel.y = -ball.vel.y;
    }
    if past_floor(ball.pos) {
        state.ball = ball;
        state.phase = GamePhase::Lost;
        state.events.push(GameEvent::BallLost);
        log::info!(
            "Ball lost at x={:.1} (level {}, score {})",
            ball.pos.x,
            state.level,
            state.score
        );
        return;
    }

    // --- PADDLE ---
    if hits_paddle(ball.pos, ball.radius, &state.paddle) {
        ball.vel.y = -ball.vel.y;
        state.events.push(GameEvent::PaddleHit);
    }

    // --- BLOCKS ---
    // Every block is tested; each hit flips dy on its own, so two blocks
    // struck in the same tick cancel out.
    let mut i = 0;
    while i < state.blocks.len() {
        if hits_block(ball.pos, ball.radius, &state.blocks[i]) {
            state.destroy_block(i);
            ball.vel.y = -ball.vel.y;
        } else {
            i += 1;
        }
    }

    if level_cleared {
        // Relaunch from the velocity the ball entered this tick with
        state.advance_level();
        return;
    }

    state.ball = ball;
    log::trace!("tick {}: ball {:?} vel {:?}", state.time_ticks, ball.pos, ball.vel);
}
