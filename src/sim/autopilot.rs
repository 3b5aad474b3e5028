//! Idle/demo mode: steer the paddle under the ball

use super::input::PaddleCommand;
use super::state::GameState;
use crate::consts::PADDLE_STEP;

/// Command that brings the paddle centre toward the ball, if any is needed
pub fn steer(state: &GameState) -> Option<PaddleCommand> {
    let offset = state.ball.pos.x - state.paddle.center_x();
    if offset.abs() <= PADDLE_STEP / 2.0 {
        None
    } else if offset < 0.0 {
        Some(PaddleCommand::Left)
    } else {
        Some(PaddleCommand::Right)
    }
}
