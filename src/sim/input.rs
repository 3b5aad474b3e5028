//! Paddle input commands
//!
//! The paddle moves in fixed steps and never leaves `[0, ARENA_WIDTH - width]`.

use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::consts::PADDLE_STEP;

/// A single paddle move request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleCommand {
    Left,
    Right,
}

impl PaddleCommand {
    /// Map a `KeyboardEvent.key` value to a command
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(PaddleCommand::Left),
            "ArrowRight" | "d" | "D" => Some(PaddleCommand::Right),
            _ => None,
        }
    }

    /// Map a touch to a command by which half of the canvas it landed on
    pub fn from_touch(x: f32, canvas_width: f32) -> Self {
        if x < canvas_width / 2.0 {
            PaddleCommand::Left
        } else {
            PaddleCommand::Right
        }
    }
}

/// Move the paddle one step, clamped to the arena
pub fn apply_command(state: &mut GameState, command: PaddleCommand) {
    let paddle = &mut state.paddle;
    let max_x = paddle.max_x();
    match command {
        PaddleCommand::Left => {
            if paddle.pos.x > 0.0 {
                paddle.pos.x = (paddle.pos.x - PADDLE_STEP).max(0.0);
            }
        }
        PaddleCommand::Right => {
            if paddle.pos.x < max_x {
                paddle.pos.x = (paddle.pos.x + PADDLE_STEP).min(max_x);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_step_sizes() {
        let mut state = GameState::new();
        apply_command(&mut state, PaddleCommand::Left);
        assert_eq!(state.paddle.pos.x, 120.0);
        apply_command(&mut state, PaddleCommand::Right);
        apply_command(&mut state, PaddleCommand::Right);
        assert_eq!(state.paddle.pos.x, 180.0);
    }

    #[test]
    fn test_left_edge_is_noop() {
        let mut state = GameState::new();
        state.paddle.pos.x = 0.0;
        apply_command(&mut state, PaddleCommand::Left);
        assert_eq!(state.paddle.pos.x, 0.0);
    }

    #[test]
    fn test_right_edge_is_noop() {
        let mut state = GameState::new();
        state.paddle.pos.x = 300.0;
        apply_command(&mut state, PaddleCommand::Right);
        assert_eq!(state.paddle.pos.x, 300.0);
    }

    #[test]
    fn test_walk_to_both_edges() {
        let mut state = GameState::new();
        for _ in 0..10 {
            apply_command(&mut state, PaddleCommand::Left);
        }
        assert_eq!(state.paddle.pos.x, 0.0);
        for _ in 0..20 {
            apply_command(&mut state, PaddleCommand::Right);
        }
        assert_eq!(state.paddle.pos.x, 300.0);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(PaddleCommand::from_key("ArrowLeft"), Some(PaddleCommand::Left));
        assert_eq!(PaddleCommand::from_key("D"), Some(PaddleCommand::Right));
        assert_eq!(PaddleCommand::from_key("ArrowUp"), None);
        assert_eq!(PaddleCommand::from_key(" "), None);
    }

    #[test]
    fn test_touch_halves() {
        assert_eq!(PaddleCommand::from_touch(10.0, 400.0), PaddleCommand::Left);
        assert_eq!(PaddleCommand::from_touch(200.0, 400.0), PaddleCommand::Right);
    }

    proptest! {
        #[test]
        fn paddle_stays_in_arena(
            start in 0.0f32..=300.0,
            moves in prop::collection::vec(any::<bool>(), 0..64),
        ) {
            let mut state = GameState::new();
            state.paddle.pos.x = start;
            for right in moves {
                let cmd = if right { PaddleCommand::Right } else { PaddleCommand::Left };
                apply_command(&mut state, cmd);
                prop_assert!(state.paddle.pos.x >= 0.0);
                prop_assert!(state.paddle.pos.x <= 300.0);
            }
        }
    }
}
