// End-to-end gameplay scenarios through the public API.
// Pure simulation only, so these run under `cargo test` on the host.

use brick_tap::audio::SoundEffect;
use brick_tap::consts::*;
use brick_tap::sim::{GameEvent, GamePhase, GameState, PaddleCommand, apply_command, tick};
use glam::Vec2;
use proptest::prelude::*;

#[test]
fn paddle_hit_from_initial_state() {
    let mut state = GameState::new();
    // Slide the paddle to the right edge so it meets the ball at x=390
    for _ in 0..5 {
        apply_command(&mut state, PaddleCommand::Right);
    }
    assert_eq!(state.paddle.pos.x, 300.0);

    // 94 ticks bring the ball to (388, 388): not yet touching
    for _ in 0..94 {
        tick(&mut state);
    }
    assert!(state.drain_events().is_empty());
    assert_eq!(state.ball.pos, Vec2::new(388.0, 388.0));

    // Tick 95: ball at y=390, lower edge on the paddle top
    tick(&mut state);
    assert_eq!(state.ball.vel.y, -2.0);
    let events = state.drain_events();
    assert_eq!(events, vec![GameEvent::PaddleHit]);
    assert_eq!(
        SoundEffect::for_event(&events[0]),
        Some(SoundEffect::PaddleHit)
    );

    // Heading back up: no second hit
    tick(&mut state);
    assert!(state.drain_events().is_empty());
}

#[test]
fn missing_the_paddle_ends_the_game() {
    let mut state = GameState::new();
    // Paddle parked at the left; the ball bounces off the right wall and
    // falls past the bottom edge near x=350
    for _ in 0..5 {
        apply_command(&mut state, PaddleCommand::Left);
    }
    let mut ticks = 0;
    while state.phase == GamePhase::Playing && ticks < 1_000 {
        tick(&mut state);
        ticks += 1;
    }
    assert_eq!(state.phase, GamePhase::Lost);
    assert_eq!(state.drain_events().last(), Some(&GameEvent::BallLost));

    state.restart();
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.paddle.pos.x, 0.0);
}

#[test]
fn clearing_a_level_by_hand() {
    let mut state = GameState::new();
    for _ in 0..INITIAL_BLOCKS {
        state.destroy_block(0);
    }
    assert_eq!(state.score, 50);
    assert_eq!(state.destroyed.len(), 5);

    tick(&mut state);
    assert_eq!(state.level, 2);
    assert_eq!(state.blocks.len(), 6);
    assert_eq!(state.blocks[5].pos, Vec2::new(0.0, BLOCK_TOP + BLOCK_ROW_SPACING));
    assert_eq!(state.ball.pos, Vec2::new(BALL_START_X, BALL_START_Y));
    assert_eq!(state.ball.vel, Vec2::new(2.5, 2.5));
    assert_eq!(state.score, 50);
}

#[derive(Debug, Clone)]
enum Step {
    Tick,
    Left,
    Right,
    Break,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Tick),
        Just(Step::Left),
        Just(Step::Right),
        Just(Step::Break),
    ]
}

proptest! {
    #[test]
    fn restart_always_yields_initial_state(steps in prop::collection::vec(step_strategy(), 0..400)) {
        let mut state = GameState::new();
        for step in steps {
            match step {
                Step::Tick => tick(&mut state),
                Step::Left => apply_command(&mut state, PaddleCommand::Left),
                Step::Right => apply_command(&mut state, PaddleCommand::Right),
                Step::Break => {
                    if !state.blocks.is_empty() {
                        state.destroy_block(0);
                    }
                }
            }
        }
        let paddle = state.paddle;
        state.restart();

        prop_assert_eq!(state.score, 0);
        prop_assert_eq!(state.level, 1);
        prop_assert_eq!(state.phase, GamePhase::Playing);
        prop_assert_eq!(state.blocks.len(), 5);
        for (i, block) in state.blocks.iter().enumerate() {
            prop_assert_eq!(block.pos, Vec2::new(i as f32 * 80.0, 50.0));
        }
        prop_assert_eq!(state.ball.pos, Vec2::new(200.0, 200.0));
        prop_assert_eq!(state.ball.vel, Vec2::new(2.0, 2.0));
        prop_assert_eq!(state.paddle, paddle);
    }

    #[test]
    fn score_and_level_never_decrease(steps in prop::collection::vec(step_strategy(), 0..400)) {
        let mut state = GameState::new();
        let (mut score, mut level) = (state.score, state.level);
        for step in steps {
            match step {
                Step::Tick => tick(&mut state),
                Step::Left => apply_command(&mut state, PaddleCommand::Left),
                Step::Right => apply_command(&mut state, PaddleCommand::Right),
                Step::Break => {
                    if !state.blocks.is_empty() {
                        state.destroy_block(0);
                    }
                }
            }
            prop_assert!(state.score >= score);
            prop_assert!(state.level >= level);
            prop_assert!(state.paddle.pos.x >= 0.0 && state.paddle.pos.x <= ARENA_WIDTH - PADDLE_WIDTH);
            score = state.score;
            level = state.level;
        }
    }
}
