//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Block breaks
    BlockBreak,
    /// Grid cleared, next level starts
    LevelClear,
    /// Ball fell out of the arena
    GameOver,
}

impl SoundEffect {
    /// The effect (if any) a simulation event should trigger
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PaddleHit => Some(SoundEffect::PaddleHit),
            GameEvent::BlockBroken { .. } => Some(SoundEffect::BlockBreak),
            GameEvent::LevelCleared { .. } => Some(SoundEffect::LevelClear),
            GameEvent::BallLost => Some(SoundEffect::GameOver),
        }
    }
}

/// Effective output gain for the given mix, 0.0 when muted
pub fn mix_volume(master: f32, sfx: f32, muted: bool) -> f32 {
    if muted {
        0.0
    } else {
        master.clamp(0.0, 1.0) * sfx.clamp(0.0, 1.0)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{SoundEffect, mix_volume};
    use crate::settings::Settings;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        master_volume: f32,
        sfx_volume: f32,
        muted: bool,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                master_volume: settings.master_volume,
                sfx_volume: settings.sfx_volume,
                muted: settings.muted,
            }
        }

        /// Play a sound effect (fire-and-forget)
        pub fn play(&self, effect: SoundEffect) {
            let vol = mix_volume(self.master_volume, self.sfx_volume, self.muted);
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::PaddleHit => self.play_paddle_hit(ctx, vol),
                SoundEffect::BlockBreak => self.play_block_break(ctx, vol),
                SoundEffect::LevelClear => self.play_level_clear(ctx, vol),
                SoundEffect::GameOver => self.play_game_over(ctx, vol),
            }
        }

        // === Sound generators ===

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Paddle hit - solid thump
        fn play_paddle_hit(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 150.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.6, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.1)
                .ok();
            osc.frequency().set_value_at_time(150.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(60.0, t + 0.1)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        /// Block break - bright crack over a short square blip
        fn play_block_break(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();

            if let Some((osc, gain)) = self.create_osc(ctx, 1800.0, OscillatorType::Sawtooth) {
                gain.gain().set_value_at_time(vol * 0.25, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                    .ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(300.0, t + 0.12)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.14).ok();
            }

            if let Some((osc, gain)) = self.create_osc(ctx, 660.0, OscillatorType::Square) {
                gain.gain().set_value_at_time(vol * 0.1, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.06)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.08).ok();
            }
        }

        /// Level clear - rising arpeggio
        fn play_level_clear(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [523.0, 659.0, 784.0, 1047.0].iter().enumerate() {
                let delay = i as f64 * 0.08;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.35).ok();
                }
            }
        }

        /// Game over - falling tones
        fn play_game_over(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [392.0, 330.0, 262.0, 196.0].iter().enumerate() {
                let delay = i as f64 * 0.2;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.4).ok();
                }
            }
        }
    }
}
