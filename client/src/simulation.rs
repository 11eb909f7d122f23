use game_core::{Config, ConfigError, InputSource, MatchController, MatchState, Params, Side};
use glam::Vec2;

use crate::presentation::{LogSink, SharedHud};
use crate::status::StatusBlinker;

/// What one rendered frame produced
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub fixed_steps: u32,
    pub state: MatchState,
    pub status_shown: bool,
    pub puck: Vec2,
    pub paddles: [f32; 2],
}

/// Local two-player game driven by an application-owned loop.
///
/// Each [`LocalGame::frame`] runs the variable-rate phase once, then as many
/// fixed-rate steps as the accumulated time allows.
pub struct LocalGame {
    pub controller: MatchController,
    pub hud: SharedHud,
    input: Box<dyn InputSource>,
    blinker: StatusBlinker,
    accumulator: f32,
    now: f32,
}

impl LocalGame {
    pub fn new(
        config: Config,
        seed: u64,
        input: Box<dyn InputSource>,
    ) -> Result<Self, ConfigError> {
        let sink = LogSink::new();
        let hud = sink.hud();
        let controller = MatchController::new(config, seed, Box::new(sink))?;

        Ok(Self {
            controller,
            hud,
            input,
            blinker: StatusBlinker::default(),
            accumulator: 0.0,
            now: 0.0,
        })
    }

    /// Wall-clock time seen by the loop
    pub fn now(&self) -> f32 {
        self.now
    }

    pub fn frame(&mut self, frame_dt: f32) -> FrameReport {
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.max(0.0)
        } else {
            0.0
        };
        self.now += frame_dt;

        // Variable-rate phase
        let input = self.input.sample(self.now);
        self.controller.update(&input);
        let status_shown = self.blinker.poll(self.controller.status(), self.now);

        // Fixed-rate phase, frozen outside of play
        let mut fixed_steps = 0;
        if self.controller.is_running() {
            self.accumulator += frame_dt;
            while self.accumulator >= Params::FIXED_DT && fixed_steps < Params::MAX_SUBSTEPS {
                self.controller.fixed_update(Params::FIXED_DT);
                self.accumulator -= Params::FIXED_DT;
                fixed_steps += 1;
            }
            if fixed_steps == Params::MAX_SUBSTEPS {
                // Spiral of death guard: drop the backlog
                self.accumulator = 0.0;
            }
        }
        if !self.controller.is_running() {
            self.accumulator = 0.0;
        }

        FrameReport {
            fixed_steps,
            state: self.controller.state(),
            status_shown,
            puck: self.controller.puck().map(|p| p.pos).unwrap_or_default(),
            paddles: Side::BOTH.map(|side| {
                self.controller
                    .paddle(side)
                    .map(|p| p.position)
                    .unwrap_or_default()
            }),
        }
    }

    /// Run at a fixed frame rate for `seconds`, or until the match ends.
    pub fn run(&mut self, seconds: f32, fps: f32) -> u32 {
        let frame_dt = 1.0 / fps.max(1.0);
        let mut frames = 0;
        let mut started = false;
        while self.now < seconds {
            let report = self.frame(frame_dt);
            frames += 1;
            started |= report.state == MatchState::Playing;
            if started && report.state == MatchState::GameOver {
                break;
            }
        }
        frames
    }
}
