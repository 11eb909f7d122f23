use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_positive, ConfigError};
use crate::params::Params;
use crate::Side;

/// Game configuration
///
/// Supplied once at construction and never mutated while a match runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub wall_thickness: f32,
    pub goal_depth: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_range: f32,
    pub paddle_inset: f32,
    pub puck_radius: f32,
    pub puck_max_speed: f32,
    pub puck_spawn_range: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            wall_thickness: Params::WALL_THICKNESS,
            goal_depth: Params::GOAL_DEPTH,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_range: Params::PADDLE_RANGE,
            paddle_inset: Params::PADDLE_INSET,
            puck_radius: Params::PUCK_RADIUS,
            puck_max_speed: Params::PUCK_MAX_SPEED,
            puck_spawn_range: Params::PUCK_SPAWN_RANGE,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config; missing fields fall back to [`Params`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check every constant the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("arena_width", self.arena_width)?;
        ensure_positive("arena_height", self.arena_height)?;
        ensure_positive("wall_thickness", self.wall_thickness)?;
        ensure_positive("goal_depth", self.goal_depth)?;
        ensure_positive("paddle_width", self.paddle_width)?;
        ensure_positive("paddle_height", self.paddle_height)?;
        ensure_positive("paddle_speed", self.paddle_speed)?;
        ensure_positive("paddle_range", self.paddle_range)?;
        ensure_non_negative("paddle_inset", self.paddle_inset)?;
        ensure_positive("puck_radius", self.puck_radius)?;
        ensure_positive("puck_max_speed", self.puck_max_speed)?;
        ensure_non_negative("puck_spawn_range", self.puck_spawn_range)?;

        if self.win_score == 0 {
            return Err(ConfigError::InvalidWinScore);
        }

        let half_height = self.arena_height / 2.0;
        if self.puck_spawn_range + self.puck_radius > half_height {
            return Err(ConfigError::SpawnRangeOutOfArena {
                spawn_range: self.puck_spawn_range,
                half_height,
            });
        }

        let reach = self.paddle_range + self.paddle_height / 2.0;
        if reach > half_height {
            return Err(ConfigError::PaddleOutOfArena { reach, half_height });
        }

        let half_width = self.arena_width / 2.0;
        if self.paddle_inset + self.paddle_width >= half_width {
            return Err(ConfigError::PaddleLaneOutOfArena {
                inset: self.paddle_inset,
                half_width,
            });
        }

        // Collisions are overlap tests at the end of each fixed step, so the
        // puck must not move past a wall, goal sensor or paddle in one step.
        let window = self
            .wall_thickness
            .min(self.goal_depth)
            .min(self.paddle_width)
            + 2.0 * self.puck_radius;
        let step_travel = self.puck_max_speed * Params::FIXED_DT;
        if step_travel >= window {
            return Err(ConfigError::PuckTooFast { step_travel, window });
        }

        Ok(())
    }

    /// Get X position for a paddle lane
    pub fn paddle_x(&self, side: Side) -> f32 {
        let x = self.arena_width / 2.0 - self.paddle_inset;
        match side {
            Side::Player1 => -x, // Left paddle
            Side::Player2 => x,  // Right paddle
        }
    }
}
