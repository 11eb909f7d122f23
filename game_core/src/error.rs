use thiserror::Error;

/// Errors raised while building the simulation from configuration.
///
/// Every failure in this crate is a construction-time failure: once a match is
/// running, degenerate states are corrected in place.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("puck spawn range {spawn_range} exceeds the arena half-height {half_height}")]
    SpawnRangeOutOfArena { spawn_range: f32, half_height: f32 },

    #[error("paddle travel {reach} exceeds the arena half-height {half_height}")]
    PaddleOutOfArena { reach: f32, half_height: f32 },

    #[error("paddle inset {inset} does not fit inside the arena half-width {half_width}")]
    PaddleLaneOutOfArena { inset: f32, half_width: f32 },

    #[error("puck covers {step_travel} per step, not below the narrowest collision window {window}")]
    PuckTooFast { step_travel: f32, window: f32 },

    #[error("win score must be at least 1")]
    InvalidWinScore,

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Fail with [`ConfigError::NonPositive`] unless `value` is a finite positive number.
pub(crate) fn ensure_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

pub(crate) fn ensure_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
