//! Error types for body construction and configuration loading
//!
//! Nothing inside a simulation tick can fail; these only surface when building
//! bodies or reading a config.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("body mass must be positive and finite, got {0}")]
    InvalidMass(f32),
    #[error("body radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("friction coefficient must lie in (0, 1], got {0}")]
    InvalidFriction(f32),
    #[error("max speed must be positive and finite, got {0}")]
    InvalidMaxSpeed(f32),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
