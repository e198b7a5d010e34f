//! Simulation tuning
//!
//! Every policy constant of the engine lives in [`SimConfig`]. Hosts can keep the
//! defaults or load overrides from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, SimResult};
use crate::sim::BoardLayout;

/// Physical constants for one kind of disc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscConfig {
    /// Radius as a fraction of the play area size
    pub radius_ratio: f32,
    pub mass: f32,
    /// Per-tick velocity multiplier
    pub friction: f32,
    /// Speed cap in position units per tick
    pub max_speed: f32,
}

impl DiscConfig {
    pub fn striker() -> Self {
        Self {
            radius_ratio: STRIKER_RADIUS_RATIO,
            mass: STRIKER_MASS,
            friction: DEFAULT_FRICTION,
            max_speed: STRIKER_MAX_SPEED,
        }
    }

    pub fn coin() -> Self {
        Self {
            radius_ratio: COIN_RADIUS_RATIO,
            mass: COIN_MASS,
            friction: DEFAULT_FRICTION,
            max_speed: COIN_MAX_SPEED,
        }
    }

    fn validate(&self, label: &str) -> SimResult<()> {
        if !(self.radius_ratio > 0.0 && self.radius_ratio < 0.5) {
            return Err(SimError::InvalidConfig(format!(
                "{label}.radius_ratio must lie in (0, 0.5), got {}",
                self.radius_ratio
            )));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(SimError::InvalidMass(self.mass));
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(SimError::InvalidFriction(self.friction));
        }
        if !(self.max_speed.is_finite() && self.max_speed > 0.0) {
            return Err(SimError::InvalidMaxSpeed(self.max_speed));
        }
        Ok(())
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Board size (frame included) in position units
    pub board_size: f32,
    /// When set, the board fills 90% of a square canvas of this size and is
    /// centered in it; `board_size` is then ignored
    pub canvas_size: Option<f32>,

    // === Discs ===
    pub striker: DiscConfig,
    pub coin: DiscConfig,
    /// Number of coins in the ring around the queen
    pub ring_coins: usize,
    /// Ring radius as a multiple of the coin radius
    pub ring_gap_factor: f32,

    // === Contact ===
    /// Velocity retained after a body-body collision
    pub restitution: f32,
    /// A shot ends once every body is slower than this
    pub rest_threshold: f32,

    // === Input ===
    /// Power gained per tick while charging
    pub power_rate: f32,
    /// Baseline movement per nudge step
    pub nudge_step: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            canvas_size: None,

            striker: DiscConfig::striker(),
            coin: DiscConfig::coin(),
            ring_coins: RING_COINS,
            ring_gap_factor: RING_GAP_FACTOR,

            restitution: DEFAULT_RESTITUTION,
            rest_threshold: REST_THRESHOLD,

            power_rate: POWER_RATE,
            nudge_step: NUDGE_STEP,
        }
    }
}

impl SimConfig {
    /// Check ranges; a config that passes can build a [`crate::sim::Simulation`]
    pub fn validate(&self) -> SimResult<()> {
        if !(self.board_size.is_finite() && self.board_size > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "board_size must be positive, got {}",
                self.board_size
            )));
        }
        if let Some(canvas) = self.canvas_size {
            if !(canvas.is_finite() && canvas > 0.0) {
                return Err(SimError::InvalidConfig(format!(
                    "canvas_size must be positive, got {canvas}"
                )));
            }
        }
        self.striker.validate("striker")?;
        self.coin.validate("coin")?;
        if !(self.restitution >= 0.0 && self.restitution <= 1.0) {
            return Err(SimError::InvalidConfig(format!(
                "restitution must lie in [0, 1], got {}",
                self.restitution
            )));
        }
        if !(self.rest_threshold.is_finite() && self.rest_threshold >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "rest_threshold must be non-negative, got {}",
                self.rest_threshold
            )));
        }
        if !(self.power_rate > 0.0 && self.power_rate <= 1.0) {
            return Err(SimError::InvalidConfig(format!(
                "power_rate must lie in (0, 1], got {}",
                self.power_rate
            )));
        }
        if !(self.nudge_step.is_finite() && self.nudge_step >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "nudge_step must be non-negative, got {}",
                self.nudge_step
            )));
        }
        if !(self.ring_gap_factor.is_finite() && self.ring_gap_factor > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "ring_gap_factor must be positive, got {}",
                self.ring_gap_factor
            )));
        }
        Ok(())
    }

    /// Board geometry this config describes
    pub fn board_layout(&self) -> BoardLayout {
        match self.canvas_size {
            Some(canvas) => BoardLayout::centered(canvas),
            None => BoardLayout::new(self.board_size),
        }
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
