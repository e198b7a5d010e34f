//! Carrom Sim - disc-collision engine for a two-player carrom board
//!
//! Core modules:
//! - `sim`: Deterministic simulation (board geometry, bodies, collisions, turns)
//! - `config`: Data-driven tuning constants
//! - `error`: Construction and config failures

pub mod config;
pub mod error;
pub mod sim;

pub use config::{DiscConfig, SimConfig};
pub use error::{SimError, SimResult};

use glam::Vec2;

/// Engine default constants
pub mod consts {
    /// Default board size (frame included), 90% of a 600 unit canvas
    pub const DEFAULT_BOARD_SIZE: f32 = 540.0;
    /// Board size as a fraction of the canvas for centered layouts
    pub const BOARD_CANVAS_RATIO: f32 = 0.9;

    /// Board geometry, as fractions of the frame or play area
    pub const FRAME_RATIO: f32 = 0.05;
    pub const BASELINE_OFFSET_RATIO: f32 = 0.15;
    pub const POCKET_RATIO: f32 = 0.05;
    pub const BASELINE_THICKNESS_RATIO: f32 = 0.01;
    pub const CENTER_CIRCLE_RATIO: f32 = 0.08;
    pub const RESTRICTED_AREA_RATIO: f32 = 0.02;

    /// Striker defaults
    pub const STRIKER_RADIUS_RATIO: f32 = 0.03;
    pub const STRIKER_MASS: f32 = 4.0;
    pub const STRIKER_MAX_SPEED: f32 = 30.0;

    /// Coin defaults
    pub const COIN_RADIUS_RATIO: f32 = 0.02;
    pub const COIN_MASS: f32 = 1.0;
    pub const COIN_MAX_SPEED: f32 = 25.0;
    /// Coins arranged in a ring around the queen
    pub const RING_COINS: usize = 18;
    /// Ring radius in coin radii
    pub const RING_GAP_FACTOR: f32 = 2.2;

    /// Per-tick rolling friction (velocity multiplier)
    pub const DEFAULT_FRICTION: f32 = 0.985;
    /// Velocity retained after a body-body hit
    pub const DEFAULT_RESTITUTION: f32 = 0.8;
    /// Speed below which a body counts as settled
    pub const REST_THRESHOLD: f32 = 0.1;

    /// Power gained per charging tick
    pub const POWER_RATE: f32 = 0.02;
    /// Striker baseline movement per nudge
    pub const NUDGE_STEP: f32 = 5.0;

    /// Below this center distance the collision normal falls back to +X
    pub const DEGENERATE_DISTANCE: f32 = 1e-6;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Angle of the vector from `from` to `to`, in radians
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}
