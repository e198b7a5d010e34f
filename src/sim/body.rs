//! Circular bodies: the striker and the coins
//!
//! Both share one type. Only the per-instance constants differ, and the collision
//! code never needs to know which is which.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::board::BoardLayout;
use super::state::Player;
use crate::config::DiscConfig;
use crate::error::{SimError, SimResult};

/// Coin color category (cosmetic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinKind {
    Queen,
    Black,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Striker,
    Coin(CoinKind),
}

/// Which axes a boundary check reflected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
}

impl Bounce {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// A moving disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub kind: BodyKind,
    pub pos: Vec2,
    /// Position delta per tick
    pub vel: Vec2,
    radius: f32,
    mass: f32,
    friction: f32,
    max_speed: f32,
}

impl Body {
    /// Build a body at rest. Non-positive mass or radius is rejected here so the
    /// collision math never sees it.
    pub fn new(
        kind: BodyKind,
        pos: Vec2,
        radius: f32,
        mass: f32,
        friction: f32,
        max_speed: f32,
    ) -> SimResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidRadius(radius));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass(mass));
        }
        if !(friction > 0.0 && friction <= 1.0) {
            return Err(SimError::InvalidFriction(friction));
        }
        if !(max_speed.is_finite() && max_speed > 0.0) {
            return Err(SimError::InvalidMaxSpeed(max_speed));
        }
        Ok(Self {
            kind,
            pos,
            vel: Vec2::ZERO,
            radius,
            mass,
            friction,
            max_speed,
        })
    }

    /// Build a disc sized relative to the board's play area
    pub fn from_disc(
        kind: BodyKind,
        pos: Vec2,
        board: &BoardLayout,
        disc: &DiscConfig,
    ) -> SimResult<Self> {
        Self::new(
            kind,
            pos,
            board.play_area_size * disc.radius_ratio,
            disc.mass,
            disc.friction,
            disc.max_speed,
        )
    }

    /// Striker resting on a player's baseline
    pub fn striker(board: &BoardLayout, disc: &DiscConfig, player: Player) -> SimResult<Self> {
        Self::from_disc(BodyKind::Striker, board.start_position(player), board, disc)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn friction(&self) -> f32 {
        self.friction
    }

    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.length_squared()
    }

    #[inline]
    pub fn is_at_rest(&self, threshold: f32) -> bool {
        self.speed() < threshold
    }

    pub fn stop(&mut self) {
        self.vel = Vec2::ZERO;
    }

    /// Set velocity, respecting the speed cap
    pub fn set_velocity(&mut self, vel: Vec2) {
        self.vel = vel.clamp_length_max(self.max_speed);
    }

    /// Advance one tick: move, apply rolling friction, cap speed
    pub fn integrate(&mut self) {
        self.pos += self.vel;
        self.vel *= self.friction;
        self.vel = self.vel.clamp_length_max(self.max_speed);
    }

    /// Reflect off the play area walls. Each axis is handled independently; a
    /// center exactly on the limit does not bounce. Walls apply no restitution.
    /// A disc wider than the play area has an inverted range and is pinned to the
    /// upper limit.
    pub fn reflect_off_boundary(&mut self, board: &BoardLayout) -> Bounce {
        let (min, max) = board.center_bounds(self.radius);
        let mut bounce = Bounce::default();

        if self.pos.x < min.x || self.pos.x > max.x {
            self.vel.x = -self.vel.x;
            self.pos.x = self.pos.x.max(min.x).min(max.x);
            bounce.x = true;
        }
        if self.pos.y < min.y || self.pos.y > max.y {
            self.vel.y = -self.vel.y;
            self.pos.y = self.pos.y.max(min.y).min(max.y);
            bounce.y = true;
        }

        bounce
    }
}
