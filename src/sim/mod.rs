//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock time
//! - Seeded RNG only (demo player)
//! - Stable iteration order (striker, then coins by index)
//! - No rendering or platform dependencies

pub mod board;
pub mod body;
pub mod collision;
pub mod demo;
pub mod state;
pub mod tick;

pub use board::BoardLayout;
pub use body::{Body, BodyKind, Bounce, CoinKind};
pub use collision::{CollisionResult, elastic_exchange, overlaps, resolve, total_kinetic_energy};
pub use demo::DemoPlayer;
pub use state::{
    BodySnapshot, MAX_PENDING_EVENTS, PhaseSignal, Player, SimEvent, Simulation, Snapshot,
    TurnPhase, standard_coins,
};
pub use tick::{TickInput, step_physics, tick};
