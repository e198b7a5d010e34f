//! Simulation state and turn phases
//!
//! Everything a host needs to drive or draw a game lives in [`Simulation`].

use std::collections::VecDeque;
use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::board::BoardLayout;
use super::body::{Body, BodyKind, CoinKind};
use crate::config::SimConfig;
use crate::error::SimResult;
use crate::{angle_between, polar_to_cartesian};

/// One of the two players. Player one shoots from the bottom baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1-based number for display
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Current phase of a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Striker placement and aim, no physics
    Aiming,
    /// Power builds up each tick
    Charging,
    /// Striker velocity is set on the next tick
    Launching,
    /// Bodies move until everything settles
    Resolving,
}

/// Events that move the turn state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseSignal {
    BeginCharge,
    Release,
    Launched,
    Settled,
}

impl TurnPhase {
    /// Transition table. `None` means the signal is ignored in this phase.
    pub fn transition(self, signal: PhaseSignal) -> Option<TurnPhase> {
        match (self, signal) {
            (TurnPhase::Aiming, PhaseSignal::BeginCharge) => Some(TurnPhase::Charging),
            (TurnPhase::Charging, PhaseSignal::Release) => Some(TurnPhase::Launching),
            (TurnPhase::Launching, PhaseSignal::Launched) => Some(TurnPhase::Resolving),
            (TurnPhase::Resolving, PhaseSignal::Settled) => Some(TurnPhase::Aiming),
            _ => None,
        }
    }
}

/// Things that happened during a tick, for audio/visual hosts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    ChargeStarted,
    Launched { angle: f32, power: f32 },
    /// Body indices: 0 is the striker, `i + 1` is coin `i`
    BodyCollision { a: usize, b: usize },
    /// A body bounced off a wall; same indexing as `BodyCollision`
    WallBounce { body: usize },
    TurnEnded { next_player: Player, ticks: u64 },
}

/// Maximum undrained events; the oldest are dropped beyond this
pub const MAX_PENDING_EVENTS: usize = 1024;

/// Queue an event, dropping the oldest once the queue is full
pub(crate) fn push_event(events: &mut VecDeque<SimEvent>, event: SimEvent) {
    if events.len() >= MAX_PENDING_EVENTS {
        events.pop_front();
    }
    events.push_back(event);
}

/// Read-only view of one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub kind: BodyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            kind: body.kind,
            pos: body.pos,
            vel: body.vel,
            radius: body.radius(),
        }
    }
}

/// Everything a renderer reads in one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: TurnPhase,
    pub current_player: Player,
    pub aim_angle: f32,
    pub power_level: f32,
    pub turn_number: u32,
    pub time_ticks: u64,
    /// Striker first, then coins in order
    pub bodies: Vec<BodySnapshot>,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    pub config: SimConfig,
    pub board: BoardLayout,
    pub striker: Body,
    /// Coins in stable order; never removed
    pub coins: Vec<Body>,
    pub phase: TurnPhase,
    pub current_player: Player,
    /// Radians, screen coordinates (y grows downward)
    pub aim_angle: f32,
    /// Last aim point supplied by the host
    pub aim_target: Option<Vec2>,
    /// Launch power in [0, 1]
    pub power_level: f32,
    /// Completed shots
    pub turn_number: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Tick at which the current shot was launched
    pub(crate) shot_started_tick: u64,
    /// Pending events, oldest first. Hosts should call [`Simulation::drain_events`]
    /// every frame; at most [`MAX_PENDING_EVENTS`] are kept.
    pub events: VecDeque<SimEvent>,
}

impl Simulation {
    /// Create a game with the standard coin layout
    pub fn new(config: SimConfig) -> SimResult<Self> {
        let mut sim = Self::empty(config)?;
        sim.coins = standard_coins(&sim.board, &sim.config)?;
        log::info!(
            "New game: board {} with {} coins, player {} to shoot",
            sim.board.size,
            sim.coins.len(),
            sim.current_player.number()
        );
        Ok(sim)
    }

    /// Create a game with only the striker on the board
    pub fn empty(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let board = config.board_layout();
        let striker = Body::striker(&board, &config.striker, Player::One)?;
        Ok(Self {
            config,
            board,
            striker,
            coins: Vec::new(),
            phase: TurnPhase::Aiming,
            current_player: Player::One,
            aim_angle: 0.0,
            aim_target: None,
            power_level: 0.0,
            turn_number: 0,
            time_ticks: 0,
            shot_started_tick: 0,
            events: VecDeque::new(),
        })
    }

    /// Place a coin at `pos`, sized from the config
    pub fn add_coin(&mut self, kind: CoinKind, pos: Vec2) -> SimResult<usize> {
        let coin = Body::from_disc(BodyKind::Coin(kind), pos, &self.board, &self.config.coin)?;
        self.coins.push(coin);
        Ok(self.coins.len() - 1)
    }

    /// Striker followed by every coin
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        std::iter::once(&self.striker).chain(self.coins.iter())
    }

    pub fn bodies_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        std::iter::once(&mut self.striker).chain(self.coins.iter_mut())
    }

    /// Whether every body is slower than the rest threshold
    pub fn all_at_rest(&self) -> bool {
        let threshold = self.config.rest_threshold;
        self.bodies().all(|b| b.is_at_rest(threshold))
    }

    /// Apply a phase signal; returns whether the phase changed
    pub(crate) fn signal(&mut self, signal: PhaseSignal) -> bool {
        match self.phase.transition(signal) {
            Some(next) => {
                self.phase = next;
                true
            }
            None => false,
        }
    }

    /// Remember the host's aim point. Ignored outside aiming.
    pub fn set_aim_target(&mut self, target: Vec2) {
        if self.phase == TurnPhase::Aiming {
            self.aim_target = Some(target);
        }
    }

    /// Recompute the aim angle from the stored target
    pub fn update_aim(&mut self) {
        if let Some(target) = self.aim_target {
            if target != self.striker.pos {
                self.aim_angle = angle_between(self.striker.pos, target);
            }
        }
    }

    pub fn begin_charge(&mut self) {
        if self.signal(PhaseSignal::BeginCharge) {
            self.power_level = 0.0;
            push_event(&mut self.events, SimEvent::ChargeStarted);
        }
    }

    pub fn release(&mut self) {
        self.signal(PhaseSignal::Release);
    }

    /// Slide the striker along the baseline. Only legal while aiming; the result is
    /// clamped to the baseline's ends.
    pub fn nudge_striker(&mut self, dx: f32) {
        if self.phase != TurnPhase::Aiming {
            return;
        }
        let (min_x, max_x) = self.board.baseline_x_range();
        self.striker.pos.x = (self.striker.pos.x + dx).clamp(min_x, max_x);
    }

    /// One charging tick: power rises and saturates at 1
    pub fn charge(&mut self) {
        self.power_level = (self.power_level + self.config.power_rate).min(1.0);
    }

    /// Fire the striker along the aim angle
    pub fn launch(&mut self) {
        let power = self.power_level.clamp(0.0, 1.0);
        let vel = Vec2::from_angle(self.aim_angle) * power * self.striker.max_speed();
        self.striker.set_velocity(vel);
        self.shot_started_tick = self.time_ticks;
        push_event(
            &mut self.events,
            SimEvent::Launched {
                angle: self.aim_angle,
                power,
            },
        );
        log::debug!(
            "Player {} launched at {:.3} rad, power {:.2}",
            self.current_player.number(),
            self.aim_angle,
            power
        );
        self.signal(PhaseSignal::Launched);
    }

    /// End the shot: stop everything, hand over to the other player and reset the
    /// striker to their baseline
    pub fn settle(&mut self) {
        if !self.signal(PhaseSignal::Settled) {
            return;
        }
        for body in self.bodies_mut() {
            body.stop();
        }
        self.current_player = self.current_player.other();
        self.striker.pos = self.board.start_position(self.current_player);
        self.power_level = 0.0;
        self.aim_target = None;
        self.turn_number += 1;

        let ticks = self.time_ticks.saturating_sub(self.shot_started_tick);
        push_event(
            &mut self.events,
            SimEvent::TurnEnded {
                next_player: self.current_player,
                ticks,
            },
        );
        log::info!(
            "Shot settled after {} ticks; player {} to shoot",
            ticks,
            self.current_player.number()
        );
    }

    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        self.events.drain(..).collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            current_player: self.current_player,
            aim_angle: self.aim_angle,
            power_level: self.power_level,
            turn_number: self.turn_number,
            time_ticks: self.time_ticks,
            bodies: self.bodies().map(BodySnapshot::from).collect(),
        }
    }
}

/// Queen at the center with alternating black and white coins in a ring around it
pub fn standard_coins(board: &BoardLayout, config: &SimConfig) -> SimResult<Vec<Body>> {
    let center = board.center();
    let coin_radius = board.play_area_size * config.coin.radius_ratio;
    let gap = coin_radius * config.ring_gap_factor;
    let n = config.ring_coins;

    let mut coins = Vec::with_capacity(n + 1);
    coins.push(Body::from_disc(
        BodyKind::Coin(CoinKind::Queen),
        center,
        board,
        &config.coin,
    )?);
    for i in 0..n {
        let angle = i as f32 * TAU / n as f32;
        let kind = if i % 2 == 0 {
            CoinKind::Black
        } else {
            CoinKind::White
        };
        coins.push(Body::from_disc(
            BodyKind::Coin(kind),
            center + polar_to_cartesian(gap, angle),
            board,
            &config.coin,
        )?);
    }
    Ok(coins)
}
