//! Fixed timestep simulation tick
//!
//! Core loop that advances the simulation deterministically. One call is one
//! atomic step; hosts never observe a partially applied tick.

use glam::Vec2;

use super::collision::resolve;
use super::state::{SimEvent, Simulation, TurnPhase, push_event};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Point the striker should aim at (from pointer position)
    pub aim_target: Option<Vec2>,
    /// Start charging power (press)
    pub begin_charge: bool,
    /// Fire at the current power (release)
    pub release: bool,
    /// Baseline movement in nudge steps, negative is left
    pub nudge: f32,
}

/// Advance the simulation by one tick
pub fn tick(state: &mut Simulation, input: &TickInput) {
    state.time_ticks += 1;

    // Inputs first; each is ignored outside its phase
    if input.nudge != 0.0 {
        state.nudge_striker(input.nudge * state.config.nudge_step);
    }
    if let Some(target) = input.aim_target {
        state.set_aim_target(target);
    }
    if input.begin_charge {
        state.begin_charge();
    }
    if input.release {
        state.release();
    }

    match state.phase {
        TurnPhase::Aiming => state.update_aim(),
        TurnPhase::Charging => state.charge(),
        TurnPhase::Launching => state.launch(),
        TurnPhase::Resolving => {
            step_physics(state);
            if state.all_at_rest() {
                state.settle();
            }
        }
    }
}

/// Move every body one step and resolve contacts.
///
/// All bodies integrate and reflect off the walls before any pair is checked.
/// Pairs run in a fixed order: striker against each coin, then coin pairs by
/// ascending index.
pub fn step_physics(state: &mut Simulation) {
    let board = state.board;
    let restitution = state.config.restitution;
    let striker = &mut state.striker;
    let coins = &mut state.coins;
    let events = &mut state.events;

    for (index, body) in std::iter::once(&mut *striker)
        .chain(coins.iter_mut())
        .enumerate()
    {
        body.integrate();
        if body.reflect_off_boundary(&board).any() {
            push_event(events, SimEvent::WallBounce { body: index });
        }
    }

    for (i, coin) in coins.iter_mut().enumerate() {
        if resolve(striker, coin, restitution).hit {
            log::trace!("striker hit coin {}", i);
            push_event(events, SimEvent::BodyCollision { a: 0, b: i + 1 });
        }
    }

    for i in 0..coins.len() {
        let (head, tail) = coins.split_at_mut(i + 1);
        let a = &mut head[i];
        for (offset, b) in tail.iter_mut().enumerate() {
            let j = i + 1 + offset;
            if resolve(a, b, restitution).hit {
                log::trace!("coin {} hit coin {}", i, j);
                push_event(events, SimEvent::BodyCollision { a: i + 1, b: j + 1 });
            }
        }
    }
}
