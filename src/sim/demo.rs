//! Demo mode: a seeded auto-player
//!
//! Produces [`TickInput`]s the way a human would: pick a spot on the baseline, aim
//! somewhere around the coins, hold the charge for a while, release. Seeded, so a
//! given seed always plays the same game.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Simulation, TurnPhase};
use super::tick::TickInput;

/// Aim points are drawn within this fraction of the play area around the center
const AIM_SPREAD: f32 = 0.25;
/// Maximum baseline nudges before a shot
const MAX_NUDGES: i32 = 8;

/// Shot the demo player is lining up
#[derive(Debug, Clone, Copy)]
struct Plan {
    nudges_left: i32,
    target: Vec2,
    power: f32,
}

/// Deterministic auto-player
#[derive(Debug, Clone)]
pub struct DemoPlayer {
    pub seed: u64,
    rng: Pcg32,
    plan: Option<Plan>,
}

impl DemoPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            plan: None,
        }
    }

    fn make_plan(&mut self, state: &Simulation) -> Plan {
        let spread = state.board.play_area_size * AIM_SPREAD;
        let target = state.board.center()
            + Vec2::new(
                self.rng.random_range(-spread..=spread),
                self.rng.random_range(-spread..=spread),
            );
        Plan {
            nudges_left: self.rng.random_range(-MAX_NUDGES..=MAX_NUDGES),
            target,
            power: self.rng.random_range(0.3f32..=1.0),
        }
    }

    /// Input for the next tick
    pub fn next_input(&mut self, state: &Simulation) -> TickInput {
        match state.phase {
            TurnPhase::Aiming => {
                let mut plan = match self.plan {
                    Some(plan) => plan,
                    None => self.make_plan(state),
                };
                let input = if plan.nudges_left != 0 {
                    let step = plan.nudges_left.signum();
                    plan.nudges_left -= step;
                    TickInput {
                        nudge: step as f32,
                        aim_target: Some(plan.target),
                        ..Default::default()
                    }
                } else {
                    TickInput {
                        aim_target: Some(plan.target),
                        begin_charge: true,
                        ..Default::default()
                    }
                };
                self.plan = Some(plan);
                input
            }
            TurnPhase::Charging => {
                let power = self.plan.map_or(1.0, |p| p.power);
                TickInput {
                    release: state.power_level >= power,
                    ..Default::default()
                }
            }
            TurnPhase::Launching | TurnPhase::Resolving => {
                self.plan = None;
                TickInput::default()
            }
        }
    }
}
