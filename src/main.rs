//! Carrom Sim entry point
//!
//! Headless native host: plays demo turns at the fixed tick and prints the final
//! board as JSON.
//!
//! Usage: `carrom-sim [CONFIG] [TURNS]`

use std::path::PathBuf;

use carrom_sim::SimConfig;
use carrom_sim::sim::{DemoPlayer, SimEvent, Simulation, tick};
use clap::Parser;

/// Turns played when none are requested
const DEFAULT_TURNS: u32 = 4;
/// Hard stop in case a shot never settles
const MAX_TICKS: u64 = 1_000_000;
const DEMO_SEED: u64 = 0xC0FFEE;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config file; defaults apply to any missing field
    config: Option<PathBuf>,

    /// Number of turns to play
    #[arg(default_value_t = DEFAULT_TURNS)]
    turns: u32,
}

fn main() {
    env_logger::init();
    log::info!("Carrom Sim (native) starting...");

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> carrom_sim::SimResult<()> {
    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let turns = args.turns;

    let mut state = Simulation::new(config)?;
    let mut demo = DemoPlayer::new(DEMO_SEED);
    let mut collisions = 0usize;
    let mut wall_hits = 0usize;

    while state.turn_number < turns && state.time_ticks < MAX_TICKS {
        let input = demo.next_input(&state);
        tick(&mut state, &input);

        for event in state.drain_events() {
            match event {
                SimEvent::BodyCollision { .. } => collisions += 1,
                SimEvent::WallBounce { .. } => wall_hits += 1,
                SimEvent::TurnEnded { next_player, ticks } => {
                    log::info!(
                        "Turn {} done in {} ticks ({} contacts, {} wall hits); player {} up",
                        state.turn_number,
                        ticks,
                        collisions,
                        wall_hits,
                        next_player.number()
                    );
                    collisions = 0;
                    wall_hits = 0;
                }
                _ => {}
            }
        }
    }

    if state.turn_number < turns {
        log::warn!("Stopped after {} ticks", state.time_ticks);
    }

    println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
    Ok(())
}
