//! Headless driver
//!
//! Runs the built-in campaign at a fixed 60 Hz step with a scripted "hold
//! right, hop every second" input and logs what happens. Useful for checking
//! level layouts and tuning without a renderer.
//!
//! Usage: `RUST_LOG=info relic-run-headless [seed] [tuning.ron]`

use std::env;
use std::fs;
use std::process::ExitCode;

use log::{error, info};

use relic_run::config::TICKS_PER_SECOND;
use relic_run::{default_levels, EngineError, GameEvent, GamePhase, InputIntent, LevelSet, Session, Tuning};

const MAX_TICKS: u64 = 60 * 60 * 5; // 5 minutes of game time
const MAX_RETRIES: u32 = 20;
const HOP_TICKS: u64 = 6; // Short tap: clears floor blocks, never reaches the raised tiers

fn scripted_input(frame: u64) -> InputIntent {
    let second = frame % TICKS_PER_SECOND as u64;
    InputIntent {
        left: false,
        right: true,
        jump: second < HOP_TICKS,
    }
}

fn run(seed: u64, tuning: Tuning) -> Result<(), EngineError> {
    let levels = LevelSet::new(default_levels())?;
    let mut session = Session::new(levels, tuning, seed)?;
    session.confirm_character(0)?;

    let mut retries = 0;
    for _ in 0..MAX_TICKS {
        let snapshot = session.tick(scripted_input(session.frame()));

        for event in session.drain_events() {
            match event {
                GameEvent::RunCompleted { final_score } => {
                    info!("Run completed with score {}", final_score)
                }
                GameEvent::Died { cause } => info!("Died: {:?}", cause),
                GameEvent::LevelCleared { level } => info!("Cleared level {}", level),
                _ => {}
            }
        }

        match snapshot.phase {
            GamePhase::Dead if retries < MAX_RETRIES => {
                retries += 1;
                session.retry()?;
            }
            GamePhase::Dead => {
                info!("Giving up after {} retries (score {})", retries, snapshot.score);
                return Ok(());
            }
            GamePhase::LevelCleared => session.next_level()?,
            GamePhase::CampaignCleared => return Ok(()),
            _ => {}
        }
    }
    info!("Tick limit reached on level {}", session.level_index());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let tuning = match args.next() {
        Some(path) => match fs::read_to_string(&path) {
            Ok(source) => match Tuning::from_ron(&source) {
                Ok(t) => t,
                Err(e) => {
                    error!("{}: {}", path, e);
                    return ExitCode::FAILURE;
                }
            },
            Err(e) => {
                error!("{}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };

    match run(seed, tuning) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
