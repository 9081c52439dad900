use std::process::ExitCode;

use spider_ik::creature::{Creature, CreatureConfig};
use spider_ik::math::Point;

const DEFAULT_TICKS: u32 = 240;
const WALK_SPEED: f32 = 2.0;
const WALK_SPAN: f32 = 200.0;

fn load_config(path: Option<&str>) -> Result<CreatureConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let source = std::fs::read_to_string(path)?;
            Ok(CreatureConfig::from_toml_str(&source)?)
        }
        None => Ok(CreatureConfig::default()),
    }
}

/// Body x for `tick`: walk right for `WALK_SPAN`, then back, and repeat.
fn body_position(start: Point, tick: u32) -> Point {
    let travel = tick as f32 * WALK_SPEED;
    let phase = travel % (2.0 * WALK_SPAN);
    let offset = if phase < WALK_SPAN {
        phase
    } else {
        2.0 * WALK_SPAN - phase
    };
    Point::new(start.x + offset, start.y)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next();
    let ticks = match args.next() {
        Some(raw) => raw.parse()?,
        None => DEFAULT_TICKS,
    };

    let config = load_config(config_path.as_deref())?;
    let mut creature = Creature::new(&config)?;

    for tick in 0..ticks {
        let body = body_position(config.start_position, tick);
        let results = creature.tick(body);

        if tick % 30 == 0 {
            log::info!("tick {tick}: body ({:.1}, {:.1})", body.x, body.y);
            for (leg, result) in creature.legs().iter().zip(&results) {
                let tip = leg.chain().tip();
                let target = leg.target();
                log::info!(
                    "  leg {}: tip ({:.1}, {:.1}) target ({:.1}, {:.1}) residual {:.3}{}",
                    leg.index(),
                    tip.x,
                    tip.y,
                    target.x,
                    target.y,
                    result.final_distance,
                    if result.reachable { "" } else { " (out of reach)" }
                );
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
