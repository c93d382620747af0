use std::env;

use anyhow::Context;
use querysync_cli::logging::init_logging;
use querysync_cli::scenario::{replay, Scenario};
use querysync_core::config::{resolve_with_base, Config};

fn parse_args() -> Option<String> {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    match args.first().map(String::as_str) {
        Some("-h" | "--help") => {
            eprintln!("Usage: {} [scenario.json]", prog);
            eprintln!("Falls back to `replay.scenario` from querysync.toml when no path is given.");
            std::process::exit(0);
        }
        _ => args.into_iter().next(),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging("info")?;
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let scenario_arg = match parse_args() {
        Some(path) => path,
        None => config
            .get::<String>("replay.scenario")
            .context("No scenario given and `replay.scenario` is not configured")?,
    };
    let scenario_path = resolve_with_base(&env::current_dir()?, &scenario_arg);
    tracing::info!(path = %scenario_path.display(), env = config.env(), "replaying scenario");

    let scenario = Scenario::from_path(&scenario_path)?;
    let reports = replay(scenario, config.settings().clone())?;
    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
