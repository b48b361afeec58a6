use bevy::prelude::*;
use clap::Parser;

use finger_ninja::{GameConfig, GamePlugin, GameRng};

const DEFAULT_CONFIG_PATH: &str = "assets/config/game.ron";

/// Cut falling fruit with a tracked fingertip. Five fingers end the round,
/// two fingers restart it.
#[derive(Parser, Debug)]
#[command(name = "finger_ninja", version)]
struct Cli {
    /// RON config file; defaults fill anything missing. Without this flag the
    /// shipped assets/config/game.ron is used when present.
    #[arg(long)]
    config: Option<String>,
    /// Seed the spawn RNG for a reproducible run (overrides rng_seed in config).
    #[arg(long)]
    seed: Option<u64>,
    /// Exit after this many seconds (overrides window.autoClose).
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        // An explicitly requested config that fails to load is a hard error.
        Some(path) => GameConfig::load_from_file(path)
            .map_err(|e| anyhow::anyhow!("loading config {path}: {e}"))?,
        None => {
            let (cfg, err) = GameConfig::load_or_default(DEFAULT_CONFIG_PATH);
            if let Some(err) = err {
                // Logging is not up yet; defaults are fine without a file.
                eprintln!("config: {err}; using defaults");
            }
            cfg
        }
    };
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }
    let seed = cli.seed.or(cfg.rng_seed);
    // from_hz panics on a non-positive rate; validate() already warns about it.
    let tick_hz = if cfg.tick.rate_hz > 0.0 {
        cfg.tick.rate_hz
    } else {
        30.0
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width as f32, cfg.window.height as f32).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(Time::<Fixed>::from_hz(tick_hz))
        .insert_resource(GameRng::from_seed_opt(seed))
        .insert_resource(cfg)
        .add_systems(Startup, log_config_warnings)
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}

fn log_config_warnings(cfg: Res<GameConfig>) {
    for warning in cfg.validate() {
        warn!(target: "config", "{warning}");
    }
}
