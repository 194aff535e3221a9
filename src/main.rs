//! # World Clock Main Entry Point
//!
//! Initializes logging, loads configuration, opens the selection store and
//! runs one command against the clock.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use world_clock::cli::{self, Command};
use world_clock::config::Config;
use world_clock::environment::Environment;
use world_clock::error::ClockError;
use world_clock::services::world_clock::WorldClock;
use world_clock::storage::FileStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "world_clock=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting World Clock v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Data dir: {}, Refresh: {:?}",
        config.data_dir.display(), config.refresh_interval);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = cli::parse_command(&args)?;

    let store = FileStore::new(&config.data_dir)
        .with_context(|| format!("Failed to open data directory {}", config.data_dir.display()))?;
    info!("Opened selection store at {}", store.dir().display());
    let env = Environment::for_mode(config.mode, Arc::new(store));
    info!("Running {:?} session", env.mode());

    if command == Command::Watch {
        return watch(env, &config).await;
    }

    let clock = WorldClock::new(env);
    match clock.load_selection() {
        Ok(_) => {}
        Err(ClockError::MalformedSelection(e)) => {
            warn!("Ignoring malformed persisted selection: {}", e);
        }
        Err(e) => return Err(e.into()),
    }

    let output = cli::execute(&clock, &command)?;
    println!("{}", output);
    Ok(())
}

async fn watch(env: Environment, config: &Config) -> Result<()> {
    let (clock, refresher) = WorldClock::init(env, config.refresh_interval).await?;
    let Some(mut refresher) = refresher else {
        println!("{}", cli::execute(&clock, &Command::List)?);
        return Ok(());
    };

    info!("Refreshing every {:?}", refresher.period());
    let mut times = clock.subscribe_current_times();
    println!("{}\n", cli::render_times(&times.borrow_and_update()));

    loop {
        tokio::select! {
            changed = times.changed() => {
                if changed.is_err() {
                    break;
                }
                println!("{}\n", cli::render_times(&times.borrow_and_update()));
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupt received, shutting down");
                break;
            }
        }
    }

    if let Err(e) = refresher.stop().await {
        warn!("Error stopping refresher: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
