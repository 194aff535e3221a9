use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::environment::RunMode;

const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub mode: RunMode,
    pub refresh_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let data_dir = env::var("WORLD_CLOCK_DATA_DIR")
            .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let data_dir = if data_dir.trim().is_empty() {
            DEFAULT_DATA_DIR.to_string()
        } else {
            data_dir
        };

        let mode = match env::var("WORLD_CLOCK_MODE") {
            Ok(mode) => parse_mode(&mode)?,
            Err(_) => RunMode::Interactive,
        };

        let secs_str = env::var("WORLD_CLOCK_REFRESH_SECS")
            .unwrap_or_else(|_| "1".to_string());
        let secs: u64 = secs_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid WORLD_CLOCK_REFRESH_SECS"))?;
        if secs == 0 {
            return Err(anyhow!("Invalid WORLD_CLOCK_REFRESH_SECS"));
        }

        Ok(Config {
            data_dir: PathBuf::from(data_dir),
            mode,
            refresh_interval: Duration::from_secs(secs),
        })
    }
}

fn parse_mode(value: &str) -> Result<RunMode> {
    match value.trim().to_lowercase().as_str() {
        "" | "interactive" => Ok(RunMode::Interactive),
        "headless" => Ok(RunMode::Headless),
        _ => Err(anyhow!("Invalid WORLD_CLOCK_MODE")),
    }
}
