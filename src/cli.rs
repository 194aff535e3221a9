//! Terminal front end: argument parsing and rendering.

use anyhow::{anyhow, Result};

use crate::models::{parse_timezone, TimezoneConfig, TimezoneSnapshot};
use crate::services::catalog::{format_city_name, search_catalog};
use crate::services::world_clock::WorldClock;

/// Usage text printed on parse errors
pub const USAGE: &str = "Usage: world-clock [watch | list | add <timezone> [city...] | remove <timezone> | catalog [query] | hour <timezone>]";

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the clock faces on every refresh until interrupted
    Watch,
    /// Print the selection once
    List,
    /// Append a timezone
    Add(TimezoneConfig),
    /// Remove every entry with this identifier
    Remove(String),
    /// Search the catalog
    Catalog(String),
    /// Print the current hour in a timezone
    Hour(String),
}

/// Parses the arguments following the program name
pub fn parse_command(args: &[String]) -> Result<Command> {
    let Some((name, rest)) = args.split_first() else {
        return Ok(Command::Watch);
    };

    match name.to_lowercase().as_str() {
        "watch" => Ok(Command::Watch),
        "list" => Ok(Command::List),
        "add" => {
            let (timezone, city) = rest
                .split_first()
                .ok_or_else(|| anyhow!("add requires a timezone\n{}", USAGE))?;
            parse_timezone(timezone)?;
            let city = if city.is_empty() {
                format_city_name(timezone)
            } else {
                city.join(" ")
            };
            Ok(Command::Add(TimezoneConfig::new(city, timezone.as_str())))
        }
        "remove" => rest
            .first()
            .map(|tz| Command::Remove(tz.clone()))
            .ok_or_else(|| anyhow!("remove requires a timezone\n{}", USAGE)),
        "catalog" => Ok(Command::Catalog(rest.join(" "))),
        "hour" => rest
            .first()
            .map(|tz| Command::Hour(tz.clone()))
            .ok_or_else(|| anyhow!("hour requires a timezone\n{}", USAGE)),
        other => Err(anyhow!("Unknown command '{}'\n{}", other, USAGE)),
    }
}

/// One line per clock face
pub fn render_times(times: &[TimezoneSnapshot]) -> String {
    let width = times.iter().map(|t| t.city.chars().count()).max().unwrap_or(0);
    times
        .iter()
        .map(|t| format!("{:<width$}  {}  {}  ({})", t.city, t.time, t.date, t.timezone))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per catalog entry
pub fn render_catalog(entries: &[TimezoneConfig]) -> String {
    entries
        .iter()
        .map(|e| format!("{}  ({})", e.city, e.timezone))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs every command except `watch`, returning the text to print
pub fn execute(clock: &WorldClock, command: &Command) -> Result<String> {
    match command {
        Command::Watch => Err(anyhow!("watch is handled by the refresh loop")),
        Command::List => {
            clock.update_times();
            let times = clock.get_current_times();
            if times.is_empty() {
                // headless: no clock to render with
                Ok(render_catalog(&clock.get_timezones()))
            } else {
                Ok(render_times(&times))
            }
        }
        Command::Add(cfg) => {
            clock.add_timezone(cfg.clone())?;
            Ok(format!("Added {} ({})", cfg.city, cfg.timezone))
        }
        Command::Remove(id) => {
            let before = clock.len();
            clock.remove_timezone(id)?;
            let removed = before - clock.len();
            if removed == 0 {
                Ok(format!("{} was not selected", id))
            } else {
                Ok(format!("Removed {} ({} entries)", id, removed))
            }
        }
        Command::Catalog(query) => {
            let matches = search_catalog(query);
            if matches.is_empty() {
                Ok(format!("No timezones match '{}'", query))
            } else {
                Ok(render_catalog(&matches))
            }
        }
        Command::Hour(id) => {
            let hour = clock.get_current_hour(id)?;
            Ok(format!("{:02}", hour))
        }
    }
}
