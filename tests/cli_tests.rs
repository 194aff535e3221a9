#![allow(clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use std::sync::Arc;
use world_clock::cli::{execute, parse_command, render_times, Command};
use world_clock::clock::FixedClock;
use world_clock::environment::Environment;
use world_clock::models::{TimezoneConfig, TimezoneSnapshot};
use world_clock::services::world_clock::WorldClock;
use world_clock::storage::MemoryStore;

fn args(input: &[&str]) -> Vec<String> {
    input.iter().map(|s| s.to_string()).collect()
}

fn fixed_world_clock() -> WorldClock {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 13, 5, 0).unwrap();
    WorldClock::new(Environment::interactive(
        Arc::new(MemoryStore::new()),
        Arc::new(FixedClock::new(now)),
    ))
}

#[cfg(test)]
mod parsing_tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_watch() {
        assert_eq!(parse_command(&[]).unwrap(), Command::Watch);
        assert_eq!(parse_command(&args(&["WATCH"])).unwrap(), Command::Watch);
    }

    #[test]
    fn test_add_derives_city_name() {
        let cmd = parse_command(&args(&["add", "America/St_Johns"])).unwrap();
        assert_eq!(cmd, Command::Add(TimezoneConfig::new("Saint Johns", "America/St_Johns")));
    }

    #[test]
    fn test_add_with_explicit_city() {
        let cmd = parse_command(&args(&["add", "Asia/Kolkata", "Bengaluru", "Office"])).unwrap();
        assert_eq!(cmd, Command::Add(TimezoneConfig::new("Bengaluru Office", "Asia/Kolkata")));
    }

    #[test]
    fn test_add_rejects_unknown_timezone() {
        let err = parse_command(&args(&["add", "Mars/Olympus_Mons"])).unwrap_err();
        assert!(err.to_string().contains("Invalid timezone"));
    }

    #[test]
    fn test_missing_arguments() {
        for input in [vec!["add"], vec!["remove"], vec!["hour"]] {
            let result = parse_command(&args(&input));
            assert!(result.is_err(), "Should reject: {:?}", input);
            assert!(result.unwrap_err().to_string().contains("Usage"));
        }
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_command(&args(&["dance"])).unwrap_err();
        assert!(err.to_string().contains("Unknown command 'dance'"));
    }

    #[test]
    fn test_catalog_query_joins_words() {
        let cmd = parse_command(&args(&["catalog", "new", "york"])).unwrap();
        assert_eq!(cmd, Command::Catalog("new york".to_string()));
        assert_eq!(parse_command(&args(&["catalog"])).unwrap(), Command::Catalog(String::new()));
    }
}

#[cfg(test)]
mod execution_tests {
    use super::*;

    #[test]
    fn test_list_renders_current_times() {
        let clock = fixed_world_clock();
        let output = execute(&clock, &Command::List).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("London"));
        assert!(lines[0].contains("14:05  Mon 19 Oct  (Europe/London)"));
        assert!(lines[3].contains("00:05  Tue 20 Oct"));
    }

    #[test]
    fn test_list_headless_shows_selection() {
        let clock = WorldClock::new(Environment::headless());
        let output = execute(&clock, &Command::List).unwrap();
        assert!(output.starts_with("London  (Europe/London)"));
    }

    #[test]
    fn test_add_and_remove() {
        let clock = fixed_world_clock();

        let output = execute(&clock, &Command::Add(TimezoneConfig::new("Paris", "Europe/Paris"))).unwrap();
        assert_eq!(output, "Added Paris (Europe/Paris)");
        assert_eq!(clock.len(), 6);

        let output = execute(&clock, &Command::Remove("Europe/Paris".to_string())).unwrap();
        assert_eq!(output, "Removed Europe/Paris (1 entries)");

        let output = execute(&clock, &Command::Remove("Europe/Paris".to_string())).unwrap();
        assert_eq!(output, "Europe/Paris was not selected");
    }

    #[test]
    fn test_hour() {
        let clock = fixed_world_clock();
        assert_eq!(execute(&clock, &Command::Hour("America/New_York".to_string())).unwrap(), "09");
        assert!(execute(&clock, &Command::Hour("Nowhere".to_string())).is_err());
    }

    #[test]
    fn test_catalog_search() {
        let clock = fixed_world_clock();
        let output = execute(&clock, &Command::Catalog("kolkata".to_string())).unwrap();
        assert!(output.contains("Kolkata  (Asia/Kolkata)"));

        let output = execute(&clock, &Command::Catalog("zzzz-none".to_string())).unwrap();
        assert_eq!(output, "No timezones match 'zzzz-none'");
    }

    #[test]
    fn test_watch_is_not_executed() {
        let clock = fixed_world_clock();
        assert!(execute(&clock, &Command::Watch).is_err());
    }

    #[test]
    fn test_render_times_aligns_cities() {
        let times = vec![
            TimezoneSnapshot {
                city: "Tokyo".to_string(),
                timezone: "Asia/Tokyo".to_string(),
                time: "22:05".to_string(),
                date: "Mon 19 Oct".to_string(),
            },
            TimezoneSnapshot {
                city: "New York".to_string(),
                timezone: "America/New_York".to_string(),
                time: "09:05".to_string(),
                date: "Mon 19 Oct".to_string(),
            },
        ];
        let output = render_times(&times);
        assert_eq!(
            output,
            "Tokyo     22:05  Mon 19 Oct  (Asia/Tokyo)\nNew York  09:05  Mon 19 Oct  (America/New_York)"
        );
        assert_eq!(render_times(&[]), "");
    }

    #[test]
    fn test_render_times_aligns_non_ascii_cities() {
        let snapshot = |city: &str, time: &str| TimezoneSnapshot {
            city: city.to_string(),
            timezone: "Europe/Zurich".to_string(),
            time: time.to_string(),
            date: "Mon 19 Oct".to_string(),
        };
        let output = render_times(&[snapshot("Zürich", "15:05"), snapshot("Bern", "15:05")]);
        assert_eq!(
            output,
            "Zürich  15:05  Mon 19 Oct  (Europe/Zurich)\nBern    15:05  Mon 19 Oct  (Europe/Zurich)"
        );
    }
}
