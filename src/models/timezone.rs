use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{ClockError, Result};

/// A selected clock: display label plus IANA timezone identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneConfig {
    pub city: String,
    pub timezone: String,
}

impl TimezoneConfig {
    /// Creates a config from a label and an identifier
    pub fn new(city: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            timezone: timezone.into(),
        }
    }

    /// Resolves the identifier against the timezone database
    pub fn tz(&self) -> Result<Tz> {
        parse_timezone(&self.timezone)
    }
}

/// A rendered clock face for one selected timezone. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimezoneSnapshot {
    pub city: String,
    pub timezone: String,
    /// 24-hour `HH:MM`
    pub time: String,
    /// e.g. `Mon 19 Oct`
    pub date: String,
}

/// The compiled-in selection used when nothing has been persisted yet
pub fn default_timezones() -> Vec<TimezoneConfig> {
    vec![
        TimezoneConfig::new("London", "Europe/London"),
        TimezoneConfig::new("New York", "America/New_York"),
        TimezoneConfig::new("Tokyo", "Asia/Tokyo"),
        TimezoneConfig::new("Sydney", "Australia/Sydney"),
        TimezoneConfig::new("Dubai", "Asia/Dubai"),
    ]
}

/// Parses an IANA identifier, mapping failure to `ClockError::InvalidTimezone`
pub fn parse_timezone(id: &str) -> Result<Tz> {
    id.parse::<Tz>()
        .map_err(|_| ClockError::InvalidTimezone(id.to_string()))
}
