use chrono::{DateTime, TimeZone, Timelike, Utc};

/// Placeholder shown when a timezone cannot be rendered
pub const UNKNOWN_TIME: &str = "--:--";
/// Placeholder shown when a date cannot be rendered
pub const UNKNOWN_DATE: &str = "---";

/// 24-hour `HH:MM`, en-GB style
pub fn format_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%H:%M").to_string()
}

/// Short weekday, 2-digit day, short month: `Mon 19 Oct`
pub fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%a %d %b").to_string()
}

/// Hour of day (0-23) of `now` seen from `tz`
pub fn hour_in<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> u32 {
    now.with_timezone(tz).hour()
}
