use tracing::{debug, error, info, warn};

/// Logs a change to the selected timezones with consistent format
pub fn log_selection_change(action: &str, timezone: &str, count: usize) {
    info!("SELECTION: {} {} - {} selected", action, timezone, count);
}

/// Logs storage operations with consistent format
pub fn log_store_operation(operation: &str, key: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("STORE_OP: {} on {} - {}", operation, key, d),
        None => debug!("STORE_OP: {} on {}", operation, key),
    }
}

/// Logs storage errors with consistent format
pub fn log_store_error(operation: &str, key: &str, error: &str) {
    error!("STORE_ERROR: {} on {} failed: {}", operation, key, error);
}

/// Logs a timezone the database could not resolve
pub fn log_invalid_timezone(timezone: &str, context: &str) {
    warn!("INVALID_TIMEZONE: '{}' during {}", timezone, context);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
