//! # World Clock
//!
//! State for a world-clock widget: a user-selected list of timezones,
//! persisted across sessions, with human-readable local times recomputed
//! once per second.
//!
//! ## Features
//! - Catalog of every selectable timezone with readable city names
//! - Add/remove selection with durable JSON persistence
//! - Observable snapshots refreshed by a cancellable scheduled task
//! - Headless mode with in-memory state only

/// Terminal front end
pub mod cli;
/// Clock sources for rendering snapshots
pub mod clock;
/// Configuration management and environment variables
pub mod config;
/// Injected capabilities and run modes
pub mod environment;
/// Error types
pub mod error;
/// Timezone selection and snapshot models
pub mod models;
/// Catalog, selection state and the periodic refresher
pub mod services;
/// Observable state holders
pub mod state;
/// Durable storage backends
pub mod storage;
/// Utility functions for datetime formatting and logging
pub mod utils;
