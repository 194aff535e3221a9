use std::fmt;
use std::sync::Arc;

use crate::clock::{ClockSource, SystemClock};
use crate::storage::PersistenceStore;

/// Whether the clock runs with persistence and a live refresher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Storage and clock available; selection persisted, times refreshed
    #[default]
    Interactive,
    /// No storage or clock; in-memory selection only
    Headless,
}

/// Capabilities injected into a [`crate::services::world_clock::WorldClock`]
#[derive(Clone, Default)]
pub struct Environment {
    /// Durable storage, when available
    pub store: Option<Arc<dyn PersistenceStore>>,
    /// Wall clock used for snapshots, when available
    pub clock: Option<Arc<dyn ClockSource>>,
}

impl Environment {
    /// Storage plus the given clock
    pub fn interactive(store: Arc<dyn PersistenceStore>, clock: Arc<dyn ClockSource>) -> Self {
        Self {
            store: Some(store),
            clock: Some(clock),
        }
    }

    /// Storage plus the system clock
    pub fn with_store(store: Arc<dyn PersistenceStore>) -> Self {
        Self::interactive(store, Arc::new(SystemClock))
    }

    /// Neither storage nor clock
    pub fn headless() -> Self {
        Self::default()
    }

    /// Builds the environment a run mode asks for
    pub fn for_mode(mode: RunMode, store: Arc<dyn PersistenceStore>) -> Self {
        match mode {
            RunMode::Interactive => Self::with_store(store),
            RunMode::Headless => Self::headless(),
        }
    }

    /// True when both storage and a clock are present
    pub fn is_interactive(&self) -> bool {
        self.store.is_some() && self.clock.is_some()
    }

    /// The mode these capabilities amount to
    pub fn mode(&self) -> RunMode {
        if self.is_interactive() {
            RunMode::Interactive
        } else {
            RunMode::Headless
        }
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("store", &self.store.is_some())
            .field("clock", &self.clock.is_some())
            .finish()
    }
}
