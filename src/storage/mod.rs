//! Durable key/value storage for the persisted selection.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Key under which the selected timezones are stored
pub const SELECTED_TIMEZONES_KEY: &str = "selected_timezones";

/// String key/value storage that outlives a session
pub trait PersistenceStore: Send + Sync {
    /// Reads `key`, returning `None` when it was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites `key` with `value`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
