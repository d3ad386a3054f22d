//! Cache Module
//!
//! Provides the in-memory response cache and fetch statistics.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{serialized_len, CacheEntry};
pub use stats::ClientStats;
pub use store::ResponseCache;
