//! Cache Entry Module
//!
//! Defines the structure for a single cached upstream payload.

use chrono::{DateTime, Utc};
use serde_json::Value;

// == Cache Entry ==
/// A parsed upstream payload plus fetch metadata.
///
/// Entries have no expiration: once stored they live for the whole process.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The parsed JSON payload
    pub value: Value,
    /// When the payload was fetched
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Value) -> Self {
        Self {
            value,
            fetched_at: Utc::now(),
        }
    }

    // == Age ==
    /// Milliseconds elapsed since the payload was fetched.
    pub fn age_ms(&self) -> i64 {
        (Utc::now() - self.fetched_at).num_milliseconds().max(0)
    }
}

// == Utility Functions ==
/// Returns the byte length of the compact JSON serialization of `value`.
pub fn serialized_len(value: &Value) -> usize {
    // Display for Value is the compact serializer and cannot fail
    value.to_string().len()
}
