//! Data models
//!
//! Typed views of upstream SWAPI payloads and the DTOs served over HTTP.

pub mod responses;
pub mod swapi;

// Re-export commonly used types
pub use responses::StatsResponse;
pub use swapi::{Character, Film, Page, Planet, Starship, Vehicle};
