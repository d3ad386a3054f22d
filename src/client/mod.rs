//! Client Module
//!
//! Fetch client for the Star Wars API with an in-memory response cache.

mod swapi;
mod transport;

pub use swapi::SwapiClient;
pub use transport::{HttpTransport, RawResponse, Transport};
