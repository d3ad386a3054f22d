//! SWAPI Demo - cached Star Wars API client with a small HTTP front end
//!
//! Fetches characters, starships, planets, films and vehicles, caches every
//! response in memory and prints a formatted report.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod tasks;

pub use api::AppState;
pub use client::SwapiClient;
pub use config::{Cli, Config};
pub use tasks::spawn_report_task;
