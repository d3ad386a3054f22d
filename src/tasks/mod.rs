//! Background Tasks Module
//!
//! Tasks detached from the request that triggered them.
//!
//! # Tasks
//! - Report: one full report run, not awaited by the `/api` handler

mod report;

pub use report::spawn_report_task;
