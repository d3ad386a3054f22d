//! API Module
//!
//! HTTP handlers and routing for the demo server.
//!
//! # Endpoints
//! - `/`, `/index.html` - Landing page with stats
//! - `/api` - Fire-and-forget report run
//! - `/stats` - JSON statistics

pub mod handlers;
mod page;
pub mod routes;

pub use handlers::*;
pub use page::render_index;
pub use routes::create_router;
