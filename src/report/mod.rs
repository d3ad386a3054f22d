//! Report Module
//!
//! The console report run by `--once` and by the `/api` route.

mod driver;
mod select;
mod sink;

pub use driver::{
    run_report, run_report_logged, ReportSummary, MAX_VEHICLE_ID, STARSHIP_DISPLAY_LIMIT,
};
pub use select::{
    films_by_release, is_large_planet, large_planets, PLANET_DIAMETER_THRESHOLD,
    PLANET_POPULATION_THRESHOLD,
};
pub use sink::{ReportSink, TracingSink};
