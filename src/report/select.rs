//! Selection helpers for the report
//!
//! Pure functions over decoded upstream records.

use crate::models::{Film, Planet};

/// Planets must have strictly more inhabitants than this to be listed
pub const PLANET_POPULATION_THRESHOLD: u64 = 1_000_000_000;

/// Planets must be strictly wider than this (km) to be listed
pub const PLANET_DIAMETER_THRESHOLD: u64 = 10_000;

/// True when both population and diameter are known numbers above the
/// thresholds. `unknown` never qualifies.
pub fn is_large_planet(planet: &Planet) -> bool {
    matches!(planet.population_value(), Some(p) if p > PLANET_POPULATION_THRESHOLD)
        && matches!(planet.diameter_value(), Some(d) if d > PLANET_DIAMETER_THRESHOLD)
}

/// Large, densely populated planets, in input order.
pub fn large_planets(planets: &[Planet]) -> Vec<&Planet> {
    planets.iter().filter(|p| is_large_planet(p)).collect()
}

/// Films sorted ascending by release date.
///
/// Films without a parseable date come first; equal dates keep input order.
pub fn films_by_release(mut films: Vec<Film>) -> Vec<Film> {
    films.sort_by_key(|film| film.release());
    films
}
