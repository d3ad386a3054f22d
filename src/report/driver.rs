//! Report Driver
//!
//! The fixed five-step demo run: character, starships, planets, films and,
//! for low character ids, a vehicle. Steps run strictly in sequence and the
//! first failure aborts the rest of the run.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::cache::serialized_len;
use crate::client::SwapiClient;
use crate::error::ReportError;
use crate::models::{Character, Film, Page, Planet, Starship, Vehicle};
use crate::report::select::{films_by_release, large_planets};
use crate::report::sink::{ReportSink, TracingSink};

/// Number of starships printed in detail
pub const STARSHIP_DISPLAY_LIMIT: usize = 3;

/// Vehicles are only fetched for character ids up to this value
pub const MAX_VEHICLE_ID: u32 = 4;

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// Only the character step is counted, so this is always 1
    pub api_calls: u32,
    /// Client cache size at the end of the run
    pub cache_size: usize,
    /// Sum of the serialized sizes of every payload fetched by this run
    pub total_bytes: usize,
    /// Client error count at the end of the run
    pub errors: u64,
}

/// Runs the report for `character_id`, writing lines to `sink`.
///
/// Lines produced before a failing step stay in the sink.
pub async fn run_report(
    client: &SwapiClient,
    character_id: u32,
    debug_mode: bool,
    sink: &mut dyn ReportSink,
) -> Result<ReportSummary, ReportError> {
    let mut total_bytes = 0;
    let mut api_calls = 0;

    if debug_mode {
        debug!("Starting data fetch...");
    }
    api_calls += 1;

    // == Character ==
    let endpoint = format!("people/{}", character_id);
    let character: Character = fetch_decoded(client, &endpoint, &mut total_bytes).await?;
    sink.line(format!("Character: {}", character.name));
    sink.line(format!("Height: {}", character.height));
    sink.line(format!("Mass: {}", character.mass));
    sink.line(format!("Birthday: {}", character.birth_year));
    if !character.films.is_empty() {
        sink.line(format!("Appears in {} films", character.films.len()));
    }

    // == Starships ==
    let starships: Page<Starship> =
        fetch_decoded(client, "starships/?page=1", &mut total_bytes).await?;
    sink.line(format!("Total Starships: {}", starships.count));
    for (i, ship) in starships
        .results
        .iter()
        .take(STARSHIP_DISPLAY_LIMIT)
        .enumerate()
    {
        sink.line(format!("Starship {}:", i + 1));
        sink.line(format!("Name: {}", ship.name));
        sink.line(format!("Model: {}", ship.model));
        sink.line(format!("Manufacturer: {}", ship.manufacturer));
        sink.line(format!("Cost: {}", ship.cost_label()));
        sink.line(format!("Speed: {}", ship.max_atmosphering_speed));
        sink.line(format!("Hyperdrive Rating: {}", ship.hyperdrive_rating));
        if !ship.pilots.is_empty() {
            sink.line(format!("Pilots: {}", ship.pilots.len()));
        }
    }

    // == Planets ==
    let planets: Page<Planet> = fetch_decoded(client, "planets/?page=1", &mut total_bytes).await?;
    sink.line("Large populated planets:".to_string());
    for planet in large_planets(&planets.results) {
        sink.line(format!(
            "{} - Pop: {} - Diameter: {} - Climate: {}",
            planet.name, planet.population, planet.diameter, planet.climate
        ));
        if !planet.films.is_empty() {
            sink.line(format!("  Appears in {} films", planet.films.len()));
        }
    }

    // == Films ==
    let films: Page<Film> = fetch_decoded(client, "films/", &mut total_bytes).await?;
    sink.line("Star Wars Films in chronological order:".to_string());
    for (i, film) in films_by_release(films.results).iter().enumerate() {
        sink.line(format!("{}. {} ({})", i + 1, film.title, film.release_date));
        sink.line(format!("   Director: {}", film.director));
        sink.line(format!("   Producer: {}", film.producer));
        sink.line(format!("   Characters: {}", film.characters.len()));
        sink.line(format!("   Planets: {}", film.planets.len()));
    }

    // == Vehicle ==
    if character_id <= MAX_VEHICLE_ID {
        let endpoint = format!("vehicles/{}", character_id);
        let vehicle: Vehicle = fetch_decoded(client, &endpoint, &mut total_bytes).await?;
        sink.line("Featured Vehicle:".to_string());
        sink.line(format!("Name: {}", vehicle.name));
        sink.line(format!("Model: {}", vehicle.model));
        sink.line(format!("Manufacturer: {}", vehicle.manufacturer));
        sink.line(format!("Cost: {} credits", vehicle.cost_in_credits));
        sink.line(format!("Length: {}", vehicle.length));
        sink.line(format!("Crew Required: {}", vehicle.crew));
        sink.line(format!("Passengers: {}", vehicle.passengers));
    }

    let stats = client.get_stats().await;
    let summary = ReportSummary {
        api_calls,
        cache_size: stats.cache_size,
        total_bytes,
        errors: stats.errors,
    };

    if debug_mode {
        sink.line("Stats:".to_string());
        sink.line(format!("API Calls: {}", summary.api_calls));
        sink.line(format!("Cache Size: {}", summary.cache_size));
        sink.line(format!("Total Data Size: {} bytes", summary.total_bytes));
        sink.line(format!("Error Count: {}", summary.errors));
    }

    Ok(summary)
}

/// Runs the report into the tracing sink and logs a failure instead of
/// returning it.
pub async fn run_report_logged(
    client: &SwapiClient,
    character_id: u32,
    debug_mode: bool,
) -> Option<ReportSummary> {
    let mut sink = TracingSink;
    match run_report(client, character_id, debug_mode, &mut sink).await {
        Ok(summary) => Some(summary),
        Err(err) => {
            error!("Error: {}", err);
            None
        }
    }
}

/// Fetches `endpoint`, adds its serialized size to `total_bytes` and decodes it.
async fn fetch_decoded<T: DeserializeOwned>(
    client: &SwapiClient,
    endpoint: &str,
    total_bytes: &mut usize,
) -> Result<T, ReportError> {
    let value: Value = client.fetch(endpoint).await?;
    *total_bytes += serialized_len(&value);
    serde_json::from_value(value).map_err(|source| ReportError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}
