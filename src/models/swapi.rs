//! Upstream resource models
//!
//! Lenient views of the SWAPI payloads used by the report. Missing strings
//! decode as empty and missing lists as empty; only `results` on list pages
//! is mandatory.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Marker used by SWAPI for unknown numeric fields
pub const UNKNOWN: &str = "unknown";

/// One page of a list endpoint (`starships/?page=1`, `films/`, ...)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Page<T> {
    /// Total number of records across all pages
    #[serde(default)]
    pub count: u64,
    /// Records on this page
    pub results: Vec<T>,
}

/// `people/{id}`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Character {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub birth_year: String,
    pub films: Vec<String>,
}

/// Entry of `starships/`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Starship {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub max_atmosphering_speed: String,
    pub hyperdrive_rating: String,
    pub pilots: Vec<String>,
}

impl Starship {
    /// Cost with a `credits` suffix, or `unknown`.
    pub fn cost_label(&self) -> String {
        if self.cost_in_credits == UNKNOWN {
            UNKNOWN.to_string()
        } else {
            format!("{} credits", self.cost_in_credits)
        }
    }
}

/// Entry of `planets/`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Planet {
    pub name: String,
    pub population: String,
    pub diameter: String,
    pub climate: String,
    pub films: Vec<String>,
}

impl Planet {
    /// Population as a number; `None` for `unknown` or any non-numeric text.
    pub fn population_value(&self) -> Option<u64> {
        parse_count(&self.population)
    }

    /// Diameter as a number; `None` for `unknown` or any non-numeric text.
    pub fn diameter_value(&self) -> Option<u64> {
        parse_count(&self.diameter)
    }
}

/// Entry of `films/`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Film {
    pub title: String,
    pub release_date: String,
    pub director: String,
    pub producer: String,
    pub characters: Vec<String>,
    pub planets: Vec<String>,
}

impl Film {
    /// Release date as a calendar date, if it is `YYYY-MM-DD`.
    pub fn release(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.release_date.trim(), "%Y-%m-%d").ok()
    }
}

/// `vehicles/{id}`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Vehicle {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub crew: String,
    pub passengers: String,
}

fn parse_count(raw: &str) -> Option<u64> {
    if raw == UNKNOWN {
        return None;
    }
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_character_missing_fields_default() {
        let character: Character = serde_json::from_value(json!({"name": "R2-D2"})).unwrap();
        assert_eq!(character.name, "R2-D2");
        assert!(character.height.is_empty());
        assert!(character.films.is_empty());
    }

    #[test]
    fn test_page_requires_results() {
        let result = serde_json::from_value::<Page<Film>>(json!({"count": 6}));
        assert!(result.is_err());
    }

    #[test]
    fn test_page_count_defaults_to_zero() {
        let page: Page<Planet> = serde_json::from_value(json!({"results": []})).unwrap();
        assert_eq!(page.count, 0);
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_starship_cost_label() {
        let mut ship = Starship {
            cost_in_credits: "3500000".to_string(),
            ..Starship::default()
        };
        assert_eq!(ship.cost_label(), "3500000 credits");

        ship.cost_in_credits = "unknown".to_string();
        assert_eq!(ship.cost_label(), "unknown");
    }

    #[test]
    fn test_planet_unknown_is_not_zero() {
        let planet = Planet {
            population: "unknown".to_string(),
            diameter: "0".to_string(),
            ..Planet::default()
        };
        assert_eq!(planet.population_value(), None);
        assert_eq!(planet.diameter_value(), Some(0));
    }

    #[test]
    fn test_planet_non_numeric_population() {
        let planet = Planet {
            population: "lots".to_string(),
            ..Planet::default()
        };
        assert_eq!(planet.population_value(), None);
    }

    #[test]
    fn test_film_release_date() {
        let film = Film {
            release_date: "1977-05-25".to_string(),
            ..Film::default()
        };
        assert_eq!(film.release(), NaiveDate::from_ymd_opt(1977, 5, 25));

        let undated = Film::default();
        assert!(undated.release().is_none());
    }
}
