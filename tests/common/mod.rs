//! Shared fixtures: an in-memory SWAPI that records every request.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use swapi_demo::client::{RawResponse, Transport};
use swapi_demo::error::{FetchError, Result};
use swapi_demo::{Config, SwapiClient};

pub const BASE_URL: &str = "http://swapi.test/api/";

/// In-memory upstream keyed by endpoint.
#[derive(Default)]
pub struct FakeSwapi {
    routes: HashMap<String, RawResponse>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl FakeSwapi {
    /// Upstream serving the standard fixture set.
    pub fn standard() -> Self {
        let mut fake = Self::default();
        fake.json("people/1", luke());
        fake.json("people/5", leia());
        fake.json("starships/?page=1", starships_page());
        fake.json("planets/?page=1", planets_page());
        fake.json("films/", films_page());
        fake.json("vehicles/1", speeder());
        fake
    }

    pub fn json(&mut self, endpoint: &str, body: Value) -> &mut Self {
        self.raw(endpoint, 200, &body.to_string())
    }

    pub fn raw(&mut self, endpoint: &str, status: u16, body: &str) -> &mut Self {
        self.routes
            .insert(endpoint.to_string(), RawResponse::new(status, body));
        self
    }

    pub fn delay(&mut self, endpoint: &str, delay: Duration) -> &mut Self {
        self.delays.insert(endpoint.to_string(), delay);
        self
    }

    /// Endpoints requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, endpoint: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == endpoint).count()
    }
}

#[async_trait]
impl Transport for FakeSwapi {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        let endpoint = url.strip_prefix(BASE_URL).unwrap_or(url).to_string();
        self.calls.lock().unwrap().push(endpoint.clone());

        let delay = self.delays.get(&endpoint).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.routes
            .get(&endpoint)
            .cloned()
            .ok_or_else(|| FetchError::transport(format!("connection refused: {}", url)))
    }
}

pub fn test_config() -> Config {
    Config {
        base_url: BASE_URL.to_string(),
        timeout_ms: 200,
        ..Config::default()
    }
}

pub fn client_for(fake: Arc<FakeSwapi>) -> SwapiClient {
    SwapiClient::new(&test_config(), fake)
}

// == Fixtures ==

pub fn luke() -> Value {
    json!({
        "name": "Luke Skywalker",
        "height": "172",
        "mass": "77",
        "birth_year": "19BBY",
        "films": ["f1", "f2", "f3", "f6"]
    })
}

pub fn leia() -> Value {
    json!({
        "name": "Leia Organa",
        "height": "150",
        "mass": "49",
        "birth_year": "19BBY",
        "films": []
    })
}

pub fn starships_page() -> Value {
    let ship = |name: &str, cost: &str, pilots: Vec<&str>| {
        json!({
            "name": name,
            "model": format!("{} model", name),
            "manufacturer": "Corellian Engineering Corporation",
            "cost_in_credits": cost,
            "max_atmosphering_speed": "950",
            "hyperdrive_rating": "2.0",
            "pilots": pilots
        })
    };
    json!({
        "count": 36,
        "results": [
            ship("CR90 corvette", "3500000", vec![]),
            ship("Star Destroyer", "150000000", vec!["p1"]),
            ship("Sentinel-class landing craft", "unknown", vec![]),
            ship("Death Star", "1000000000000", vec![]),
        ]
    })
}

pub fn planets_page() -> Value {
    json!({
        "count": 60,
        "results": [
            {"name": "Coruscant", "population": "1000000001", "diameter": "10001", "climate": "temperate", "films": ["f1", "f2"]},
            {"name": "Mystery", "population": "unknown", "diameter": "50000", "climate": "frozen", "films": []},
            {"name": "Hamlet", "population": "500", "diameter": "10001", "climate": "arid", "films": []}
        ]
    })
}

pub fn films_page() -> Value {
    let film = |title: &str, date: &str| {
        json!({
            "title": title,
            "release_date": date,
            "director": "George Lucas",
            "producer": "Rick McCallum",
            "characters": ["c1", "c2"],
            "planets": ["p1"]
        })
    };
    json!({
        "count": 3,
        "results": [
            film("The Phantom Menace", "1999-05-19"),
            film("A New Hope", "1977-05-25"),
            film("The Empire Strikes Back", "1980-05-21"),
        ]
    })
}

pub fn speeder() -> Value {
    json!({
        "name": "Sand Crawler",
        "model": "Digger Crawler",
        "manufacturer": "Corellia Mining Corporation",
        "cost_in_credits": "150000",
        "length": "36.8",
        "crew": "46",
        "passengers": "30"
    })
}
