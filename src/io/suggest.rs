//! Suggestion payload parsing for the optional layout assistant.
//!
//! The assistant is an external collaborator that proposes a fixture list
//! for a room and a target mean illuminance. The engine never calls it and
//! never depends on its availability; this module only converts a response
//! payload into fixtures. A malformed response must leave the caller's state
//! untouched, so any violation yields an empty list.

use log::warn;
use serde::Deserialize;

use crate::geom::surface::Surface;
use crate::random_id;
use crate::sim::fixture::Fixture;

/// Schema of one suggested fixture as produced by the assistant.
#[derive(Debug, Deserialize)]
struct SuggestionEntry {
    name: String,
    surface: Surface,
    u: f64,
    v: f64,
    lumens: f64,
    color: String,
}

/// Parses an assistant response into fixtures, fail-soft.
///
/// Every entry must satisfy the fixture contract; one bad entry rejects the
/// whole payload rather than applying it partially. Accepted entries get
/// fresh ids and pitch 0.
pub fn parse_suggestions(json: &str) -> Vec<Fixture> {
    let entries: Vec<SuggestionEntry> = match serde_json::from_str(json) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("discarding suggestion payload: {err}");
            return Vec::new();
        }
    };

    let fixtures: Vec<Fixture> = entries
        .into_iter()
        .map(|entry| Fixture {
            id: random_id(),
            name: entry.name,
            surface: entry.surface,
            u: entry.u,
            v: entry.v,
            lumens: entry.lumens,
            color: entry.color,
            pitch: 0.0,
        })
        .collect();

    if let Some(err) = fixtures.iter().find_map(|f| f.validate().err()) {
        warn!("discarding suggestion payload: {err:#}");
        return Vec::new();
    }
    fixtures
}
