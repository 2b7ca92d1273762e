//! The external data contract (§6): typed request/response boundary types
//! only — no HTTP handler, router, or persistence layer (those are
//! explicit Non-goals; see `SPEC_FULL.md` §3).
//!
//! `serde` derives here are ambient, the way every routing-library
//! consumer in this corpus exposes its boundary types, not "the HTTP
//! surface" itself.

use crate::coordinate::Coordinate;
use crate::individual::Individual;
use serde::{Deserialize, Serialize};

/// One household location. `id` is the UID consumers use to identify a
/// stop; `depot` marks the fixed start/end point; `demand` feeds the
/// downstream scheduler's per-stop duration, not the solver itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub depot: bool,
    #[serde(default)]
    pub demand: u32,
}

/// The solve request as received from the HTTP handler. `start_time` and
/// `end_time` bound the downstream schedule; the solver itself never reads
/// them (spec.md §6).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    pub locations: Vec<Location>,
    pub workers: usize,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
}

impl SolveRequest {
    /// Reorders `locations` so the first entry with `depot: true` is at
    /// index 0; if none is marked, index 0 is used by convention.
    pub fn ordered_locations(&self) -> Vec<Location> {
        let mut locations = self.locations.clone();
        if let Some(depot_pos) = locations.iter().position(|l| l.depot) {
            locations.swap(0, depot_pos);
        }
        locations
    }

    /// The ordered locations' coordinates, ready for `Problem::new`.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.ordered_locations()
            .iter()
            .map(|location| Coordinate::new(location.latitude, location.longitude))
            .collect()
    }
}

/// The solve response handed back to the HTTP handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResponse {
    /// One entry per worker; each is an ordered list of location UIDs with
    /// the depot's UID first and last.
    pub routes: Vec<Vec<u64>>,
    pub fitness: f64,
}

/// Decodes an individual's chromosome (customer indices into `locations`)
/// into the external route shape, anchoring every part with the depot's
/// UID. `locations` must be in the same order the `Problem` the individual
/// was solved against was built from (i.e. already passed through
/// [`SolveRequest::ordered_locations`]).
pub fn decode_tours(individual: &Individual, locations: &[Location]) -> SolveResponse {
    let depot_uid = locations[0].id;
    let routes = individual
        .parts()
        .iter()
        .map(|part| {
            let mut route = Vec::with_capacity(part.len() + 2);
            route.push(depot_uid);
            route.extend(part.iter().map(|&idx| locations[idx].id));
            route.push(depot_uid);
            route
        })
        .collect();
    SolveResponse {
        routes,
        fitness: individual.fitness_or_infinity(),
    }
}
