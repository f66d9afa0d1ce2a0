//! Greedy nearest-neighbour visiting order for a batch of delivery stops.
//!
//! The walk starts at the first stop in input order and repeatedly moves to
//! the closest stop that has not been visited yet. Ties go to the stop that
//! comes first in the input. The result is a permutation of the input; it is
//! a heuristic and carries no optimality guarantee.

mod heuristic;

pub use heuristic::address_distance;

use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use tracing::debug;

use crate::shared::geo::Coordinate;

/// Anything that can be placed on a delivery route.
pub trait Waypoint {
    /// A valid coordinate, `None` when either part is missing or not finite.
    fn coordinate(&self) -> Option<Coordinate>;
    fn address(&self) -> &str;
}

/// One delivery destination.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub customer_name: String,
    pub delivery_address: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub status: String,
}

impl Waypoint for Stop {
    fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::try_new(self.latitude, self.longitude)
    }

    fn address(&self) -> &str {
        &self.delivery_address
    }
}

/// What to do when a pair of stops cannot be measured on the globe.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Address length difference plus first character code difference.
    #[default]
    Address,
    /// Treat the pair as infinitely far apart, pushing such stops to the end.
    Unreachable,
}

impl Display for Fallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fallback::Address => f.write_str("address"),
            Fallback::Unreachable => f.write_str("unreachable"),
        }
    }
}

impl FromStr for Fallback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "address" => Ok(Fallback::Address),
            "unreachable" => Ok(Fallback::Unreachable),
            other => Err(format!("unknown fallback {other:?}")),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Sequencer {
    fallback: Fallback,
}

impl Sequencer {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Distance in kilometres when both stops have coordinates,
    /// otherwise whatever the configured [`Fallback`] yields.
    pub fn distance<A, B>(&self, a: &A, b: &B) -> f64
    where
        A: Waypoint + ?Sized,
        B: Waypoint + ?Sized,
    {
        match (a.coordinate(), b.coordinate()) {
            (Some(from), Some(to)) => from.haversine_distance(&to).as_kilometers(),
            _ => match self.fallback {
                Fallback::Address => address_distance(a.address(), b.address()),
                Fallback::Unreachable => f64::INFINITY,
            },
        }
    }

    /// Visiting order as indexes into `stops`.
    pub fn order<T: Waypoint>(&self, stops: &[T]) -> Vec<usize> {
        if stops.is_empty() {
            return Vec::new();
        }

        let mut route = Vec::with_capacity(stops.len());
        let mut unvisited: Vec<usize> = (1..stops.len()).collect();
        let mut current = 0;
        route.push(current);

        while !unvisited.is_empty() {
            let mut nearest = 0;
            let mut min_distance = self.step(&stops[current], &stops[unvisited[0]]);
            for (position, &candidate) in unvisited.iter().enumerate().skip(1) {
                let distance = self.step(&stops[current], &stops[candidate]);
                // Strict comparison keeps the first minimum.
                if distance < min_distance {
                    min_distance = distance;
                    nearest = position;
                }
            }
            current = unvisited.remove(nearest);
            route.push(current);
        }

        debug!("Sequenced {} stops ({} fallback)", route.len(), self.fallback);
        route
    }

    /// Distance used for selection, NaN ranks as unreachable.
    fn step<T: Waypoint>(&self, from: &T, to: &T) -> f64 {
        let distance = self.distance(from, to);
        if distance.is_nan() {
            f64::INFINITY
        } else {
            distance
        }
    }

    /// Copies `stops` into visiting order. The input is left untouched.
    pub fn sequence<T: Waypoint + Clone>(&self, stops: &[T]) -> Vec<T> {
        self.order(stops)
            .into_iter()
            .map(|index| stops[index].clone())
            .collect()
    }
}

/// [`Sequencer::sequence`] with the default fallback.
pub fn sequence<T: Waypoint + Clone>(stops: &[T]) -> Vec<T> {
    Sequencer::new().sequence(stops)
}

/// [`Sequencer::distance`] with the default fallback.
pub fn distance<A, B>(a: &A, b: &B) -> f64
where
    A: Waypoint + ?Sized,
    B: Waypoint + ?Sized,
{
    Sequencer::new().distance(a, b)
}
