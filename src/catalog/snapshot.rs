//! Per-solve option snapshot: filtered, normalized, read-only.

use std::collections::HashSet;

use log::debug;

use crate::duration::parse_duration;
use crate::geo::CityCoords;
use crate::models::{OptimizationRequest, TransportOption};

use super::OptionSource;

/// The transport options relevant to one optimization request, with
/// normalized durations.
///
/// Built once at the start of a solve and never mutated afterwards.
/// Flights come first in [`options`](Self::options), in source order,
/// followed by car legs — the evolutionary solver relies on this stable
/// indexing for its bit encoding.
///
/// Normalization at load time:
///
/// - every flight gets `duration_minutes` (outbound + return text parsed
///   to minutes) and a display `duration` combining both texts;
/// - every car leg gets an estimated `duration_minutes` from great-circle
///   distance (see [`geo`](crate::geo)), with a fixed default when
///   coordinates are unknown.
#[derive(Debug, Clone)]
pub struct Snapshot {
    options: Vec<TransportOption>,
    num_flights: usize,
    connections: HashSet<(String, String)>,
}

impl Snapshot {
    /// Loads and normalizes all options relevant to `request`.
    pub fn load(
        source: &dyn OptionSource,
        coords: &CityCoords,
        request: &OptimizationRequest,
    ) -> Self {
        let cities = request.allowed_cities();

        let mut options = Vec::new();
        for mut flight in source.flights(&cities) {
            let outbound = parse_duration(&flight.outbound_duration);
            if outbound == 0 {
                debug!(
                    "unparseable outbound duration {:?} on {} -> {}, counting 0 minutes",
                    flight.outbound_duration, flight.origin, flight.destination
                );
            }
            let inbound = flight
                .return_duration
                .as_deref()
                .map(parse_duration)
                .unwrap_or(0);
            flight.duration_minutes = outbound + inbound;
            flight.duration = match flight.return_duration.as_deref() {
                Some(back) if !back.is_empty() => {
                    format!("{} + {}", flight.outbound_duration, back)
                }
                _ => flight.outbound_duration.clone(),
            };
            options.push(TransportOption::Flight(flight));
        }
        let num_flights = options.len();

        for mut car in source.car_legs(&cities) {
            let (text, minutes) = coords.car_duration(&car.pickup, &car.dropoff);
            car.duration = text;
            car.duration_minutes = minutes;
            options.push(TransportOption::Car(car));
        }

        let connections = options
            .iter()
            .map(|o| (o.origin().to_string(), o.destination().to_string()))
            .collect();

        debug!(
            "snapshot loaded: {} flights, {} car legs over {} cities",
            num_flights,
            options.len() - num_flights,
            cities.len()
        );

        Self {
            options,
            num_flights,
            connections,
        }
    }

    /// All options, flights first, in source order.
    pub fn options(&self) -> &[TransportOption] {
        &self.options
    }

    /// Number of flight options.
    pub fn num_flights(&self) -> usize {
        self.num_flights
    }

    /// Number of car-leg options.
    pub fn num_car_legs(&self) -> usize {
        self.options.len() - self.num_flights
    }

    /// Returns `true` if at least one option serves `from -> to`.
    pub fn is_connected(&self, from: &str, to: &str) -> bool {
        self.connections
            .contains(&(from.to_string(), to.to_string()))
    }

    /// Returns `true` if any flight arrives at `city`.
    pub fn has_flight_arriving_at(&self, city: &str) -> bool {
        self.options[..self.num_flights]
            .iter()
            .any(|o| o.destination() == city)
    }

    /// Options serving a specific city pair, in snapshot order.
    pub fn options_between(&self, from: &str, to: &str) -> Vec<&TransportOption> {
        self.options
            .iter()
            .filter(|o| o.origin() == from && o.destination() == to)
            .collect()
    }
}
