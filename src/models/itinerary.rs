//! Candidate itinerary: an ordered chain of transport legs.

use serde::{Deserialize, Serialize};

use super::{Mode, TransportOption};

/// An ordered sequence of legs where each leg departs from the city the
/// previous one arrived at, plus derived totals.
///
/// Itineraries are created and discarded within a single solve. They are
/// not required to return to the trip origin (open tours are valid when no
/// closed tour exists).
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{CandidateItinerary, Flight, TransportOption};
///
/// let mut out = Flight::one_way("GRU", "SCL", "2026-06-14", "4h 0m", 500.0);
/// out.duration_minutes = 240;
/// let mut back = Flight::one_way("SCL", "GRU", "2026-06-20", "4h 0m", 400.0);
/// back.duration_minutes = 240;
///
/// let it = CandidateItinerary::from_legs(vec![
///     TransportOption::Flight(out),
///     TransportOption::Flight(back),
/// ]);
/// assert_eq!(it.total_cost(), 900.0);
/// assert_eq!(it.total_time(), 480);
/// assert!(it.is_chained());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateItinerary {
    legs: Vec<TransportOption>,
    total_cost: f64,
    total_time: u32,
}

impl CandidateItinerary {
    /// Builds an itinerary from legs, computing cost and time totals.
    pub fn from_legs(legs: Vec<TransportOption>) -> Self {
        let total_cost = legs.iter().map(|l| l.price()).sum();
        let total_time = legs.iter().map(|l| l.duration_minutes()).sum();
        Self {
            legs,
            total_cost,
            total_time,
        }
    }

    /// The ordered legs of this itinerary.
    pub fn legs(&self) -> &[TransportOption] {
        &self.legs
    }

    /// Number of legs.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Returns `true` if the itinerary has no legs.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Sum of leg prices in currency units.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Sum of leg durations in minutes.
    pub fn total_time(&self) -> u32 {
        self.total_time
    }

    /// City the itinerary departs from, if any legs exist.
    pub fn departure_city(&self) -> Option<&str> {
        self.legs.first().map(|l| l.origin())
    }

    /// City the itinerary ends in, if any legs exist.
    pub fn final_city(&self) -> Option<&str> {
        self.legs.last().map(|l| l.destination())
    }

    /// Returns `true` if every leg departs from the previous leg's
    /// destination.
    pub fn is_chained(&self) -> bool {
        self.legs
            .windows(2)
            .all(|w| w[0].destination() == w[1].origin())
    }

    /// Returns `true` if the last leg arrives back at the first leg's
    /// origin (a closed tour).
    pub fn is_closed(&self) -> bool {
        match (self.departure_city(), self.final_city()) {
            (Some(start), Some(end)) => start == end,
            _ => false,
        }
    }

    /// Transport mode of each leg in order, e.g. flight/flight/car.
    pub fn mode_pattern(&self) -> Vec<Mode> {
        self.legs.iter().map(|l| l.mode()).collect()
    }
}
