//! Coordinates, great-circle distance, and car-leg duration estimation.
//!
//! Car rentals in the catalog carry no travel time, so the loader estimates
//! one from the great-circle distance between the pickup and drop-off
//! cities at a fixed average speed. Missing coordinates degrade to a safe
//! default duration rather than failing the solve.

use std::collections::HashMap;

use log::debug;

use crate::duration::format_minutes;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Ratio of road distance to straight-line distance.
const ROAD_CORRECTION: f64 = 1.3;

/// Assumed average driving speed in km/h for car-leg estimation.
pub const DEFAULT_AVG_SPEED_KMH: f64 = 85.0;

/// Fallback car-leg duration in minutes when coordinates are unknown.
pub const DEFAULT_CAR_MINUTES: u32 = 240;

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

impl Coord {
    /// Creates a coordinate from latitude and longitude.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Great-circle distance between two coordinates via the haversine
/// formula, in kilometers.
///
/// # Examples
///
/// ```
/// use u_itinerary::geo::{haversine_km, Coord};
///
/// let gru = Coord::new(-23.4356, -46.4731);
/// let scl = Coord::new(-33.3930, -70.7858);
/// let d = haversine_km(gru, scl);
/// assert!((d - 2580.0).abs() < 50.0);
/// ```
pub fn haversine_km(a: Coord, b: Coord) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Approximate road distance in kilometers: great-circle distance scaled
/// by a fixed correction factor for road curvature.
pub fn estimate_road_distance(a: Coord, b: Coord) -> f64 {
    haversine_km(a, b) * ROAD_CORRECTION
}

/// Estimates driving duration between two optionally-known coordinates.
///
/// Returns `(display_text, minutes)`. When either coordinate is missing
/// the fixed default (`"4h 00m"`, 240) is returned so that a gap in the
/// reference table never fails a load.
///
/// # Examples
///
/// ```
/// use u_itinerary::geo::{estimate_car_duration, Coord, DEFAULT_CAR_MINUTES};
///
/// let (text, minutes) = estimate_car_duration(None, Some(Coord::new(0.0, 0.0)), 85.0);
/// assert_eq!(minutes, DEFAULT_CAR_MINUTES);
/// assert_eq!(text, "4h 00m");
/// ```
pub fn estimate_car_duration(
    origin: Option<Coord>,
    dest: Option<Coord>,
    avg_speed_kmh: f64,
) -> (String, u32) {
    match (origin, dest) {
        (Some(a), Some(b)) if avg_speed_kmh > 0.0 => {
            let km = haversine_km(a, b);
            let minutes = (km / avg_speed_kmh * 60.0) as u32;
            (format_minutes(minutes), minutes)
        }
        _ => (format_minutes(DEFAULT_CAR_MINUTES), DEFAULT_CAR_MINUTES),
    }
}

/// Lookup table from city/airport code to coordinates.
///
/// Consumed by the loader when estimating car-leg durations. Absent
/// entries degrade to the fixed default duration.
#[derive(Debug, Clone, Default)]
pub struct CityCoords {
    coords: HashMap<String, Coord>,
}

impl CityCoords {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the coordinate for a city code.
    pub fn insert(&mut self, code: &str, lat: f64, lon: f64) {
        self.coords.insert(code.to_string(), Coord::new(lat, lon));
    }

    /// Looks up the coordinate for a city code.
    pub fn get(&self, code: &str) -> Option<Coord> {
        self.coords.get(code).copied()
    }

    /// Number of cities in the table.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Estimates a car duration between two city codes.
    ///
    /// Logs a breadcrumb when a code is missing from the table.
    pub fn car_duration(&self, origin: &str, dest: &str) -> (String, u32) {
        let a = self.get(origin);
        let b = self.get(dest);
        if a.is_none() || b.is_none() {
            debug!("missing coordinates for {origin} or {dest}, using default car duration");
        }
        estimate_car_duration(a, b, DEFAULT_AVG_SPEED_KMH)
    }
}
