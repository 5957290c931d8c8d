//! The external-store seam: where transport options come from.

use crate::models::{CarLeg, Flight};

/// Supplies raw flight and car-rental records filtered by a city
/// allow-list.
///
/// This is the boundary to the external catalog (a scraped database in the
/// reference deployment). Implementations must return only records whose
/// endpoints both lie within `cities`, and must not be mutated by the
/// engine — the core treats every record as a read-only fact.
///
/// Prices are numeric and currency-agnostic; an implementation backed by
/// scraped text should map malformed prices to `0.0` rather than dropping
/// or failing records.
pub trait OptionSource {
    /// Flights whose origin and destination are both in `cities`.
    fn flights(&self, cities: &[String]) -> Vec<Flight>;

    /// Car legs whose pickup and drop-off are both in `cities`.
    fn car_legs(&self, cities: &[String]) -> Vec<CarLeg>;
}

/// An in-memory option catalog.
///
/// The reference [`OptionSource`] implementation, suitable for tests and
/// for callers that load records from storage themselves.
///
/// # Examples
///
/// ```
/// use u_itinerary::catalog::{InMemoryCatalog, OptionSource};
/// use u_itinerary::models::Flight;
///
/// let mut catalog = InMemoryCatalog::new();
/// catalog.add_flight(Flight::one_way("GRU", "SCL", "2026-06-14", "4h 0m", 500.0));
/// catalog.add_flight(Flight::one_way("GRU", "LIM", "2026-06-14", "5h 0m", 700.0));
///
/// let cities = vec!["GRU".to_string(), "SCL".to_string()];
/// assert_eq!(catalog.flights(&cities).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    flights: Vec<Flight>,
    car_legs: Vec<CarLeg>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a flight record.
    pub fn add_flight(&mut self, flight: Flight) {
        self.flights.push(flight);
    }

    /// Adds a car-rental record.
    pub fn add_car_leg(&mut self, car: CarLeg) {
        self.car_legs.push(car);
    }

    /// Total number of flight records.
    pub fn num_flights(&self) -> usize {
        self.flights.len()
    }

    /// Total number of car-rental records.
    pub fn num_car_legs(&self) -> usize {
        self.car_legs.len()
    }
}

impl OptionSource for InMemoryCatalog {
    fn flights(&self, cities: &[String]) -> Vec<Flight> {
        self.flights
            .iter()
            .filter(|f| {
                cities.iter().any(|c| c == &f.origin) && cities.iter().any(|c| c == &f.destination)
            })
            .cloned()
            .collect()
    }

    fn car_legs(&self, cities: &[String]) -> Vec<CarLeg> {
        self.car_legs
            .iter()
            .filter(|c| {
                cities.iter().any(|x| x == &c.pickup) && cities.iter().any(|x| x == &c.dropoff)
            })
            .cloned()
            .collect()
    }
}
