//! Transport option records: flights and car rentals.

use serde::{Deserialize, Serialize};

/// Transport mode of a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Scheduled flight.
    Flight,
    /// Car rental driven between two cities.
    Car,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Flight => write!(f, "flight"),
            Mode::Car => write!(f, "car"),
        }
    }
}

/// A priced flight between two cities, optionally round trip.
///
/// Raw records carry free-text durations as scraped; the catalog snapshot
/// fills `duration_minutes` and the display `duration` when loading
/// (see [`Snapshot`](crate::catalog::Snapshot)).
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Flight;
///
/// let f = Flight::one_way("GRU", "SCL", "2026-06-14", "6h 20m", 520.0);
/// assert_eq!(f.origin, "GRU");
/// assert!(f.return_departure.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Departure city/airport code.
    pub origin: String,
    /// Arrival city/airport code.
    pub destination: String,
    /// Outbound departure date.
    pub outbound_departure: String,
    /// Outbound arrival date.
    #[serde(default)]
    pub outbound_arrival: String,
    /// Outbound duration as scraped, e.g. `"6h 20m"`.
    pub outbound_duration: String,
    /// Number of outbound stops.
    #[serde(default)]
    pub outbound_stops: u32,
    /// Return departure date, if this is a round trip.
    #[serde(default)]
    pub return_departure: Option<String>,
    /// Return arrival date, if this is a round trip.
    #[serde(default)]
    pub return_arrival: Option<String>,
    /// Return duration text, if this is a round trip.
    #[serde(default)]
    pub return_duration: Option<String>,
    /// Number of return stops, if this is a round trip.
    #[serde(default)]
    pub return_stops: Option<u32>,
    /// Operating carrier.
    pub carrier: String,
    /// Price in currency units (currency-agnostic).
    pub price: f64,
    /// Total duration in minutes (outbound + return). Filled at load.
    #[serde(default)]
    pub duration_minutes: u32,
    /// Display duration combining outbound and return text. Filled at load.
    #[serde(default)]
    pub duration: String,
}

impl Flight {
    /// Creates a one-way flight with the fields the optimizer needs.
    pub fn one_way(
        origin: &str,
        destination: &str,
        departure: &str,
        duration_text: &str,
        price: f64,
    ) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            outbound_departure: departure.to_string(),
            outbound_arrival: String::new(),
            outbound_duration: duration_text.to_string(),
            outbound_stops: 0,
            return_departure: None,
            return_arrival: None,
            return_duration: None,
            return_stops: None,
            carrier: String::new(),
            price,
            duration_minutes: 0,
            duration: String::new(),
        }
    }

    /// Adds a return segment, turning this into a round trip.
    pub fn with_return(mut self, departure: &str, duration_text: &str) -> Self {
        self.return_departure = Some(departure.to_string());
        self.return_duration = Some(duration_text.to_string());
        self
    }

    /// Sets the operating carrier.
    pub fn with_carrier(mut self, carrier: &str) -> Self {
        self.carrier = carrier.to_string();
        self
    }

    /// Returns `true` if this flight has a return segment.
    pub fn is_round_trip(&self) -> bool {
        self.return_duration.is_some()
    }
}

/// A car rental picked up in one city and dropped off in another.
///
/// `duration_minutes` and the display `duration` are estimated from
/// great-circle distance at load time (see [`geo`](crate::geo)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarLeg {
    /// Pickup city/airport code.
    pub pickup: String,
    /// Drop-off city/airport code.
    pub dropoff: String,
    /// Rental period start date.
    pub pickup_date: String,
    /// Rental period end date.
    #[serde(default)]
    pub dropoff_date: String,
    /// Vehicle category, e.g. `"Compact"`.
    #[serde(default)]
    pub category: String,
    /// Rental company.
    pub provider: String,
    /// Price in currency units (currency-agnostic).
    pub price: f64,
    /// Estimated driving duration in minutes. Filled at load.
    #[serde(default)]
    pub duration_minutes: u32,
    /// Display duration text. Filled at load.
    #[serde(default)]
    pub duration: String,
}

impl CarLeg {
    /// Creates a car leg with the fields the optimizer needs.
    pub fn new(pickup: &str, dropoff: &str, pickup_date: &str, provider: &str, price: f64) -> Self {
        Self {
            pickup: pickup.to_string(),
            dropoff: dropoff.to_string(),
            pickup_date: pickup_date.to_string(),
            dropoff_date: String::new(),
            category: String::new(),
            provider: provider.to_string(),
            price,
            duration_minutes: 0,
            duration: String::new(),
        }
    }

    /// Sets the vehicle category.
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }
}

/// One priced, timed leg between two cities — either a flight or a car
/// rental. Read-only once loaded; the core never mutates these.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Flight, Mode, TransportOption};
///
/// let opt = TransportOption::Flight(Flight::one_way("GRU", "SCL", "2026-06-14", "4h 0m", 500.0));
/// assert_eq!(opt.mode(), Mode::Flight);
/// assert_eq!(opt.origin(), "GRU");
/// assert_eq!(opt.destination(), "SCL");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransportOption {
    /// A flight leg.
    Flight(Flight),
    /// A car rental leg.
    Car(CarLeg),
}

impl TransportOption {
    /// Transport mode of this leg.
    pub fn mode(&self) -> Mode {
        match self {
            TransportOption::Flight(_) => Mode::Flight,
            TransportOption::Car(_) => Mode::Car,
        }
    }

    /// City the leg departs from.
    pub fn origin(&self) -> &str {
        match self {
            TransportOption::Flight(f) => &f.origin,
            TransportOption::Car(c) => &c.pickup,
        }
    }

    /// City the leg arrives at.
    pub fn destination(&self) -> &str {
        match self {
            TransportOption::Flight(f) => &f.destination,
            TransportOption::Car(c) => &c.dropoff,
        }
    }

    /// Price in currency units.
    pub fn price(&self) -> f64 {
        match self {
            TransportOption::Flight(f) => f.price,
            TransportOption::Car(c) => c.price,
        }
    }

    /// Normalized duration in minutes.
    pub fn duration_minutes(&self) -> u32 {
        match self {
            TransportOption::Flight(f) => f.duration_minutes,
            TransportOption::Car(c) => c.duration_minutes,
        }
    }

    /// Display-friendly duration text.
    pub fn duration_text(&self) -> &str {
        match self {
            TransportOption::Flight(f) => &f.duration,
            TransportOption::Car(c) => &c.duration,
        }
    }

    /// Carrier for flights, rental company for car legs.
    pub fn provider(&self) -> &str {
        match self {
            TransportOption::Flight(f) => &f.carrier,
            TransportOption::Car(c) => &c.provider,
        }
    }

    /// Travel date: outbound departure for flights, pickup date for cars.
    pub fn travel_date(&self) -> &str {
        match self {
            TransportOption::Flight(f) => &f.outbound_departure,
            TransportOption::Car(c) => &c.pickup_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_way_flight() {
        let f = Flight::one_way("GRU", "SCL", "2026-06-14", "4h 0m", 500.0);
        assert_eq!(f.origin, "GRU");
        assert_eq!(f.destination, "SCL");
        assert!(!f.is_round_trip());
        assert_eq!(f.price, 500.0);
    }

    #[test]
    fn test_round_trip_flight() {
        let f = Flight::one_way("GRU", "SCL", "2026-06-14", "4h 0m", 900.0)
            .with_return("2026-06-20", "4h 10m")
            .with_carrier("LATAM");
        assert!(f.is_round_trip());
        assert_eq!(f.return_duration.as_deref(), Some("4h 10m"));
        assert_eq!(f.carrier, "LATAM");
    }

    #[test]
    fn test_car_leg() {
        let c = CarLeg::new("SCL", "MDZ", "2026-06-15", "Localiza", 180.0).with_category("SUV");
        assert_eq!(c.pickup, "SCL");
        assert_eq!(c.dropoff, "MDZ");
        assert_eq!(c.category, "SUV");
    }

    #[test]
    fn test_option_accessors_flight() {
        let mut f = Flight::one_way("GRU", "SCL", "2026-06-14", "4h 0m", 500.0);
        f.duration_minutes = 240;
        f.carrier = "GOL".to_string();
        let opt = TransportOption::Flight(f);
        assert_eq!(opt.mode(), Mode::Flight);
        assert_eq!(opt.origin(), "GRU");
        assert_eq!(opt.destination(), "SCL");
        assert_eq!(opt.duration_minutes(), 240);
        assert_eq!(opt.provider(), "GOL");
        assert_eq!(opt.travel_date(), "2026-06-14");
    }

    #[test]
    fn test_option_accessors_car() {
        let mut c = CarLeg::new("SCL", "MDZ", "2026-06-15", "Hertz", 120.0);
        c.duration_minutes = 300;
        let opt = TransportOption::Car(c);
        assert_eq!(opt.mode(), Mode::Car);
        assert_eq!(opt.origin(), "SCL");
        assert_eq!(opt.destination(), "MDZ");
        assert_eq!(opt.provider(), "Hertz");
        assert_eq!(opt.travel_date(), "2026-06-15");
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Flight.to_string(), "flight");
        assert_eq!(Mode::Car.to_string(), "car");
    }
}
