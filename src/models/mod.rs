//! Domain model types for itinerary optimization.
//!
//! Provides the core abstractions: transport options (flights and car
//! rentals) as read-only priced legs, the optimization request, and the
//! candidate itinerary with its derived cost/time totals.

mod itinerary;
mod option;
mod request;

pub use itinerary::CandidateItinerary;
pub use option::{CarLeg, Flight, Mode, TransportOption};
pub use request::OptimizationRequest;
