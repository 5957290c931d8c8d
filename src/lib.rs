//! # u-itinerary
//!
//! Multi-city trip optimization library: assembles flight and car rental
//! options into ranked itineraries under a budget cap, trading cost
//! against travel time through a single preference weight.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Flight, CarLeg, TransportOption, OptimizationRequest, CandidateItinerary)
//! - [`duration`] — Duration text parsing and formatting ("6h 20m")
//! - [`geo`] — Haversine distances and car travel time estimation
//! - [`catalog`] — Option sourcing and the normalized per-request snapshot
//! - [`topology`] — Destination ordering search over the connectivity graph
//! - [`generate`] — Per-slot combinatorial candidate generation
//! - [`pareto`] — Dedup, budget filter, Pareto front, and preference ranking
//! - [`sequence`] — Leg chaining and destination coverage validation
//! - [`ga`] — Evolutionary fallback search (NSGA-II over leg selections)
//! - [`exact`] — Branch-and-bound optimum over closed tours
//! - [`engine`] — The solve pipeline tying the stages together
//!
//! ## Quick start
//!
//! ```
//! use u_itinerary::catalog::InMemoryCatalog;
//! use u_itinerary::engine::{Engine, EngineConfig};
//! use u_itinerary::geo::CityCoords;
//! use u_itinerary::models::{Flight, OptimizationRequest};
//!
//! let mut catalog = InMemoryCatalog::new();
//! catalog.add_flight(Flight::one_way("GRU", "SCL", "2026-09-01", "4h 10m", 520.0));
//! catalog.add_flight(Flight::one_way("SCL", "GRU", "2026-09-08", "3h 55m", 480.0));
//!
//! let coords = CityCoords::new();
//! let config = EngineConfig::default().with_ga_fallback(false);
//! let engine = Engine::new(&catalog, &coords).with_config(config);
//! let request = OptimizationRequest::new("GRU", &["SCL"], 1500.0, 0.5);
//!
//! let itineraries = engine.solve(&request).unwrap();
//! assert_eq!(itineraries[0].final_city(), Some("GRU"));
//! ```

pub mod catalog;
pub mod duration;
pub mod engine;
pub mod exact;
pub mod ga;
pub mod generate;
pub mod geo;
pub mod models;
pub mod pareto;
pub mod sequence;
pub mod topology;
