//! Evolutionary fallback search.
//!
//! - [`GaConfig`] tunes population size, operator rates, and the budget
//!   overage penalty.
//! - [`LegSelection`] is the binary chromosome over catalog options.
//! - [`rank_fronts`] / [`crowding_distances`] implement the NSGA-II
//!   ranking machinery.
//! - [`evolve`] runs the full loop and decodes the final front into
//!   itineraries.

mod chromosome;
mod config;
mod nsga;
mod solver;

pub use chromosome::LegSelection;
pub use config::GaConfig;
pub use nsga::{crowding_distances, rank_fronts, FrontRanking};
pub use solver::evolve;
