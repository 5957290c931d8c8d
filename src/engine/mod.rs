//! Itinerary optimization engine.
//!
//! [`Engine`] drives the full pipeline for one request: snapshot loading,
//! topology search, candidate generation, Pareto selection, and the
//! evolutionary fallback when too few alternatives survive. Failures are
//! reported through [`SolveError`] so callers can distinguish missing
//! data from infeasible routes from budget problems.

mod error;
mod stage;

pub use error::SolveError;
pub use stage::SolveStage;

use log::debug;

use crate::catalog::{OptionSource, Snapshot};
use crate::exact;
use crate::ga::{self, GaConfig};
use crate::generate::generate_candidates;
use crate::geo::CityCoords;
use crate::models::{CandidateItinerary, OptimizationRequest};
use crate::pareto::{self, BudgetExceeded};
use crate::topology::viable_orderings;

/// Tunables for the solve pipeline.
///
/// # Examples
///
/// ```
/// use u_itinerary::engine::EngineConfig;
///
/// let config = EngineConfig::default().with_min_candidates(5);
/// assert_eq!(config.min_candidates(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct EngineConfig {
    ga_fallback: bool,
    min_candidates: usize,
    ga: GaConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ga_fallback: true,
            min_candidates: 2,
            ga: GaConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Enables or disables the evolutionary fallback.
    pub fn with_ga_fallback(mut self, enabled: bool) -> Self {
        self.ga_fallback = enabled;
        self
    }

    /// Sets the result count below which the fallback engages.
    pub fn with_min_candidates(mut self, n: usize) -> Self {
        self.min_candidates = n;
        self
    }

    /// Replaces the fallback search configuration.
    pub fn with_ga_config(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    /// Whether the evolutionary fallback is enabled.
    pub fn ga_fallback(&self) -> bool {
        self.ga_fallback
    }

    /// Result count below which the fallback engages.
    pub fn min_candidates(&self) -> usize {
        self.min_candidates
    }

    /// Fallback search configuration.
    pub fn ga_config(&self) -> &GaConfig {
        &self.ga
    }
}

/// The optimization engine, borrowing its option source and coordinate
/// table for the lifetime of the solve calls.
pub struct Engine<'a> {
    source: &'a dyn OptionSource,
    coords: &'a CityCoords,
    config: EngineConfig,
}

impl<'a> Engine<'a> {
    /// Creates an engine with the default configuration.
    pub fn new(source: &'a dyn OptionSource, coords: &'a CityCoords) -> Self {
        Self {
            source,
            coords,
            config: EngineConfig::default(),
        }
    }

    /// Replaces the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Solves one request, returning ranked itineraries best first.
    ///
    /// The result list is never empty: shortfalls surface as
    /// [`SolveError`] variants instead.
    pub fn solve(
        &self,
        request: &OptimizationRequest,
    ) -> Result<Vec<CandidateItinerary>, SolveError> {
        debug!("stage {}: loading options", SolveStage::Loading);
        let snapshot = Snapshot::load(self.source, self.coords, request);
        if snapshot.num_flights() == 0 {
            return Err(SolveError::NoData);
        }
        // Only flights count here: a car returning to the origin does not
        // close the gap the sentinel describes.
        let return_gap = !snapshot.has_flight_arriving_at(request.origin());

        debug!("stage {}: searching orderings", SolveStage::TopologySearch);
        let topology = viable_orderings(request.origin(), request.destinations(), &snapshot);
        if topology.viable.is_empty() {
            if return_gap {
                return Err(SolveError::NoReturnPath);
            }
            return Err(SolveError::NoViableRoute {
                attempted: topology.attempted.len(),
            });
        }

        debug!("stage {}: enumerating combinations", SolveStage::Generating);
        let generation = generate_candidates(&snapshot, &topology.viable, request);
        if generation.candidates.is_empty() {
            return Err(match generation.cheapest_cost {
                Some(cheapest) if cheapest > request.budget() => SolveError::OverBudget {
                    cheapest: Some(cheapest),
                },
                _ => SolveError::NoViableRoute {
                    attempted: topology.attempted.len(),
                },
            });
        }

        let ranked = self.select(generation.candidates.clone(), request)?;
        if ranked.len() >= self.config.min_candidates || !self.config.ga_fallback {
            debug!("stage {}: {} itineraries", SolveStage::Done, ranked.len());
            return Ok(ranked);
        }

        debug!(
            "stage {}: only {} results, engaging evolutionary search",
            SolveStage::Fallback,
            ranked.len()
        );
        let mut pool = generation.candidates;
        let before = pool.len();
        pool.extend(ga::evolve(&snapshot, request, &self.config.ga));
        if pool.len() == before {
            // Fallback found nothing new; try the exact closed-tour
            // optimum before settling.
            if let Some(best) = exact::solve(&snapshot, request) {
                pool.push(best);
            }
        }
        let ranked = self.select(pool, request)?;
        debug!("stage {}: {} itineraries", SolveStage::Done, ranked.len());
        Ok(ranked)
    }

    /// Dedup, budget filter, Pareto front, and ranking, with one logged
    /// stage transition each.
    fn select(
        &self,
        candidates: Vec<CandidateItinerary>,
        request: &OptimizationRequest,
    ) -> Result<Vec<CandidateItinerary>, SolveError> {
        debug!(
            "stage {}: {} candidates",
            SolveStage::FilteringDedup,
            candidates.len()
        );
        let unique = pareto::dedup_itineraries(candidates);
        debug!("stage {}", SolveStage::BudgetFilter);
        let within = pareto::filter_budget(unique, request.budget())
            .map_err(|BudgetExceeded { cheapest }| SolveError::OverBudget { cheapest })?;
        debug!("stage {}", SolveStage::Pareto);
        let pool = pareto::front_with_extension(within);
        debug!("stage {}", SolveStage::Ranking);
        Ok(pareto::rank_by_preference(pool, request.alpha()))
    }
}
