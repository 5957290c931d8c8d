//! Candidate itinerary generation from viable route orderings.
//!
//! For every viable ordering, each leg slot's options are scored under the
//! user's cost-vs-time preference, modes are combined into per-route mode
//! patterns (e.g. flight/flight/car), and concrete option combinations are
//! enumerated per pattern — exhaustively when small, by stratified cost
//! sampling when the product explodes. Combinations more than 20% over
//! budget are dropped here; the hard budget filter comes later so that
//! near-budget alternatives survive into the Pareto step.

use log::debug;

use crate::catalog::Snapshot;
use crate::models::{CandidateItinerary, Mode, OptimizationRequest, TransportOption};

/// Per-slot cap on options considered per mode pattern.
pub const MAX_OPTIONS_PER_SLOT: usize = 10;

/// Combination-count threshold below which a pattern is enumerated
/// exhaustively.
pub const EXHAUSTIVE_LIMIT: usize = 100;

/// Generation-time budget slack: candidates up to `budget × 1.2` are kept
/// for the Pareto step.
pub const BUDGET_SLACK: f64 = 1.2;

/// Result of candidate generation.
#[derive(Debug, Clone)]
pub struct Generation {
    /// Generated candidates (possibly containing structural duplicates).
    pub candidates: Vec<CandidateItinerary>,
    /// Cheapest combination cost seen, including ones dropped by the
    /// slack filter. Used to report budget guidance when nothing survives.
    pub cheapest_cost: Option<f64>,
}

/// Scores a slot's option pool under `alpha`.
///
/// Cost and time are min–max normalized within the pool (a degenerate
/// range normalizes to 0); the score is
/// `alpha * cost_norm + (1 - alpha) * time_norm` — lower is better under
/// the user's stated preference.
pub fn preference_scores(pool: &[&TransportOption], alpha: f64) -> Vec<f64> {
    let costs: Vec<f64> = pool.iter().map(|o| o.price()).collect();
    let times: Vec<f64> = pool.iter().map(|o| o.duration_minutes() as f64).collect();
    let cost_norm = min_max_normalize(&costs);
    let time_norm = min_max_normalize(&times);
    cost_norm
        .iter()
        .zip(time_norm.iter())
        .map(|(c, t)| alpha * c + (1.0 - alpha) * t)
        .collect()
}

fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range > 0.0 {
        values.iter().map(|v| (v - min) / range).collect()
    } else {
        vec![0.0; values.len()]
    }
}

/// Generates candidate itineraries for all viable orderings.
pub fn generate_candidates(
    snapshot: &Snapshot,
    orderings: &[crate::topology::RouteOrdering],
    request: &OptimizationRequest,
) -> Generation {
    let alpha = request.alpha();
    let slack_limit = request.budget() * BUDGET_SLACK;

    let mut candidates = Vec::new();
    let mut cheapest: Option<f64> = None;

    for ordering in orderings {
        // Score and sort each slot's pool; best options first.
        let mut slot_pools: Vec<Vec<&TransportOption>> = Vec::new();
        let mut servable = true;
        for (from, to) in ordering.slots() {
            let pool = snapshot.options_between(from, to);
            if pool.is_empty() {
                servable = false;
                break;
            }
            let scores = preference_scores(&pool, alpha);
            let mut scored: Vec<(f64, &TransportOption)> =
                scores.into_iter().zip(pool.into_iter()).collect();
            scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
            slot_pools.push(scored.into_iter().map(|(_, o)| o).collect());
        }
        if !servable || slot_pools.is_empty() {
            continue;
        }

        // Which modes actually serve each slot.
        let modes_per_slot: Vec<Vec<Mode>> = slot_pools
            .iter()
            .map(|pool| {
                let mut modes = Vec::new();
                if pool.iter().any(|o| o.mode() == Mode::Flight) {
                    modes.push(Mode::Flight);
                }
                if pool.iter().any(|o| o.mode() == Mode::Car) {
                    modes.push(Mode::Car);
                }
                modes
            })
            .collect();

        let mode_lens: Vec<usize> = modes_per_slot.iter().map(|m| m.len()).collect();
        let patterns = index_product(&mode_lens);
        debug!(
            "ordering {}: {} slots, {} mode patterns",
            ordering.cities().join(" -> "),
            slot_pools.len(),
            patterns.len()
        );

        for pattern in patterns {
            let filtered: Vec<Vec<&TransportOption>> = pattern
                .iter()
                .enumerate()
                .map(|(slot, &mode_idx)| {
                    let mode = modes_per_slot[slot][mode_idx];
                    slot_pools[slot]
                        .iter()
                        .copied()
                        .filter(|o| o.mode() == mode)
                        .take(MAX_OPTIONS_PER_SLOT)
                        .collect()
                })
                .collect();

            let lens: Vec<usize> = filtered.iter().map(|s| s.len()).collect();
            let total: usize = lens.iter().product();
            if total == 0 {
                continue;
            }

            let combos = index_product(&lens);
            let selected = if total <= EXHAUSTIVE_LIMIT {
                combos
            } else {
                stratified_by_cost(combos, &filtered)
            };

            for combo in selected {
                let cost: f64 = combo
                    .iter()
                    .enumerate()
                    .map(|(slot, &i)| filtered[slot][i].price())
                    .sum();
                cheapest = Some(match cheapest {
                    Some(c) if c <= cost => c,
                    _ => cost,
                });
                if cost > slack_limit {
                    continue;
                }
                let legs: Vec<TransportOption> = combo
                    .iter()
                    .enumerate()
                    .map(|(slot, &i)| filtered[slot][i].clone())
                    .collect();
                candidates.push(CandidateItinerary::from_legs(legs));
            }
        }
    }

    debug!("generated {} candidate itineraries", candidates.len());
    Generation {
        candidates,
        cheapest_cost: cheapest,
    }
}

/// Stratified sample of an oversized combination set: the 20 cheapest,
/// 20 from the middle of the cost-sorted order, and the 10 most expensive.
fn stratified_by_cost(
    combos: Vec<Vec<usize>>,
    slots: &[Vec<&TransportOption>],
) -> Vec<Vec<usize>> {
    let mut by_cost: Vec<(f64, Vec<usize>)> = combos
        .into_iter()
        .map(|combo| {
            let cost = combo
                .iter()
                .enumerate()
                .map(|(slot, &i)| slots[slot][i].price())
                .sum();
            (cost, combo)
        })
        .collect();
    by_cost.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let n = by_cost.len();
    let mut picked: Vec<Vec<usize>> = by_cost.iter().take(20).map(|(_, c)| c.clone()).collect();
    if n > 40 {
        let mid = n / 2;
        picked.extend(by_cost[mid - 10..mid + 10].iter().map(|(_, c)| c.clone()));
        picked.extend(by_cost[n - 10..].iter().map(|(_, c)| c.clone()));
    }
    picked
}

/// Cartesian product of index ranges `0..lens[i]`, odometer order.
fn index_product(lens: &[usize]) -> Vec<Vec<usize>> {
    let mut out: Vec<Vec<usize>> = vec![Vec::new()];
    for &len in lens {
        let mut next = Vec::with_capacity(out.len() * len.max(1));
        for prefix in &out {
            for i in 0..len {
                let mut combo = prefix.clone();
                combo.push(i);
                next.push(combo);
            }
        }
        out = next;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InMemoryCatalog, Snapshot};
    use crate::geo::CityCoords;
    use crate::models::{CarLeg, Flight};
    use crate::topology::viable_orderings;

    fn build(catalog: &InMemoryCatalog, request: &OptimizationRequest) -> Generation {
        let snap = Snapshot::load(catalog, &CityCoords::new(), request);
        let topo = viable_orderings(request.origin(), request.destinations(), &snap);
        generate_candidates(&snap, &topo.viable, request)
    }

    #[test]
    fn test_single_round_trip() {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_flight(Flight::one_way("A", "B", "d", "5h 0m", 500.0));
        catalog.add_flight(Flight::one_way("B", "A", "d", "5h 0m", 400.0));
        let request = OptimizationRequest::new("A", &["B"], 1000.0, 0.5);

        let gen = build(&catalog, &request);
        assert_eq!(gen.candidates.len(), 1);
        let it = &gen.candidates[0];
        assert_eq!(it.total_cost(), 900.0);
        assert_eq!(it.total_time(), 600);
        assert!(it.is_closed());
    }

    #[test]
    fn test_mode_patterns_multiply() {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_flight(Flight::one_way("A", "B", "d", "2h 0m", 300.0));
        catalog.add_car_leg(CarLeg::new("A", "B", "d", "Hertz", 100.0));
        catalog.add_flight(Flight::one_way("B", "A", "d", "2h 0m", 300.0));
        let request = OptimizationRequest::new("A", &["B"], 2000.0, 0.5);

        let gen = build(&catalog, &request);
        // Patterns: flight/flight and car/flight — one combo each.
        assert_eq!(gen.candidates.len(), 2);
    }

    #[test]
    fn test_slack_filter_drops_expensive() {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_flight(Flight::one_way("A", "B", "d", "2h 0m", 700.0));
        catalog.add_flight(Flight::one_way("B", "A", "d", "2h 0m", 700.0));
        // 1400 > 1000 * 1.2
        let request = OptimizationRequest::new("A", &["B"], 1000.0, 0.5);

        let gen = build(&catalog, &request);
        assert!(gen.candidates.is_empty());
        assert_eq!(gen.cheapest_cost, Some(1400.0));
    }

    #[test]
    fn test_near_budget_kept_for_pareto() {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_flight(Flight::one_way("A", "B", "d", "2h 0m", 550.0));
        catalog.add_flight(Flight::one_way("B", "A", "d", "2h 0m", 550.0));
        // 1100 <= 1000 * 1.2 — generated, even though over the hard budget.
        let request = OptimizationRequest::new("A", &["B"], 1000.0, 0.5);

        let gen = build(&catalog, &request);
        assert_eq!(gen.candidates.len(), 1);
    }

    #[test]
    fn test_slot_cap_bounds_combinations() {
        let mut catalog = InMemoryCatalog::new();
        for i in 0..25 {
            catalog.add_flight(Flight::one_way("A", "B", "d", "2h 0m", 100.0 + i as f64));
            catalog.add_flight(Flight::one_way("B", "A", "d", "2h 0m", 100.0 + i as f64));
        }
        let request = OptimizationRequest::new("A", &["B"], 10_000.0, 1.0);

        let gen = build(&catalog, &request);
        // 10 × 10 = 100 ≤ exhaustive limit, all enumerated.
        assert_eq!(gen.candidates.len(), 100);
        // Cheapest pair survived the cap (alpha=1 sorts by cost).
        let min_cost = gen
            .candidates
            .iter()
            .map(|c| c.total_cost())
            .fold(f64::INFINITY, f64::min);
        assert_eq!(min_cost, 200.0);
    }

    #[test]
    fn test_stratified_sampling_kicks_in() {
        let mut catalog = InMemoryCatalog::new();
        // 3 slots × 10 capped options = 1000 combos > 100.
        for city_pair in [("A", "B"), ("B", "C"), ("C", "A")] {
            for i in 0..12 {
                catalog.add_flight(Flight::one_way(
                    city_pair.0,
                    city_pair.1,
                    "d",
                    "1h 0m",
                    100.0 + i as f64 * 10.0,
                ));
            }
        }
        let request = OptimizationRequest::new("A", &["B", "C"], 100_000.0, 1.0);

        let gen = build(&catalog, &request);
        // One viable ordering, 1000 combos: 20 cheapest + 20 middle + 10 top.
        assert_eq!(gen.candidates.len(), 50);
    }

    #[test]
    fn test_scores_prefer_cost_at_alpha_one() {
        let cheap_slow = TransportOption::Flight(Flight::one_way("A", "B", "d", "", 300.0));
        let fast_pricey = TransportOption::Flight(Flight::one_way("A", "B", "d", "", 500.0));
        let mut cheap_slow = cheap_slow;
        let mut fast_pricey = fast_pricey;
        if let TransportOption::Flight(f) = &mut cheap_slow {
            f.duration_minutes = 600;
        }
        if let TransportOption::Flight(f) = &mut fast_pricey {
            f.duration_minutes = 200;
        }
        let pool = vec![&cheap_slow, &fast_pricey];

        let cost_scores = preference_scores(&pool, 1.0);
        assert!(cost_scores[0] < cost_scores[1]);

        let time_scores = preference_scores(&pool, 0.0);
        assert!(time_scores[1] < time_scores[0]);
    }

    #[test]
    fn test_degenerate_pool_scores_zero() {
        let a = TransportOption::Flight(Flight::one_way("A", "B", "d", "", 300.0));
        let b = TransportOption::Flight(Flight::one_way("A", "B", "d", "", 300.0));
        let pool = vec![&a, &b];
        assert_eq!(preference_scores(&pool, 0.5), vec![0.0, 0.0]);
    }

    #[test]
    fn test_index_product() {
        assert_eq!(index_product(&[2, 2]).len(), 4);
        assert_eq!(index_product(&[]).len(), 1);
        assert_eq!(index_product(&[3]).len(), 3);
        assert!(index_product(&[2, 0]).is_empty());
    }
}
