//! Exact solver: branch and bound over closed route orderings.
//!
//! Explores every combination of one transport option per slot of each
//! closed ordering, pruning on two admissible bounds computed from
//! per-slot suffix minima: partial cost plus the cheapest possible
//! completion must stay within budget, and partial weighted score plus
//! the best possible completion must beat the incumbent. With the bounds
//! in place the search is exhaustive, so the returned itinerary is the
//! true optimum of the weighted objective among in-budget closed tours.

use log::debug;

use crate::catalog::Snapshot;
use crate::models::{CandidateItinerary, OptimizationRequest, TransportOption};
use crate::sequence::sequence_legs;
use crate::topology::viable_orderings;

/// Weighted objective for a single option: `alpha` blends cost against
/// time, matching the preference scoring used by candidate generation.
fn weighted_score(option: &TransportOption, alpha: f64) -> f64 {
    alpha * option.price() + (1.0 - alpha) * option.duration_minutes() as f64
}

/// Finds the minimum-score in-budget itinerary over all closed orderings,
/// or `None` when no closed tour fits the budget.
pub fn solve(snapshot: &Snapshot, request: &OptimizationRequest) -> Option<CandidateItinerary> {
    let topology = viable_orderings(request.origin(), request.destinations(), snapshot);
    let closed: Vec<_> = topology
        .viable
        .into_iter()
        .filter(|o| o.is_closed())
        .collect();
    if closed.is_empty() {
        debug!("exact solver: no closed orderings to search");
        return None;
    }

    let alpha = request.alpha();
    let mut best: Option<(f64, Vec<TransportOption>)> = None;

    for ordering in &closed {
        let pools: Vec<Vec<&TransportOption>> = ordering
            .slots()
            .iter()
            .map(|&(from, to)| snapshot.options_between(from, to))
            .collect();
        if pools.iter().any(|p| p.is_empty()) {
            continue;
        }

        // Admissible completion bounds: per-slot minima accumulated from
        // the back, so suffix_cost[i] is the cheapest way to fill slots
        // i..end and suffix_score[i] the best achievable score for them.
        let n = pools.len();
        let mut suffix_cost = vec![0.0; n + 1];
        let mut suffix_score = vec![0.0; n + 1];
        for i in (0..n).rev() {
            let min_cost = pools[i]
                .iter()
                .map(|o| o.price())
                .fold(f64::INFINITY, f64::min);
            let min_score = pools[i]
                .iter()
                .map(|o| weighted_score(o, alpha))
                .fold(f64::INFINITY, f64::min);
            suffix_cost[i] = suffix_cost[i + 1] + min_cost;
            suffix_score[i] = suffix_score[i + 1] + min_score;
        }
        if suffix_cost[0] > request.budget() {
            continue;
        }

        let mut chosen: Vec<&TransportOption> = Vec::with_capacity(n);
        descend(
            &pools,
            &suffix_cost,
            &suffix_score,
            request.budget(),
            alpha,
            0,
            0.0,
            0.0,
            &mut chosen,
            &mut best,
        );
    }

    let (score, legs) = best?;
    debug!("exact solver: optimum score {:.3} over {} legs", score, legs.len());
    sequence_legs(legs, request.origin())
}

#[allow(clippy::too_many_arguments)]
fn descend<'a>(
    pools: &[Vec<&'a TransportOption>],
    suffix_cost: &[f64],
    suffix_score: &[f64],
    budget: f64,
    alpha: f64,
    depth: usize,
    cost: f64,
    score: f64,
    chosen: &mut Vec<&'a TransportOption>,
    best: &mut Option<(f64, Vec<TransportOption>)>,
) {
    if depth == pools.len() {
        if best.as_ref().map_or(true, |(s, _)| score < *s) {
            *best = Some((score, chosen.iter().map(|&o| o.clone()).collect()));
        }
        return;
    }
    for option in &pools[depth] {
        let next_cost = cost + option.price();
        if next_cost + suffix_cost[depth + 1] > budget {
            continue;
        }
        let next_score = score + weighted_score(option, alpha);
        if let Some((incumbent, _)) = best {
            if next_score + suffix_score[depth + 1] >= *incumbent {
                continue;
            }
        }
        chosen.push(option);
        descend(
            pools,
            suffix_cost,
            suffix_score,
            budget,
            alpha,
            depth + 1,
            next_cost,
            next_score,
            chosen,
            best,
        );
        chosen.pop();
    }
}
