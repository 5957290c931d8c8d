//! Pareto-aware selection: dedup, budget filter, dominance front,
//! diversity extension, and preference ranking.
//!
//! The pipeline runs on the raw candidate pool from generation (plus any
//! solver fallback output) and produces the ranked list a caller sees.
//! Stages match the engine's state machine: structural dedup, hard budget
//! filter, non-dominated front, near-front extension when the front is
//! thin, and an alpha-directed final ranking.

use std::collections::HashSet;

use log::debug;

use crate::models::CandidateItinerary;

/// Minimum front size before near-front itineraries are pulled in.
pub const MIN_FRONT_SIZE: usize = 20;

/// Maximum number of near-front itineraries added by the extension.
pub const EXTENSION_CAP: usize = 30;

/// Maximum number of ranked itineraries returned.
pub const MAX_RANKED: usize = 50;

/// Alpha at or above which ranking is by pure cost.
pub const COST_FOCUS_ALPHA: f64 = 0.7;

/// Alpha at or below which ranking is by pure time.
pub const TIME_FOCUS_ALPHA: f64 = 0.3;

/// Every generated itinerary exceeded the budget.
///
/// An expected outcome of a tight budget, not a hard error; carries the
/// cheapest known cost as guidance for the caller. `None` when there was
/// nothing to price in the first place.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetExceeded {
    /// Cost of the cheapest itinerary that was considered, if any.
    pub cheapest: Option<f64>,
}

/// Returns `true` if `a` dominates `b`: no worse on both cost and time,
/// strictly better on at least one.
///
/// # Examples
///
/// ```
/// use u_itinerary::pareto::dominates;
///
/// assert!(dominates((100.0, 50.0), (120.0, 50.0)));
/// assert!(!dominates((100.0, 80.0), (120.0, 50.0))); // trade-off
/// assert!(!dominates((100.0, 50.0), (100.0, 50.0))); // equal
/// ```
pub fn dominates(a: (f64, f64), b: (f64, f64)) -> bool {
    a.0 <= b.0 && a.1 <= b.1 && (a.0 < b.0 || a.1 < b.1)
}

/// Indices of the non-dominated members of a (cost, time) point set.
pub fn front_indices(points: &[(f64, f64)]) -> Vec<usize> {
    (0..points.len())
        .filter(|&i| !points.iter().any(|&other| dominates(other, points[i])))
        .collect()
}

/// Collapses structurally identical itineraries.
///
/// Two itineraries are identical when every leg matches on origin,
/// destination, mode, provider, travel date, and price rounded to cents —
/// distinct generation paths that rebuild the same trip collapse to one.
pub fn dedup_itineraries(candidates: Vec<CandidateItinerary>) -> Vec<CandidateItinerary> {
    let mut seen = HashSet::new();
    let before = candidates.len();
    let unique: Vec<CandidateItinerary> = candidates
        .into_iter()
        .filter(|it| seen.insert(structural_key(it)))
        .collect();
    debug!("dedup: {} -> {} itineraries", before, unique.len());
    unique
}

fn structural_key(itinerary: &CandidateItinerary) -> String {
    let mut key = String::new();
    for leg in itinerary.legs() {
        let cents = (leg.price() * 100.0).round() as i64;
        key.push_str(leg.origin());
        key.push('|');
        key.push_str(leg.destination());
        key.push('|');
        key.push_str(&leg.mode().to_string());
        key.push('|');
        key.push_str(leg.provider());
        key.push('|');
        key.push_str(leg.travel_date());
        key.push('|');
        key.push_str(&cents.to_string());
        key.push(';');
    }
    key
}

/// Hard budget filter. Emptying the pool is reported as
/// [`BudgetExceeded`] with the cheapest known cost (absent when the input
/// was already empty) — never papered over with a fabricated solution.
pub fn filter_budget(
    candidates: Vec<CandidateItinerary>,
    budget: f64,
) -> Result<Vec<CandidateItinerary>, BudgetExceeded> {
    if candidates.is_empty() {
        return Err(BudgetExceeded { cheapest: None });
    }
    let cheapest = candidates
        .iter()
        .map(|c| c.total_cost())
        .fold(f64::INFINITY, f64::min);
    let within: Vec<CandidateItinerary> = candidates
        .into_iter()
        .filter(|c| c.total_cost() <= budget)
        .collect();
    if within.is_empty() {
        return Err(BudgetExceeded {
            cheapest: Some(cheapest),
        });
    }
    debug!("budget filter: {} itineraries within {budget:.2}", within.len());
    Ok(within)
}

/// Splits the pool into its Pareto front and, when the front is thin,
/// extends it with the nearest dominated itineraries.
///
/// Distance to the front is `cost_norm + time_norm` using the front's own
/// min/max ranges. At most [`EXTENSION_CAP`] extras join the pool.
pub fn front_with_extension(candidates: Vec<CandidateItinerary>) -> Vec<CandidateItinerary> {
    let points: Vec<(f64, f64)> = candidates
        .iter()
        .map(|c| (c.total_cost(), c.total_time() as f64))
        .collect();
    let front_set: HashSet<usize> = front_indices(&points).into_iter().collect();

    let mut front = Vec::new();
    let mut rest = Vec::new();
    for (i, it) in candidates.into_iter().enumerate() {
        if front_set.contains(&i) {
            front.push(it);
        } else {
            rest.push(it);
        }
    }
    debug!("pareto front: {} non-dominated of {}", front.len(), front.len() + rest.len());

    if front.len() >= MIN_FRONT_SIZE || rest.is_empty() {
        return front;
    }

    let min_cost = front.iter().map(|s| s.total_cost()).fold(f64::INFINITY, f64::min);
    let max_cost = front.iter().map(|s| s.total_cost()).fold(f64::NEG_INFINITY, f64::max);
    let min_time = front.iter().map(|s| s.total_time() as f64).fold(f64::INFINITY, f64::min);
    let max_time = front.iter().map(|s| s.total_time() as f64).fold(f64::NEG_INFINITY, f64::max);
    let cost_range = if max_cost > min_cost { max_cost - min_cost } else { 1.0 };
    let time_range = if max_time > min_time { max_time - min_time } else { 1.0 };

    rest.sort_by(|a, b| {
        let da = (a.total_cost() - min_cost) / cost_range
            + (a.total_time() as f64 - min_time) / time_range;
        let db = (b.total_cost() - min_cost) / cost_range
            + (b.total_time() as f64 - min_time) / time_range;
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    });
    front.extend(rest.into_iter().take(EXTENSION_CAP));
    front
}

/// Final alpha-directed ranking over the selected pool.
///
/// Cost-focused requests (`alpha ≥ 0.7`) sort by cost, time-focused ones
/// (`alpha ≤ 0.3`) by time, anything between by the blended normalized
/// score over the pool's own ranges. At most [`MAX_RANKED`] itineraries
/// are returned.
pub fn rank_by_preference(
    mut pool: Vec<CandidateItinerary>,
    alpha: f64,
) -> Vec<CandidateItinerary> {
    if alpha >= COST_FOCUS_ALPHA {
        debug!("ranking by cost (alpha={alpha:.2})");
        pool.sort_by(|a, b| {
            a.total_cost()
                .partial_cmp(&b.total_cost())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    } else if alpha <= TIME_FOCUS_ALPHA {
        debug!("ranking by time (alpha={alpha:.2})");
        pool.sort_by_key(|it| it.total_time());
    } else {
        debug!("ranking by blended score (alpha={alpha:.2})");
        let min_cost = pool.iter().map(|s| s.total_cost()).fold(f64::INFINITY, f64::min);
        let max_cost = pool.iter().map(|s| s.total_cost()).fold(f64::NEG_INFINITY, f64::max);
        let min_time = pool.iter().map(|s| s.total_time() as f64).fold(f64::INFINITY, f64::min);
        let max_time = pool.iter().map(|s| s.total_time() as f64).fold(f64::NEG_INFINITY, f64::max);
        let cost_range = if max_cost > min_cost { max_cost - min_cost } else { 1.0 };
        let time_range = if max_time > min_time { max_time - min_time } else { 1.0 };

        pool.sort_by(|a, b| {
            let sa = alpha * (a.total_cost() - min_cost) / cost_range
                + (1.0 - alpha) * (a.total_time() as f64 - min_time) / time_range;
            let sb = alpha * (b.total_cost() - min_cost) / cost_range
                + (1.0 - alpha) * (b.total_time() as f64 - min_time) / time_range;
            sa.partial_cmp(&sb).unwrap_or(std::cmp::Ordering::Equal)
        });
    }
    pool.truncate(MAX_RANKED);
    pool
}

/// Runs the whole selection pipeline: dedup, budget filter, front with
/// extension, preference ranking.
pub fn select_ranked(
    candidates: Vec<CandidateItinerary>,
    budget: f64,
    alpha: f64,
) -> Result<Vec<CandidateItinerary>, BudgetExceeded> {
    let unique = dedup_itineraries(candidates);
    let within = filter_budget(unique, budget)?;
    let pool = front_with_extension(within);
    Ok(rank_by_preference(pool, alpha))
}
