//! Evolutionary fallback solver: NSGA-II over binary leg selections.
//!
//! Activated when the combinatorial generator and Pareto selection yield
//! too few alternatives. Each individual selects an arbitrary subset of
//! catalog options; the two objectives are total cost (with budget
//! overage penalized softly) and total time. Selections that do not
//! chain into an origin-departing, destination-covering itinerary take a
//! large penalty on both objectives, so the front converges on decodable
//! trips. Rank-0 individuals of the final population are decoded through
//! the sequencer; any remaining non-decoding selections are discarded.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::Snapshot;
use crate::models::{CandidateItinerary, OptimizationRequest, TransportOption};
use crate::sequence::{covers_destinations, sequence_legs};

use super::chromosome::LegSelection;
use super::config::GaConfig;
use super::nsga::{crowding_distances, rank_fronts};

/// Maximum number of decoded itineraries returned, spaced along the
/// cost-sorted final front.
const MAX_DECODED: usize = 10;

/// Objective penalty for selections that do not decode into a valid
/// itinerary. Without it the empty selection scores (0, 0) and dominates
/// every real trip, collapsing the front to undecodable individuals.
const INFEASIBLE_PENALTY: f64 = 1e9;

/// Runs the evolutionary search and decodes the final Pareto front.
///
/// Returns an empty vector when the snapshot has no options or when no
/// rank-0 selection decodes into a valid itinerary — the caller treats
/// that as "no additional candidates", never as a failure.
pub fn evolve(
    snapshot: &Snapshot,
    request: &OptimizationRequest,
    config: &GaConfig,
) -> Vec<CandidateItinerary> {
    if config.validate().is_err() || snapshot.options().is_empty() {
        return Vec::new();
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let n_bits = snapshot.options().len();
    debug!(
        "evolutionary fallback: {} bits, population {}, {} generations",
        n_bits, config.population_size, config.max_generations
    );

    // Initial population.
    let mut population: Vec<LegSelection> = (0..config.population_size)
        .map(|_| {
            let mut individual = LegSelection::random(n_bits, &mut rng);
            evaluate(&mut individual, snapshot, request, config);
            individual
        })
        .collect();

    for _ in 0..config.max_generations {
        let points: Vec<[f64; 2]> = population.iter().map(|i| i.objectives()).collect();
        let ranking = rank_fronts(&points);
        let crowding = population_crowding(&points, &ranking.fronts);

        // Offspring via binary tournament on (rank, crowding).
        let mut offspring = Vec::with_capacity(config.population_size);
        while offspring.len() < config.population_size {
            let p1 = tournament(&ranking.ranks, &crowding, &mut rng);
            let p2 = tournament(&ranking.ranks, &crowding, &mut rng);

            let (mut c1, mut c2) = if rng.random_range(0.0..1.0) < config.crossover_rate {
                two_point_crossover(&population[p1], &population[p2], &mut rng)
            } else {
                (population[p1].clone(), population[p2].clone())
            };

            bitflip(&mut c1, config.mutation_rate, &mut rng);
            bitflip(&mut c2, config.mutation_rate, &mut rng);
            evaluate(&mut c1, snapshot, request, config);
            evaluate(&mut c2, snapshot, request, config);

            offspring.push(c1);
            if offspring.len() < config.population_size {
                offspring.push(c2);
            }
        }

        // Elitist (mu + lambda) environmental selection.
        population.extend(offspring);
        population = truncate_by_fronts(population, config.population_size);
    }

    decode_front(population, snapshot, request)
}

fn evaluate(
    individual: &mut LegSelection,
    snapshot: &Snapshot,
    request: &OptimizationRequest,
    config: &GaConfig,
) {
    let mut cost = 0.0;
    let mut time = 0.0;
    for (option, &selected) in snapshot.options().iter().zip(individual.bits()) {
        if selected {
            cost += option.price();
            time += option.duration_minutes() as f64;
        }
    }
    let overage = (cost - request.budget()).max(0.0) * config.budget_penalty;

    let legs: Vec<TransportOption> = individual
        .selected_indices()
        .into_iter()
        .map(|i| snapshot.options()[i].clone())
        .collect();
    let decodes = sequence_legs(legs, request.origin())
        .is_some_and(|it| covers_destinations(&it, request.origin(), request.destinations()));

    if decodes {
        individual.set_objectives(cost + overage, time);
    } else {
        individual.set_objectives(
            cost + overage + INFEASIBLE_PENALTY,
            time + INFEASIBLE_PENALTY,
        );
    }
}

fn population_crowding(points: &[[f64; 2]], fronts: &[Vec<usize>]) -> Vec<f64> {
    let mut crowding = vec![0.0; points.len()];
    for front in fronts {
        let front_points: Vec<[f64; 2]> = front.iter().map(|&i| points[i]).collect();
        for (&i, d) in front.iter().zip(crowding_distances(&front_points)) {
            crowding[i] = d;
        }
    }
    crowding
}

/// Binary tournament: lower rank wins, crowding distance breaks ties.
fn tournament<R: Rng>(ranks: &[usize], crowding: &[f64], rng: &mut R) -> usize {
    let a = rng.random_range(0..ranks.len());
    let b = rng.random_range(0..ranks.len());
    if ranks[a] < ranks[b] || (ranks[a] == ranks[b] && crowding[a] > crowding[b]) {
        a
    } else {
        b
    }
}

fn two_point_crossover<R: Rng>(
    p1: &LegSelection,
    p2: &LegSelection,
    rng: &mut R,
) -> (LegSelection, LegSelection) {
    let n = p1.len();
    if n < 2 {
        return (p1.clone(), p2.clone());
    }
    let mut cut1 = rng.random_range(0..n);
    let mut cut2 = rng.random_range(0..n);
    if cut1 > cut2 {
        std::mem::swap(&mut cut1, &mut cut2);
    }

    let mut bits1 = p1.bits().to_vec();
    let mut bits2 = p2.bits().to_vec();
    for i in cut1..=cut2 {
        std::mem::swap(&mut bits1[i], &mut bits2[i]);
    }
    (LegSelection::new(bits1), LegSelection::new(bits2))
}

fn bitflip<R: Rng>(individual: &mut LegSelection, rate: f64, rng: &mut R) {
    for bit in individual.bits_mut() {
        if rng.random_range(0.0..1.0) < rate {
            *bit = !*bit;
        }
    }
}

/// Environmental selection: fill the next population front by front,
/// truncating the overflowing front by descending crowding distance.
fn truncate_by_fronts(population: Vec<LegSelection>, target: usize) -> Vec<LegSelection> {
    let points: Vec<[f64; 2]> = population.iter().map(|i| i.objectives()).collect();
    let ranking = rank_fronts(&points);

    let mut next = Vec::with_capacity(target);
    for front in &ranking.fronts {
        if next.len() + front.len() <= target {
            next.extend(front.iter().copied());
        } else {
            let front_points: Vec<[f64; 2]> = front.iter().map(|&i| points[i]).collect();
            let crowding = crowding_distances(&front_points);
            let mut by_crowding: Vec<(f64, usize)> =
                crowding.into_iter().zip(front.iter().copied()).collect();
            by_crowding.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
            next.extend(
                by_crowding
                    .into_iter()
                    .take(target - next.len())
                    .map(|(_, i)| i),
            );
            break;
        }
    }

    let mut keep: Vec<Option<LegSelection>> = population.into_iter().map(Some).collect();
    next.into_iter()
        .filter_map(|i| keep[i].take())
        .collect()
}

/// Decodes the rank-0 selections into valid itineraries, at most
/// [`MAX_DECODED`], spaced along the cost-sorted front.
fn decode_front(
    population: Vec<LegSelection>,
    snapshot: &Snapshot,
    request: &OptimizationRequest,
) -> Vec<CandidateItinerary> {
    let points: Vec<[f64; 2]> = population.iter().map(|i| i.objectives()).collect();
    let ranking = rank_fronts(&points);
    let Some(front) = ranking.fronts.first() else {
        return Vec::new();
    };

    let mut front: Vec<&LegSelection> = front.iter().map(|&i| &population[i]).collect();
    front.sort_by(|a, b| {
        a.objectives()[0]
            .partial_cmp(&b.objectives()[0])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let picks = spaced_indices(front.len(), MAX_DECODED);
    let mut decoded = Vec::new();
    for idx in picks {
        let legs: Vec<TransportOption> = front[idx]
            .selected_indices()
            .into_iter()
            .map(|i| snapshot.options()[i].clone())
            .collect();
        if let Some(itinerary) = sequence_legs(legs, request.origin()) {
            if covers_destinations(&itinerary, request.origin(), request.destinations()) {
                decoded.push(itinerary);
            }
        }
    }
    debug!("evolutionary fallback decoded {} valid itineraries", decoded.len());
    decoded
}

/// Up to `count` indices evenly spaced over `0..len`.
fn spaced_indices(len: usize, count: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    if len <= count {
        return (0..len).collect();
    }
    (0..count)
        .map(|k| k * (len - 1) / (count - 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::geo::CityCoords;
    use crate::models::Flight;

    fn snapshot(request: &OptimizationRequest) -> Snapshot {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_flight(Flight::one_way("A", "B", "d", "5h 0m", 500.0));
        catalog.add_flight(Flight::one_way("B", "A", "d", "5h 0m", 400.0));
        catalog.add_flight(Flight::one_way("A", "B", "d", "2h 0m", 900.0));
        Snapshot::load(&catalog, &CityCoords::new(), request)
    }

    fn small_config() -> GaConfig {
        GaConfig::default()
            .with_population_size(30)
            .with_max_generations(20)
            .with_seed(42)
    }

    #[test]
    fn test_evolve_finds_valid_itineraries() {
        let request = OptimizationRequest::new("A", &["B"], 1000.0, 0.5);
        let snap = snapshot(&request);
        let found = evolve(&snap, &request, &small_config());
        assert!(!found.is_empty());
        for it in &found {
            assert_eq!(it.departure_city(), Some("A"));
            assert!(it.is_chained());
            assert!(covers_destinations(it, "A", request.destinations()));
        }
    }

    #[test]
    fn test_evolve_seeded_is_reproducible() {
        let request = OptimizationRequest::new("A", &["B"], 1000.0, 0.5);
        let snap = snapshot(&request);
        let a = evolve(&snap, &request, &small_config());
        let b = evolve(&snap, &request, &small_config());
        let costs =
            |v: &[CandidateItinerary]| v.iter().map(|i| i.total_cost()).collect::<Vec<_>>();
        assert_eq!(costs(&a), costs(&b));
    }

    #[test]
    fn test_evolve_empty_snapshot() {
        let request = OptimizationRequest::new("A", &["B"], 1000.0, 0.5);
        let catalog = InMemoryCatalog::new();
        let snap = Snapshot::load(&catalog, &CityCoords::new(), &request);
        assert!(evolve(&snap, &request, &small_config()).is_empty());
    }

    #[test]
    fn test_two_point_crossover_swaps_segment() {
        let mut rng = StdRng::seed_from_u64(3);
        let p1 = LegSelection::new(vec![true; 8]);
        let p2 = LegSelection::new(vec![false; 8]);
        let (c1, c2) = two_point_crossover(&p1, &p2, &mut rng);
        // Children are complementary bit-for-bit.
        for i in 0..8 {
            assert_ne!(c1.bits()[i], c2.bits()[i]);
        }
    }

    #[test]
    fn test_truncate_keeps_best_front() {
        let mut good = LegSelection::new(vec![true]);
        good.set_objectives(1.0, 1.0);
        let mut bad = LegSelection::new(vec![false]);
        bad.set_objectives(5.0, 5.0);
        let kept = truncate_by_fronts(vec![bad, good], 1);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].objectives(), [1.0, 1.0]);
    }

    #[test]
    fn test_spaced_indices() {
        assert_eq!(spaced_indices(3, 10), vec![0, 1, 2]);
        assert_eq!(spaced_indices(0, 10), Vec::<usize>::new());
        let picks = spaced_indices(100, 10);
        assert_eq!(picks.len(), 10);
        assert_eq!(picks[0], 0);
        assert_eq!(*picks.last().expect("non-empty"), 99);
    }

    #[test]
    fn test_undecodable_selections_rank_behind_valid_trips() {
        let request = OptimizationRequest::new("A", &["B"], 1000.0, 0.5);
        let snap = snapshot(&request);
        let config = GaConfig::default();

        // Selects the cheap outbound and the return: decodes cleanly.
        let mut round_trip = LegSelection::new(vec![true, true, false]);
        evaluate(&mut round_trip, &snap, &request, &config);

        // Selects nothing: costs nothing but decodes to no itinerary.
        let mut empty = LegSelection::new(vec![false; snap.options().len()]);
        evaluate(&mut empty, &snap, &request, &config);

        // Selects only the return leg: nothing departs the origin.
        let mut stranded = LegSelection::new(vec![false, true, false]);
        evaluate(&mut stranded, &snap, &request, &config);

        for invalid in [&empty, &stranded] {
            assert!(invalid.objectives()[0] > round_trip.objectives()[0]);
            assert!(invalid.objectives()[1] > round_trip.objectives()[1]);
        }
    }

    #[test]
    fn test_overage_penalized() {
        let request = OptimizationRequest::new("A", &["B"], 100.0, 0.5);
        let snap = snapshot(&request);
        let config = GaConfig::default();
        let mut all_selected = LegSelection::new(vec![true; snap.options().len()]);
        evaluate(&mut all_selected, &snap, &request, &config);
        let raw_cost = 500.0 + 400.0 + 900.0;
        let expected = raw_cost + (raw_cost - 100.0) * 10.0;
        assert!((all_selected.objectives()[0] - expected).abs() < 1e-9);
    }
}
