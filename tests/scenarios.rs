//! End-to-end solve scenarios over the public API.

use proptest::prelude::*;

use u_itinerary::catalog::InMemoryCatalog;
use u_itinerary::duration::{format_minutes, parse_duration};
use u_itinerary::engine::{Engine, EngineConfig, SolveError};
use u_itinerary::geo::CityCoords;
use u_itinerary::models::{CarLeg, Flight, Mode, OptimizationRequest};
use u_itinerary::pareto;

fn deterministic() -> EngineConfig {
    EngineConfig::default().with_ga_fallback(false)
}

#[test]
fn round_trip_within_budget() {
    let mut catalog = InMemoryCatalog::new();
    catalog.add_flight(Flight::one_way("GRU", "SCL", "2026-09-01", "5h 00m", 500.0));
    catalog.add_flight(Flight::one_way("SCL", "GRU", "2026-09-08", "5h 00m", 400.0));

    let coords = CityCoords::new();
    let engine = Engine::new(&catalog, &coords).with_config(deterministic());
    let request = OptimizationRequest::new("GRU", &["SCL"], 1000.0, 0.5);

    let results = engine.solve(&request).expect("solvable");
    assert_eq!(results.len(), 1);
    assert!((results[0].total_cost() - 900.0).abs() < 1e-9);
    assert_eq!(results[0].total_time(), 600);
    assert!(results[0].is_closed());
}

#[test]
fn over_budget_reports_cheapest() {
    let mut catalog = InMemoryCatalog::new();
    catalog.add_flight(Flight::one_way("GRU", "SCL", "2026-09-01", "5h 00m", 500.0));
    catalog.add_flight(Flight::one_way("SCL", "GRU", "2026-09-08", "5h 00m", 400.0));

    let coords = CityCoords::new();
    let engine = Engine::new(&catalog, &coords).with_config(deterministic());
    let request = OptimizationRequest::new("GRU", &["SCL"], 800.0, 0.5);

    match engine.solve(&request) {
        Err(SolveError::OverBudget {
            cheapest: Some(cheapest),
        }) => assert!((cheapest - 900.0).abs() < 1e-9),
        other => panic!("expected OverBudget, got {:?}", other),
    }
}

#[test]
fn open_tour_when_no_way_back() {
    let mut catalog = InMemoryCatalog::new();
    catalog.add_flight(Flight::one_way("GRU", "SCL", "2026-09-01", "5h 00m", 500.0));

    let coords = CityCoords::new();
    let engine = Engine::new(&catalog, &coords).with_config(deterministic());
    let request = OptimizationRequest::new("GRU", &["SCL"], 1000.0, 0.5);

    let results = engine.solve(&request).expect("open tour viable");
    assert_eq!(results.len(), 1);
    assert!(!results[0].is_closed());
    assert_eq!(results[0].final_city(), Some("SCL"));
}

#[test]
fn alpha_extremes_flip_the_ranking() {
    let mut catalog = InMemoryCatalog::new();
    catalog.add_flight(Flight::one_way("GRU", "SCL", "2026-09-01", "5h 00m", 500.0));
    catalog.add_flight(Flight::one_way("GRU", "SCL", "2026-09-01", "2h 00m", 900.0));
    catalog.add_flight(Flight::one_way("SCL", "GRU", "2026-09-08", "5h 00m", 400.0));
    let coords = CityCoords::new();

    // Full cost focus: the cheap-but-slow trip ranks first.
    let engine = Engine::new(&catalog, &coords).with_config(deterministic());
    let request = OptimizationRequest::new("GRU", &["SCL"], 2000.0, 1.0);
    let results = engine.solve(&request).expect("solvable");
    assert!((results[0].total_cost() - 900.0).abs() < 1e-9);

    // Full time focus: the fast-but-pricey trip ranks first.
    let request = OptimizationRequest::new("GRU", &["SCL"], 2000.0, 0.0);
    let results = engine.solve(&request).expect("solvable");
    assert!((results[0].total_cost() - 1300.0).abs() < 1e-9);
    assert_eq!(results[0].total_time(), 420);
}

#[test]
fn mixed_mode_round_trip_uses_car() {
    let mut catalog = InMemoryCatalog::new();
    catalog.add_flight(Flight::one_way("GRU", "SCL", "2026-09-01", "5h 00m", 500.0));
    catalog.add_car_leg(CarLeg::new("SCL", "GRU", "2026-09-08", "Localiza", 300.0));

    // No coordinates registered, so the car leg falls back to the
    // default four-hour estimate.
    let coords = CityCoords::new();
    let engine = Engine::new(&catalog, &coords).with_config(deterministic());
    let request = OptimizationRequest::new("GRU", &["SCL"], 1000.0, 0.5);

    let results = engine.solve(&request).expect("solvable");
    assert_eq!(results.len(), 1);
    let modes: Vec<Mode> = results[0].legs().iter().map(|l| l.mode()).collect();
    assert_eq!(modes, vec![Mode::Flight, Mode::Car]);
    assert_eq!(results[0].total_time(), 300 + 240);
    assert!(results[0].is_closed());
}

#[test]
fn two_destinations_prefer_closed_orderings() {
    let mut catalog = InMemoryCatalog::new();
    catalog.add_flight(Flight::one_way("A", "B", "2026-09-01", "1h 00m", 100.0));
    catalog.add_flight(Flight::one_way("B", "C", "2026-09-03", "1h 00m", 100.0));
    catalog.add_flight(Flight::one_way("C", "A", "2026-09-05", "1h 00m", 100.0));

    let coords = CityCoords::new();
    let engine = Engine::new(&catalog, &coords).with_config(deterministic());
    let request = OptimizationRequest::new("A", &["B", "C"], 1000.0, 0.5);

    let results = engine.solve(&request).expect("solvable");
    assert!(results.iter().all(|it| it.is_chained()));
    assert_eq!(results[0].final_city(), Some("A"));
    assert!((results[0].total_cost() - 300.0).abs() < 1e-9);
}

#[test]
fn solve_is_idempotent() {
    let mut catalog = InMemoryCatalog::new();
    catalog.add_flight(Flight::one_way("A", "B", "2026-09-01", "1h 00m", 100.0));
    catalog.add_flight(Flight::one_way("A", "B", "2026-09-01", "3h 00m", 80.0));
    catalog.add_flight(Flight::one_way("B", "A", "2026-09-05", "1h 00m", 120.0));
    catalog.add_flight(Flight::one_way("B", "A", "2026-09-05", "2h 00m", 90.0));

    let coords = CityCoords::new();
    let engine = Engine::new(&catalog, &coords).with_config(deterministic());
    let request = OptimizationRequest::new("A", &["B"], 500.0, 0.4);

    let first = engine.solve(&request).expect("solvable");
    let second = engine.solve(&request).expect("solvable");
    let key = |r: &[u_itinerary::models::CandidateItinerary]| {
        r.iter()
            .map(|it| (it.total_cost().to_bits(), it.total_time()))
            .collect::<Vec<_>>()
    };
    assert_eq!(key(&first), key(&second));
}

#[test]
fn results_respect_budget_and_chain() {
    let mut catalog = InMemoryCatalog::new();
    for (price, dur) in [(100.0, "1h 00m"), (250.0, "0h 40m"), (60.0, "2h 30m")] {
        catalog.add_flight(Flight::one_way("A", "B", "2026-09-01", dur, price));
        catalog.add_flight(Flight::one_way("B", "A", "2026-09-05", dur, price));
    }

    let coords = CityCoords::new();
    let engine = Engine::new(&catalog, &coords).with_config(deterministic());
    let request = OptimizationRequest::new("A", &["B"], 400.0, 0.5);

    let results = engine.solve(&request).expect("solvable");
    assert!(!results.is_empty());
    for it in &results {
        assert!(it.total_cost() <= 400.0);
        assert!(it.is_chained());
        assert_eq!(it.departure_city(), Some("A"));
    }
}

proptest! {
    #[test]
    fn parse_duration_never_panics(s in "\\PC{0,24}") {
        let _ = parse_duration(&s);
    }

    #[test]
    fn format_then_parse_round_trips(minutes in 0u32..100_000) {
        prop_assert_eq!(parse_duration(&format_minutes(minutes)), minutes);
    }

    #[test]
    fn front_members_are_not_dominated(
        points in prop::collection::vec((0.0f64..10_000.0, 0.0f64..10_000.0), 1..40)
    ) {
        let front = pareto::front_indices(&points);
        prop_assert!(!front.is_empty());
        for &i in &front {
            for &p in &points {
                prop_assert!(!pareto::dominates(p, points[i]) || p == points[i]);
            }
        }
    }
}
