//! Itinerary sequencing: ordering an unordered set of chosen legs.
//!
//! Both alternate solvers (evolutionary and exact) select legs as an
//! unordered set; this module reconstructs the travel order by chaining
//! legs from the trip origin, and validates destination coverage.

use crate::models::{CandidateItinerary, TransportOption};

/// Orders an unordered set of legs into a chained itinerary.
///
/// Starting at `origin`, repeatedly appends the first remaining leg whose
/// origin equals the current city (ties broken by input order), advances
/// to that leg's destination, and stops when no leg matches. Legs that
/// never connect are left out.
///
/// Returns `None` if no leg departs from the origin at all.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Flight, TransportOption};
/// use u_itinerary::sequence::sequence_legs;
///
/// let legs = vec![
///     TransportOption::Flight(Flight::one_way("B", "C", "d", "1h", 1.0)),
///     TransportOption::Flight(Flight::one_way("A", "B", "d", "1h", 1.0)),
/// ];
/// let it = sequence_legs(legs, "A").unwrap();
/// assert_eq!(it.legs()[0].origin(), "A");
/// assert_eq!(it.legs()[1].origin(), "B");
/// ```
pub fn sequence_legs(legs: Vec<TransportOption>, origin: &str) -> Option<CandidateItinerary> {
    let mut pool: Vec<Option<TransportOption>> = legs.into_iter().map(Some).collect();
    let mut ordered = Vec::new();
    let mut current = origin.to_string();

    loop {
        let next = pool.iter_mut().find_map(|slot| {
            if slot.as_ref().is_some_and(|l| l.origin() == current) {
                slot.take()
            } else {
                None
            }
        });
        match next {
            Some(leg) => {
                current = leg.destination().to_string();
                ordered.push(leg);
            }
            None => break,
        }
    }

    if ordered.is_empty() {
        None
    } else {
        Some(CandidateItinerary::from_legs(ordered))
    }
}

/// Checks that an itinerary starts at the trip origin and visits every
/// mandatory destination.
///
/// A destination counts as visited when it appears as a leg's destination,
/// or as an intermediate leg's origin. Returning to the origin is not
/// required (open tours are valid).
pub fn covers_destinations(
    itinerary: &CandidateItinerary,
    origin: &str,
    destinations: &[String],
) -> bool {
    if itinerary.departure_city() != Some(origin) {
        return false;
    }

    destinations.iter().all(|dest| {
        itinerary.legs().iter().any(|leg| {
            leg.destination() == dest || (leg.origin() != origin && leg.origin() == dest)
        })
    })
}
