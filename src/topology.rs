//! Route topology search: which orderings of the destinations are servable.
//!
//! Tries every permutation of the mandatory destinations. For each
//! permutation the closed tour (returning to the origin) is preferred; if
//! any consecutive pair in it lacks an option, the open tour (no return
//! leg) is tried instead. Exhaustive permutation search is acceptable here
//! because destination sets are small (a handful of cities); a
//! shortest-Hamiltonian-path heuristic is the extension point for larger
//! inputs.

use log::debug;

use crate::catalog::Snapshot;

/// One viable ordering of cities for the trip.
///
/// Always starts at the origin. Closed orderings end back at the origin;
/// open orderings end at the last destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteOrdering {
    cities: Vec<String>,
    closed: bool,
}

impl RouteOrdering {
    /// The city sequence, origin first (and last, when closed).
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Returns `true` if this ordering returns to the origin.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Consecutive city pairs: the leg slots of this ordering.
    pub fn slots(&self) -> Vec<(&str, &str)> {
        self.cities
            .windows(2)
            .map(|w| (w[0].as_str(), w[1].as_str()))
            .collect()
    }
}

/// Outcome of the topology search.
#[derive(Debug, Clone)]
pub struct TopologyResult {
    /// Orderings servable by the connectivity graph, in permutation order.
    pub viable: Vec<RouteOrdering>,
    /// Orderings that were tried and rejected, for diagnostics.
    pub attempted: Vec<Vec<String>>,
}

/// Searches destination permutations for servable orderings.
///
/// For each permutation the closed tour is accepted if every consecutive
/// pair is connected in `snapshot`; otherwise the open tour is tried under
/// the same test. An empty `viable` list means the route is infeasible.
pub fn viable_orderings(
    origin: &str,
    destinations: &[String],
    snapshot: &Snapshot,
) -> TopologyResult {
    let mut viable = Vec::new();
    let mut attempted = Vec::new();

    for perm in permutations(destinations) {
        let mut closed: Vec<String> = Vec::with_capacity(perm.len() + 2);
        closed.push(origin.to_string());
        closed.extend(perm.iter().cloned());
        closed.push(origin.to_string());

        if all_connected(&closed, snapshot) {
            debug!("viable closed ordering: {}", closed.join(" -> "));
            viable.push(RouteOrdering {
                cities: closed,
                closed: true,
            });
            continue;
        }
        attempted.push(closed);

        let mut open: Vec<String> = Vec::with_capacity(perm.len() + 1);
        open.push(origin.to_string());
        open.extend(perm.into_iter());

        if all_connected(&open, snapshot) {
            debug!("viable open ordering: {}", open.join(" -> "));
            viable.push(RouteOrdering {
                cities: open,
                closed: false,
            });
        } else {
            attempted.push(open);
        }
    }

    TopologyResult { viable, attempted }
}

fn all_connected(cities: &[String], snapshot: &Snapshot) -> bool {
    cities.windows(2).all(|w| snapshot.is_connected(&w[0], &w[1]))
}

/// All permutations of `items` in lexicographic position order (the order
/// in which elements appear in the input).
fn permutations(items: &[String]) -> Vec<Vec<String>> {
    if items.is_empty() {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let mut rest: Vec<String> = items.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, item.clone());
            out.push(tail);
        }
    }
    out
}
