use thiserror::Error;

/// Why a request could not be solved.
///
/// Each variant maps to a distinct actionable condition: the caller can
/// tell a data problem ([`SolveError::NoData`]) from a structural one
/// ([`SolveError::NoReturnPath`], [`SolveError::NoViableRoute`]) from a
/// budget one ([`SolveError::OverBudget`], which carries the figure the
/// budget would need to reach).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The catalog produced no flights for the requested cities.
    #[error("no flight data available for the requested cities")]
    NoData,

    /// No flight arrives back at the origin, so no round trip can be
    /// assembled.
    #[error("no return path to the origin city")]
    NoReturnPath,

    /// Connectivity rules out every ordering of the destinations.
    #[error("no viable route found after trying {attempted} orderings")]
    NoViableRoute {
        /// Number of orderings tried and rejected.
        attempted: usize,
    },

    /// Every complete itinerary costs more than the budget.
    #[error("{}", over_budget_message(.cheapest))]
    OverBudget {
        /// Cost of the cheapest itinerary found, if any was priced.
        cheapest: Option<f64>,
    },
}

fn over_budget_message(cheapest: &Option<f64>) -> String {
    match cheapest {
        Some(cost) => format!("cheapest itinerary costs {cost:.2}, over budget"),
        None => "no itinerary within budget".to_string(),
    }
}
