use std::fmt;

/// Pipeline stage the solver is currently executing. Logged at each
/// transition so a failing request can be localized from the debug log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStage {
    /// Loading and normalizing the option snapshot.
    Loading,
    /// Searching destination permutations for servable orderings.
    TopologySearch,
    /// Enumerating per-slot option combinations.
    Generating,
    /// Collapsing structurally identical candidates.
    FilteringDedup,
    /// Dropping candidates over the hard budget.
    BudgetFilter,
    /// Extracting the non-dominated front (with near-front extension).
    Pareto,
    /// Ordering the selected pool by the preference weight.
    Ranking,
    /// Evolutionary search for additional alternatives.
    Fallback,
    /// Solve finished with a ranked result.
    Done,
}

impl fmt::Display for SolveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolveStage::Loading => "loading",
            SolveStage::TopologySearch => "topology-search",
            SolveStage::Generating => "generating",
            SolveStage::FilteringDedup => "filtering-dedup",
            SolveStage::BudgetFilter => "budget-filter",
            SolveStage::Pareto => "pareto",
            SolveStage::Ranking => "ranking",
            SolveStage::Fallback => "fallback",
            SolveStage::Done => "done",
        };
        f.write_str(name)
    }
}
