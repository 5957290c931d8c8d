//! Evolutionary solver configuration.

/// Configuration for the evolutionary fallback solver.
///
/// # Defaults
///
/// ```
/// use u_itinerary::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.max_generations, 200);
/// ```
///
/// # Builder pattern
///
/// ```
/// use u_itinerary::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_mutation_rate(0.02)
///     .with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Probability of applying two-point crossover to a parent pair
    /// (0.0–1.0). When not applied, the first parent is cloned.
    pub crossover_rate: f64,

    /// Per-bit flip probability during mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Penalty multiplier applied to cost overage beyond the budget.
    ///
    /// The budget is a soft constraint during the search: overage is
    /// penalized proportionally rather than forbidden outright, keeping
    /// the search space connected.
    pub budget_penalty: f64,

    /// Random seed for reproducibility. `None` uses a random seed — the
    /// fallback solver is explicitly non-deterministic unless seeded.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            max_generations: 200,
            crossover_rate: 0.9,
            mutation_rate: 0.05,
            budget_penalty: 10.0,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the budget-overage penalty multiplier.
    pub fn with_budget_penalty(mut self, penalty: f64) -> Self {
        self.budget_penalty = penalty.max(0.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        Ok(())
    }
}
