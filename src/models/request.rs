//! Optimization request.

use serde::{Deserialize, Serialize};

/// One itinerary optimization request: where the trip starts, which cities
/// must be visited, the budget, and the cost-vs-time preference.
///
/// `alpha` trades off the two objectives: 1.0 means pure cost preference,
/// 0.0 pure time preference. Values outside [0, 1] are clamped.
///
/// Immutable for the duration of a solve.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::OptimizationRequest;
///
/// let req = OptimizationRequest::new("GRU", &["SCL", "EZE"], 5000.0, 0.7);
/// assert_eq!(req.origin(), "GRU");
/// assert_eq!(req.destinations(), &["SCL".to_string(), "EZE".to_string()]);
/// assert_eq!(req.allowed_cities().len(), 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationRequest {
    origin: String,
    destinations: Vec<String>,
    budget: f64,
    alpha: f64,
}

impl OptimizationRequest {
    /// Creates a new request. `alpha` is clamped to [0, 1].
    pub fn new(origin: &str, destinations: &[&str], budget: f64, alpha: f64) -> Self {
        Self {
            origin: origin.to_string(),
            destinations: destinations.iter().map(|d| d.to_string()).collect(),
            budget,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Trip origin city.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Mandatory destination cities.
    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    /// Maximum total cost in currency units.
    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Cost-vs-time preference weight in [0, 1] (1 = cost, 0 = time).
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Origin plus destinations: the city allow-list for catalog filtering.
    pub fn allowed_cities(&self) -> Vec<String> {
        let mut cities = Vec::with_capacity(self.destinations.len() + 1);
        cities.push(self.origin.clone());
        cities.extend(self.destinations.iter().cloned());
        cities
    }
}
