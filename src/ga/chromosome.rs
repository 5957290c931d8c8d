//! Binary leg-selection chromosome.

use rand::Rng;

/// A candidate leg selection: one bit per catalog option, flights first,
/// in snapshot order.
///
/// Carries its two objective values (penalized cost, time) once
/// evaluated; both are minimized.
///
/// # Examples
///
/// ```
/// use u_itinerary::ga::LegSelection;
///
/// let sel = LegSelection::new(vec![true, false, true]);
/// assert_eq!(sel.selected_indices(), vec![0, 2]);
/// assert_eq!(sel.objectives(), [f64::INFINITY, f64::INFINITY]);
/// ```
#[derive(Debug, Clone)]
pub struct LegSelection {
    bits: Vec<bool>,
    objectives: [f64; 2],
}

impl LegSelection {
    /// Creates a selection from explicit bits, unevaluated.
    pub fn new(bits: Vec<bool>) -> Self {
        Self {
            bits,
            objectives: [f64::INFINITY, f64::INFINITY],
        }
    }

    /// Creates a uniformly random selection of `len` bits.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self::new((0..len).map(|_| rng.random_bool(0.5)).collect())
    }

    /// The selection bits.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Mutable access to the selection bits. Invalidates objectives until
    /// the next evaluation.
    pub fn bits_mut(&mut self) -> &mut Vec<bool> {
        &mut self.bits
    }

    /// Number of bits (catalog options).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the chromosome has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Indices of the selected options.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
            .collect()
    }

    /// Objective values `[penalized_cost, time]`; infinity until evaluated.
    pub fn objectives(&self) -> [f64; 2] {
        self.objectives
    }

    /// Stores the evaluated objectives.
    pub fn set_objectives(&mut self, cost: f64, time: f64) {
        self.objectives = [cost, time];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_unevaluated() {
        let sel = LegSelection::new(vec![false, true]);
        assert_eq!(sel.len(), 2);
        assert!(sel.objectives().iter().all(|o| o.is_infinite()));
    }

    #[test]
    fn test_selected_indices() {
        let sel = LegSelection::new(vec![true, false, true, false]);
        assert_eq!(sel.selected_indices(), vec![0, 2]);
    }

    #[test]
    fn test_set_objectives() {
        let mut sel = LegSelection::new(vec![true]);
        sel.set_objectives(900.0, 600.0);
        assert_eq!(sel.objectives(), [900.0, 600.0]);
    }

    #[test]
    fn test_random_has_expected_len() {
        let mut rng = StdRng::seed_from_u64(1);
        let sel = LegSelection::random(16, &mut rng);
        assert_eq!(sel.len(), 16);
    }

    #[test]
    fn test_bits_mut() {
        let mut sel = LegSelection::new(vec![false, false]);
        sel.bits_mut()[1] = true;
        assert_eq!(sel.selected_indices(), vec![1]);
    }
}
