use crate::evaluation::leaf_error::LeafError;
use tracing::trace;

/// Running weighted average of leaf errors.
///
/// Leaves with no held-out coverage (zero weight) are skipped, so the result
/// is only ever influenced by leaves that were actually tested.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightedError {
    weighted_sum: f64,
    weight_sum: f64,
    leaves: u64,
}

impl WeightedError {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&mut self, leaf: LeafError) {
        if !leaf.is_covered() || !leaf.error.is_finite() {
            trace!(weight = leaf.weight, error = leaf.error, "skipping leaf without usable coverage");
            return;
        }
        self.weighted_sum += leaf.error * leaf.weight;
        self.weight_sum += leaf.weight;
        self.leaves += 1;
    }

    /// Folds in another accumulator, e.g. one built for a different tree.
    pub fn merge(&mut self, other: &WeightedError) {
        self.weighted_sum += other.weighted_sum;
        self.weight_sum += other.weight_sum;
        self.leaves += other.leaves;
    }

    /// Weighted mean error, `None` until a covered leaf has been added.
    pub fn mean(&self) -> Option<f64> {
        if self.weight_sum > 0.0 {
            Some(self.weighted_sum / self.weight_sum)
        } else {
            None
        }
    }

    pub fn total_weight(&self) -> f64 {
        self.weight_sum
    }

    pub fn leaves_counted(&self) -> u64 {
        self.leaves
    }
}

impl FromIterator<LeafError> for WeightedError {
    fn from_iter<I: IntoIterator<Item = LeafError>>(iter: I) -> Self {
        let mut acc = WeightedError::new();
        acc.extend(iter);
        acc
    }
}

impl Extend<LeafError> for WeightedError {
    fn extend<I: IntoIterator<Item = LeafError>>(&mut self, iter: I) {
        for leaf in iter {
            self.add(leaf);
        }
    }
}
