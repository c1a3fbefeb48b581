use serde::{Deserialize, Serialize};

/// Error of one leaf on its held-out exemplars, and the weight that leaf
/// carries when errors are averaged across a tree or forest.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LeafError {
    pub error: f64,
    pub weight: f64,
}

impl LeafError {
    pub fn new(error: f64, weight: f64) -> Self {
        Self { error, weight }
    }

    /// Leaf reached by no held-out exemplar; contributes nothing to an average.
    pub fn uncovered() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_covered(&self) -> bool {
        self.weight > 0.0
    }
}

impl From<LeafError> for (f64, f64) {
    fn from(e: LeafError) -> Self {
        (e.error, e.weight)
    }
}
