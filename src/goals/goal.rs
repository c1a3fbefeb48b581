use crate::core::{FeatureSet, GoalResult, Weights};
use crate::evaluation::LeafError;
use crate::goals::answer::{AnswerCatalog, AnswerOutput, AnswerRequest, best_only};

/// What a decision forest optimises for.
///
/// A goal decides which statistics are kept at each node, how impure those
/// statistics are (driving test selection while a tree grows), how the
/// statistics from the leaves a feature reaches become an answer, and how a
/// held-out set scores a trained leaf.
///
/// Implementations hold only fixed configuration. Every operation is a pure
/// function of its inputs and returns fresh values, so a forest can call them
/// concurrently across nodes and trees without locking. Cloning a goal gives
/// an independent copy of that configuration.
pub trait Goal: Clone + Send + Sync {
    /// Training-time statistics stored at a node.
    type Stats;
    /// Held-out statistics stored at a leaf.
    type Summary;
    /// One answer value; which variant is produced depends on the answer type.
    type Answer;

    /// Statistics for the exemplars of `es` listed in `index`.
    fn stats(
        &self,
        es: &dyn FeatureSet,
        index: &[usize],
        weights: Weights<'_>,
    ) -> GoalResult<Self::Stats>;

    /// Copy of `stats` with the exemplars in `index` folded in. Those exemplars
    /// must not already be counted in `stats`.
    fn update_stats(
        &self,
        stats: &Self::Stats,
        es: &dyn FeatureSet,
        index: &[usize],
        weights: Weights<'_>,
    ) -> GoalResult<Self::Stats>;

    /// Impurity of a node; lower is purer.
    fn entropy(&self, stats: &Self::Stats) -> GoalResult<f64>;

    /// Answer types this goal can produce. `"best"` is always present.
    fn answer_types(&self) -> AnswerCatalog {
        best_only()
    }

    /// Combines the statistics of the leaves a feature reached (one per tree)
    /// into the requested answer(s).
    fn answer(
        &self,
        stats_list: &[Self::Stats],
        which: AnswerRequest<'_>,
    ) -> GoalResult<AnswerOutput<Self::Answer>>;

    /// Summary of the held-out exemplars that reached a leaf.
    fn summary(
        &self,
        es: &dyn FeatureSet,
        index: &[usize],
        weights: Weights<'_>,
    ) -> GoalResult<Self::Summary>;

    fn update_summary(
        &self,
        summary: &Self::Summary,
        es: &dyn FeatureSet,
        index: &[usize],
        weights: Weights<'_>,
    ) -> GoalResult<Self::Summary>;

    /// Error of the held-out `summary` against the model learnt in `stats`,
    /// with the weight to use when averaging over leaves.
    fn error(&self, stats: &Self::Stats, summary: &Self::Summary) -> GoalResult<LeafError>;
}
