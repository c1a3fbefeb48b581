use crate::core::{ClassHistogram, FeatureSet, GoalError, GoalResult, Stats, Summary, Weights};
use crate::evaluation::LeafError;
use crate::goals::answer::{AnswerCatalog, AnswerOutput, AnswerRequest};
use crate::goals::classification::answer_kind::{ClassAnswer, ClassAnswerKind};
use crate::goals::classification::entropy::histogram_entropy;
use crate::goals::classification::parameters::ClassificationParameters;
use crate::goals::goal::Goal;
use tracing::{debug, trace};

/// The standard decision forest goal: predict a single discrete class.
///
/// Training exemplars carry their class in one discrete channel, with labels
/// densely packed in `[0, class_count)`. Node statistics are weighted class
/// histograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    class_count: usize,
    channel: usize,
}

impl Classification {
    /// Checks only `class_count`; use [`Classification::for_feature_set`] to
    /// also check `channel` against a feature set.
    pub fn new(class_count: usize, channel: usize) -> GoalResult<Self> {
        if class_count == 0 {
            return Err(GoalError::InvalidClassCount { class_count });
        }
        debug!(class_count, channel, "classification goal configured");
        Ok(Self {
            class_count,
            channel,
        })
    }

    /// Like [`Classification::new`], additionally checking that `channel`
    /// exists in the feature set the goal will be trained on.
    pub fn for_feature_set(
        class_count: usize,
        channel: usize,
        es: &dyn FeatureSet,
    ) -> GoalResult<Self> {
        es.check_channel(channel)?;
        Self::new(class_count, channel)
    }

    pub fn from_parameters(params: &ClassificationParameters) -> GoalResult<Self> {
        Self::new(params.class_count, params.channel)
    }

    pub fn parameters(&self) -> ClassificationParameters {
        ClassificationParameters {
            class_count: self.class_count,
            channel: self.channel,
        }
    }

    #[inline]
    pub fn class_count(&self) -> usize {
        self.class_count
    }

    #[inline]
    pub fn channel(&self) -> usize {
        self.channel
    }

    /// Weighted per-class totals for `index`, always `class_count` long.
    fn class_totals(
        &self,
        es: &dyn FeatureSet,
        index: &[usize],
        weights: Weights<'_>,
    ) -> GoalResult<Vec<f64>> {
        let mut totals = vec![0.0; self.class_count];
        if index.is_empty() {
            return Ok(totals);
        }

        let labels = es.discrete_values(self.channel, index)?;
        for (&exemplar, &label) in index.iter().zip(&labels) {
            let class = usize::try_from(label)
                .ok()
                .filter(|&c| c < self.class_count)
                .ok_or(GoalError::LabelOutOfRange {
                    exemplar,
                    label,
                    class_count: self.class_count,
                })?;
            totals[class] += weights.weight_of(exemplar)?;
        }
        Ok(totals)
    }

    fn accumulate(
        &self,
        es: &dyn FeatureSet,
        index: &[usize],
        weights: Weights<'_>,
    ) -> GoalResult<ClassHistogram> {
        let totals = self.class_totals(es, index, weights)?;
        Ok(ClassHistogram::from_counts(
            totals.into_iter().map(|t| t as f32).collect(),
        ))
    }

    fn extend(
        &self,
        existing: &ClassHistogram,
        es: &dyn FeatureSet,
        index: &[usize],
        weights: Weights<'_>,
    ) -> GoalResult<ClassHistogram> {
        existing.ensure_classes(self.class_count)?;
        let totals = self.class_totals(es, index, weights)?;
        let mut updated = existing.clone();
        updated.add_counts(&totals)?;
        Ok(updated)
    }

    /// Mean of the per-leaf class distributions. Every leaf counts equally
    /// however many exemplars reached it; leaves with no mass are skipped.
    fn combined_distribution(&self, stats_list: &[Stats]) -> GoalResult<Vec<f32>> {
        if stats_list.is_empty() {
            return Err(GoalError::NoStatistics);
        }

        let mut prob = vec![0.0f64; self.class_count];
        let mut voters = 0usize;
        for stats in stats_list {
            stats.histogram().ensure_classes(self.class_count)?;
            match stats.histogram().distribution() {
                Some(dist) => {
                    for (acc, p) in prob.iter_mut().zip(dist) {
                        *acc += p;
                    }
                    voters += 1;
                }
                None => trace!("skipping leaf with an empty histogram"),
            }
        }
        if voters == 0 {
            return Err(GoalError::DegenerateDistribution);
        }

        let total: f64 = prob.iter().sum();
        Ok(prob.into_iter().map(|p| (p / total) as f32).collect())
    }
}

/// Index of the largest entry; the lowest index wins ties.
fn arg_max(values: &[f32]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}

impl Goal for Classification {
    type Stats = Stats;
    type Summary = Summary;
    type Answer = ClassAnswer;

    fn stats(
        &self,
        es: &dyn FeatureSet,
        index: &[usize],
        weights: Weights<'_>,
    ) -> GoalResult<Stats> {
        self.accumulate(es, index, weights).map(Stats::new)
    }

    fn update_stats(
        &self,
        stats: &Stats,
        es: &dyn FeatureSet,
        index: &[usize],
        weights: Weights<'_>,
    ) -> GoalResult<Stats> {
        self.extend(stats.histogram(), es, index, weights)
            .map(Stats::new)
    }

    fn entropy(&self, stats: &Stats) -> GoalResult<f64> {
        stats.histogram().ensure_classes(self.class_count)?;
        Ok(histogram_entropy(stats.counts()))
    }

    fn answer_types(&self) -> AnswerCatalog {
        ClassAnswerKind::catalog()
    }

    fn answer(
        &self,
        stats_list: &[Stats],
        which: AnswerRequest<'_>,
    ) -> GoalResult<AnswerOutput<ClassAnswer>> {
        let kinds = which.try_map(ClassAnswerKind::parse)?;

        // Both answer types come from the same combined distribution.
        let prob = if kinds.is_empty() {
            Vec::new()
        } else {
            self.combined_distribution(stats_list)?
        };

        Ok(kinds.map(|kind| match kind {
            ClassAnswerKind::Best => ClassAnswer::Best(arg_max(&prob)),
            ClassAnswerKind::Prob => ClassAnswer::Prob(prob.clone()),
        }))
    }

    fn summary(
        &self,
        es: &dyn FeatureSet,
        index: &[usize],
        weights: Weights<'_>,
    ) -> GoalResult<Summary> {
        self.accumulate(es, index, weights).map(Summary::new)
    }

    fn update_summary(
        &self,
        summary: &Summary,
        es: &dyn FeatureSet,
        index: &[usize],
        weights: Weights<'_>,
    ) -> GoalResult<Summary> {
        self.extend(summary.histogram(), es, index, weights)
            .map(Summary::new)
    }

    /// Treats the training histogram as the distribution answers are drawn
    /// from: the error is the mean probability of getting each held-out
    /// exemplar wrong, weighted by how many held-out exemplars there were.
    fn error(&self, stats: &Stats, summary: &Summary) -> GoalResult<LeafError> {
        stats.histogram().ensure_classes(self.class_count)?;
        summary.histogram().ensure_classes(self.class_count)?;

        let count = summary.histogram().total();
        if count <= 0.0 {
            debug!("leaf has no held-out exemplars, reporting zero weight");
            return Ok(LeafError::uncovered());
        }

        let dist = stats
            .histogram()
            .distribution()
            .ok_or(GoalError::DegenerateDistribution)?;
        let missed: f64 = dist
            .iter()
            .zip(summary.counts())
            .map(|(&p, &n)| (1.0 - p) * n as f64)
            .sum();

        Ok(LeafError::new(missed / count, count))
    }
}
