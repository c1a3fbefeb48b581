use crate::core::errors::{GoalError, GoalResult};

/// Read-only source of per-exemplar channel values.
///
/// Goals only ever read from a feature set, and a forest may call them from
/// many threads at once, hence the `Sync` bound.
pub trait FeatureSet: Sync {
    fn channel_count(&self) -> usize;

    fn exemplar_count(&self) -> usize;

    /// Discrete value of `exemplar` in `channel`, `None` when either is out of range.
    fn discrete_value(&self, channel: usize, exemplar: usize) -> Option<i64>;

    fn check_channel(&self, channel: usize) -> GoalResult<()> {
        let channels = self.channel_count();
        if channel < channels {
            Ok(())
        } else {
            Err(GoalError::InvalidChannel { channel, channels })
        }
    }

    /// Values of `channel` for every exemplar in `index`, in index order.
    fn discrete_values(&self, channel: usize, index: &[usize]) -> GoalResult<Vec<i64>> {
        self.check_channel(channel)?;
        index
            .iter()
            .map(|&exemplar| {
                self.discrete_value(channel, exemplar)
                    .ok_or(GoalError::ExemplarOutOfRange {
                        exemplar,
                        exemplars: self.exemplar_count(),
                    })
            })
            .collect()
    }
}

/// Column-major in-memory feature set of discrete channels.
#[derive(Debug, Clone, Default)]
pub struct DiscreteChannels {
    channels: Vec<Vec<i64>>,
    exemplars: usize,
}

impl DiscreteChannels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a feature set from whole channels. Every channel must cover the
    /// same exemplars; the first one fixes the population size.
    pub fn from_channels(channels: Vec<Vec<i64>>) -> GoalResult<Self> {
        let mut set = Self::new();
        for channel in channels {
            set.push_channel(channel)?;
        }
        Ok(set)
    }

    /// Convenience for the common single-channel case of a label column.
    pub fn from_labels(labels: Vec<i64>) -> Self {
        Self {
            exemplars: labels.len(),
            channels: vec![labels],
        }
    }

    /// Appends a channel and returns its index.
    pub fn push_channel(&mut self, values: Vec<i64>) -> GoalResult<usize> {
        if self.channels.is_empty() {
            self.exemplars = values.len();
        } else if values.len() != self.exemplars {
            return Err(GoalError::ShapeMismatch {
                got: values.len(),
                expected: self.exemplars,
            });
        }
        self.channels.push(values);
        Ok(self.channels.len() - 1)
    }

    pub fn channel(&self, index: usize) -> Option<&[i64]> {
        self.channels.get(index).map(Vec::as_slice)
    }
}

impl FeatureSet for DiscreteChannels {
    fn channel_count(&self) -> usize {
        self.channels.len()
    }

    fn exemplar_count(&self) -> usize {
        self.exemplars
    }

    #[inline]
    fn discrete_value(&self, channel: usize, exemplar: usize) -> Option<i64> {
        self.channels.get(channel)?.get(exemplar).copied()
    }
}
