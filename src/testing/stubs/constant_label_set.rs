use crate::core::FeatureSet;

/// Feature set where every exemplar carries the same label in every channel.
#[derive(Debug, Clone, Copy)]
pub struct ConstantLabelSet {
    pub label: i64,
    pub exemplars: usize,
    pub channels: usize,
}

impl ConstantLabelSet {
    pub fn new(label: i64, exemplars: usize) -> Self {
        Self {
            label,
            exemplars,
            channels: 1,
        }
    }
}

impl FeatureSet for ConstantLabelSet {
    fn channel_count(&self) -> usize {
        self.channels
    }

    fn exemplar_count(&self) -> usize {
        self.exemplars
    }

    fn discrete_value(&self, channel: usize, exemplar: usize) -> Option<i64> {
        (channel < self.channels && exemplar < self.exemplars).then_some(self.label)
    }
}
