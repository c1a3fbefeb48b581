use crate::core::FeatureSet;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

pub struct LookupSpyHandle(Arc<AtomicU64>);
impl LookupSpyHandle {
    pub fn lookups(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Wraps a feature set and counts every per-exemplar lookup made through it.
pub struct CountingFeatureSet<F> {
    inner: F,
    lookups: Arc<AtomicU64>,
}

impl<F: FeatureSet> CountingFeatureSet<F> {
    pub fn new(inner: F) -> (Self, LookupSpyHandle) {
        let counter = Arc::new(AtomicU64::new(0));
        (
            Self {
                inner,
                lookups: counter.clone(),
            },
            LookupSpyHandle(counter),
        )
    }
}

impl<F: FeatureSet> FeatureSet for CountingFeatureSet<F> {
    fn channel_count(&self) -> usize {
        self.inner.channel_count()
    }

    fn exemplar_count(&self) -> usize {
        self.inner.exemplar_count()
    }

    fn discrete_value(&self, channel: usize, exemplar: usize) -> Option<i64> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.inner.discrete_value(channel, exemplar)
    }
}
