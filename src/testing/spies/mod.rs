mod counting_feature_set;

pub use counting_feature_set::{CountingFeatureSet, LookupSpyHandle};
