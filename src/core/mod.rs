pub mod errors;
pub mod feature_set;
pub mod histogram;
pub mod weights;

pub use errors::{GoalError, GoalResult};
pub use feature_set::{DiscreteChannels, FeatureSet};
pub use histogram::{ClassHistogram, Stats, Summary};
pub use weights::Weights;
