mod leaf_error;
mod weighted_error;

pub use leaf_error::LeafError;
pub use weighted_error::WeightedError;
