//! Goals for decision forests.
//!
//! A goal defines what a tree optimises: the statistics kept at each node,
//! the entropy used to pick split tests, how leaf statistics from many trees
//! become an answer, and how held-out exemplars score a trained leaf.

pub mod core;
pub mod evaluation;
pub mod goals;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use crate::core::{
    ClassHistogram, DiscreteChannels, FeatureSet, GoalError, GoalResult, Stats, Summary, Weights,
};
pub use crate::evaluation::{LeafError, WeightedError};
pub use crate::goals::{AnswerOutput, AnswerRequest, ClassAnswer, Classification, Goal};
