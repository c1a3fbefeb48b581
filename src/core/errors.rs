use std::io;

/// Failures raised by goals and the entities they produce.
#[derive(Debug, thiserror::Error)]
pub enum GoalError {
    #[error("class_count must be at least 1, got {class_count}")]
    InvalidClassCount { class_count: usize },

    #[error("channel {channel} does not exist, feature set has {channels} channels")]
    InvalidChannel { channel: usize, channels: usize },

    /// Encoded accumulator whose byte length does not match the configured class count.
    #[error("malformed accumulator: {len} bytes, expected {expected}")]
    MalformedAccumulator { len: usize, expected: usize },

    #[error("accumulator entry {index} is {value}, expected a finite non-negative count")]
    InvalidAccumulatorEntry { index: usize, value: f32 },

    #[error("shape mismatch: {got} entries, expected {expected}")]
    ShapeMismatch { got: usize, expected: usize },

    #[error("exemplar {exemplar} has label {label}, outside [0, {class_count})")]
    LabelOutOfRange {
        exemplar: usize,
        label: i64,
        class_count: usize,
    },

    #[error("exemplar {exemplar} is out of range, feature set holds {exemplars}")]
    ExemplarOutOfRange { exemplar: usize, exemplars: usize },

    #[error("no weight supplied for exemplar {exemplar} ({len} weights given)")]
    MissingWeight { exemplar: usize, len: usize },

    #[error("weight {weight} for exemplar {exemplar} is not a finite non-negative number")]
    InvalidWeight { exemplar: usize, weight: f32 },

    #[error("histogram has zero total mass, cannot form a distribution")]
    DegenerateDistribution,

    #[error("no statistics supplied to answer from")]
    NoStatistics,

    #[error("unknown answer type '{name}'")]
    UnknownAnswerType { name: String },

    #[error("accumulator i/o failed")]
    Io(#[from] io::Error),

    #[error("invalid goal configuration")]
    Config(#[from] serde_json::Error),
}

pub type GoalResult<T> = Result<T, GoalError>;
