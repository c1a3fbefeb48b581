mod answer_kind;
mod classification;
pub mod entropy;
mod parameters;

pub use answer_kind::{ClassAnswer, ClassAnswerKind};
pub use classification::Classification;
pub use entropy::{MASS_EPSILON, histogram_entropy};
pub use parameters::{ClassificationParameters, GoalChoice, GoalKind, build_goal};
