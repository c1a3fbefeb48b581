pub mod answer;
pub mod classification;
mod goal;

pub use answer::{AnswerCatalog, AnswerOutput, AnswerRequest};
pub use classification::{Classification, ClassAnswer, ClassAnswerKind};
pub use goal::Goal;
