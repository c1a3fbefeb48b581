use crate::core::{GoalError, GoalResult};
use crate::goals::answer::AnswerCatalog;
use std::str::FromStr;
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display, IntoStaticStr, EnumMessage)]
#[strum(serialize_all = "lowercase")]
pub enum ClassAnswerKind {
    #[strum(message = "An integer indexing the class the feature most likely belongs to given the model.")]
    Best,
    #[strum(
        message = "A categorical distribution over class membership, as f32 probabilities, one per class."
    )]
    Prob,
}

impl ClassAnswerKind {
    pub fn parse(name: &str) -> GoalResult<Self> {
        Self::from_str(name).map_err(|_| GoalError::UnknownAnswerType {
            name: name.to_string(),
        })
    }

    pub fn catalog() -> AnswerCatalog {
        Self::iter()
            .map(|kind| (kind.into(), kind.get_message().unwrap_or_default()))
            .collect()
    }
}

/// One classification answer.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassAnswer {
    Best(usize),
    Prob(Vec<f32>),
}

impl ClassAnswer {
    pub fn best(&self) -> Option<usize> {
        match self {
            ClassAnswer::Best(c) => Some(*c),
            ClassAnswer::Prob(_) => None,
        }
    }

    pub fn prob(&self) -> Option<&[f32]> {
        match self {
            ClassAnswer::Prob(p) => Some(p),
            ClassAnswer::Best(_) => None,
        }
    }
}
