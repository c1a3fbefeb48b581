use crate::core::GoalResult;
use crate::goals::classification::Classification;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_channel() -> usize {
    0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClassificationParameters {
    #[schemars(
        title = "Class Count",
        description = "Number of classes; labels are densely packed in [0, class_count)",
        range(min = 1)
    )]
    pub class_count: usize,

    #[serde(default = "default_channel")]
    #[schemars(
        title = "Channel",
        description = "Index of the channel holding the ground-truth label",
        default = "default_channel"
    )]
    pub channel: usize,
}

impl ClassificationParameters {
    pub fn from_json(raw: &str) -> GoalResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Serializable description of a goal, tagged by kind.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(GoalKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum GoalChoice {
    #[strum_discriminants(strum(
        message = "Classification",
        detailed_message = "Single-label multi-class classification from a discrete label channel."
    ))]
    Classification(ClassificationParameters),
}

impl GoalChoice {
    pub fn schema() -> Schema {
        schema_for!(GoalChoice)
    }

    pub fn from_json(raw: &str) -> GoalResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn kind(&self) -> GoalKind {
        GoalKind::from(self)
    }
}

pub fn build_goal(choice: GoalChoice) -> GoalResult<Classification> {
    match choice {
        GoalChoice::Classification(p) => Classification::from_parameters(&p),
    }
}
