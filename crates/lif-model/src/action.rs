use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Whether an action must be executed by the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequirementType {
    #[default]
    Required,
    Conditional,
    Optional,
}

/// How an action blocks driving while it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockingType {
    #[default]
    None,
    Soft,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionParameter {
    pub key: String,
    /// Arbitrary JSON value (string, number, boolean, array or object).
    pub value: serde_json::Value,
}

/// An action a vehicle may perform on a node or while traversing an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub action_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_description: Option<String>,
    #[serde(default)]
    pub requirement_type: RequirementType,
    #[serde(default)]
    pub blocking_type: BlockingType,
    #[serde(default)]
    pub action_parameters: Vec<ActionParameter>,
}

impl Action {
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            action_description: None,
            requirement_type: RequirementType::default(),
            blocking_type: BlockingType::default(),
            action_parameters: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.action_type.is_empty() {
            return Err(ModelError::EmptyActionType);
        }
        Ok(())
    }
}
