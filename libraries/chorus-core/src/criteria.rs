//! Smart-playlist criteria.
//!
//! The expression tree itself is evaluated by an external engine; this
//! layer only stores it and asks whether one is attached.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An opaque criteria expression.
///
/// Carried as a JSON tree so the evaluator can interpret it; the model
/// only ever checks for presence and emptiness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expression(Value);

impl Expression {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// JSON `null`, `{}` and `[]` all count as "no expression".
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(fields) => fields.is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => false,
        }
    }
}

/// Criteria attached to a smart playlist.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<Expression>,

    /// Sort field for the evaluated result
    #[serde(default)]
    pub sort: String,

    /// Sort direction ("asc"/"desc")
    #[serde(default)]
    pub order: String,

    /// Maximum number of evaluated tracks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    #[serde(default)]
    pub offset: i64,
}
