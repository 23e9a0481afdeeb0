//! Selectable output blocks.
//!
//! Both renderers accept an ordered list of [`Field`]s; each one toggles a
//! block of the rendered explanation and blocks appear in the given order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// One block of a rendered explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Method,
    Description,
    TransitionFeatures,
    Targets,
    FeatureImportances,
    DecisionTree,
}

impl Field {
    /// Every block, in the default rendering order.
    pub const ALL: [Field; 6] = [
        Field::Method,
        Field::Description,
        Field::TransitionFeatures,
        Field::Targets,
        Field::FeatureImportances,
        Field::DecisionTree,
    ];

    /// Descriptive blocks only.
    pub const INFO: [Field; 2] = [Field::Method, Field::Description];

    /// Weight blocks only.
    pub const WEIGHTS: [Field; 4] = [
        Field::Targets,
        Field::FeatureImportances,
        Field::DecisionTree,
        Field::TransitionFeatures,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Method => "method",
            Field::Description => "description",
            Field::TransitionFeatures => "transition_features",
            Field::Targets => "targets",
            Field::FeatureImportances => "feature_importances",
            Field::DecisionTree => "decision_tree",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Field::as_str).collect()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s.trim())
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// Parse a comma-separated field list such as `"method,targets"`.
pub fn parse_fields(list: &str) -> Result<Vec<Field>, CoreError> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(str::parse)
        .collect()
}
