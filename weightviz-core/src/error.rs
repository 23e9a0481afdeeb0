//! Error types for the weightviz-core crate.

use thiserror::Error;

/// Top-level error type for explanation preparation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(
        "span '{feature}' range {start}..{end} is outside the {analyzer} document of length {len}"
    )]
    SpanOutOfBounds {
        feature: String,
        analyzer: String,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("span '{feature}' has an inverted range {start}..{end}")]
    InvertedRange {
        feature: String,
        start: usize,
        end: usize,
    },

    #[error("unknown field '{0}' (expected one of: {fields})", fields = crate::fields::Field::names().join(", "))]
    UnknownField(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<Box<figment::Error>> for CoreError {
    fn from(err: Box<figment::Error>) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = CoreError::SpanOutOfBounds {
            feature: "hello".into(),
            analyzer: "char".into(),
            start: 3,
            end: 9,
            len: 5,
        };
        assert_eq!(
            err.to_string(),
            "span 'hello' range 3..9 is outside the char document of length 5"
        );
    }

    #[test]
    fn test_unknown_field_lists_known_fields() {
        let msg = CoreError::UnknownField("weights".into()).to_string();
        assert!(msg.contains("'weights'"));
        assert!(msg.contains("feature_importances"));
    }
}
