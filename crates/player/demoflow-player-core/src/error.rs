//! Error types for the step player.

use serde::{Deserialize, Serialize};

/// Errors raised while building or parsing a demo script.
///
/// Construction and parsing are the only fallible surfaces in this crate;
/// every playback operation is total and absorbs bad requests as no-ops.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ScriptError {
    /// A script must contain at least one step.
    #[error("script '{name}' has no steps")]
    EmptyScript { name: String },

    /// Every step must hold the player for a positive amount of time.
    #[error("step {index} ('{title}') has zero duration")]
    ZeroDuration { index: usize, title: String },

    /// The stored-script JSON did not match the expected shape.
    #[error("script parse error: {reason}")]
    Parse { reason: String },
}

impl From<serde_json::Error> for ScriptError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_round_trip() {
        let err = ScriptError::ZeroDuration {
            index: 2,
            title: "Risk Score Calculated".into(),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: ScriptError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }

    #[test]
    fn display_names_the_step() {
        let err = ScriptError::ZeroDuration {
            index: 0,
            title: "Transaction Initiated".into(),
        };
        assert!(err.to_string().contains("Transaction Initiated"));
    }
}
