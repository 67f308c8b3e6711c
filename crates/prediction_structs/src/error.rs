//! Typed error taxonomy for the prediction path.
//!
//! Every failure that crosses a component boundary is one of these variants,
//! so the caller can tell a bad form field apart from a missing model or a
//! broken transform without parsing message strings.

/// Errors produced by the prediction path.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// A request field was missing or failed numeric parsing.
    #[error("invalid value for field `{field}`: {reason}")]
    Validation {
        /// Name of the offending form field.
        field: &'static str,
        reason: String,
    },

    /// The content store has no object at the derived artifact path.
    #[error("no model artifact found at `{path}`")]
    ArtifactNotFound { path: String },

    /// The artifact bytes could not be deserialized into a usable model.
    #[error("model artifact at `{path}` is corrupt: {reason}")]
    ArtifactCorrupt { path: String, reason: String },

    /// The preprocessing transform or the classifier failed.
    #[error("inference failed: {reason}")]
    Inference { reason: String },

    /// The content store could not be reached within the fetch timeout.
    #[error("content store unavailable for `{path}`: {reason}")]
    StoreUnavailable { path: String, reason: String },
}

impl PredictError {
    /// Builds a validation error for a missing field.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::Validation {
            field,
            reason: "field is missing".to_owned(),
        }
    }

    /// Builds a validation error for a field that failed to parse.
    #[must_use]
    pub fn unparsable_field(field: &'static str, expected: &str, raw: &str) -> Self {
        Self::Validation {
            field,
            reason: format!("expected {expected}, got `{raw}`"),
        }
    }

    /// Stable short name for the error kind, for logs and API payloads.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::ArtifactNotFound { .. } => "artifact_not_found",
            Self::ArtifactCorrupt { .. } => "artifact_corrupt",
            Self::Inference { .. } => "inference",
            Self::StoreUnavailable { .. } => "store_unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_field() {
        let err = PredictError::missing_field("age");
        assert!(matches!(err, PredictError::Validation { field: "age", .. }));
        assert!(err.to_string().contains("age"));
    }

    #[test]
    fn test_error_kinds_are_distinct() {
        let errors = [
            PredictError::missing_field("age"),
            PredictError::ArtifactNotFound {
                path: "p".to_owned(),
            },
            PredictError::ArtifactCorrupt {
                path: "p".to_owned(),
                reason: "r".to_owned(),
            },
            PredictError::Inference {
                reason: "r".to_owned(),
            },
            PredictError::StoreUnavailable {
                path: "p".to_owned(),
                reason: "r".to_owned(),
            },
        ];

        let mut kinds: Vec<&str> = errors.iter().map(PredictError::kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), errors.len());
    }
}
