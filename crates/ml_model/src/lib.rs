//! Model artifact crate for heart-disease severity prediction.
//!
//! A [`ModelArtifact`] bundles the deterministic preprocessing transform and
//! the trained classifier into one serialized JSON object. Artifacts are
//! immutable after deserialization and safe to share across any number of
//! concurrent inference calls.

use prediction_structs::PredictionRecord;
use serde::{Deserialize, Serialize};

mod classifier;
mod preprocess;

pub use classifier::LinearClassifier;
pub use preprocess::{ColumnSpec, ColumnTransform, TransformError};

/// Error type for artifact deserialization.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact JSON is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(
        "classifier shape does not match the schema: schema produces {feature_width} features, \
         class {class_index} has {weight_len} weights"
    )]
    ShapeMismatch {
        feature_width: usize,
        class_index: usize,
        weight_len: usize,
    },
    #[error(
        "classifier has {classes} classes but {weights} weight vectors and {intercepts} intercepts"
    )]
    ClassCountMismatch {
        classes: usize,
        weights: usize,
        intercepts: usize,
    },
    #[error("classifier has no classes")]
    NoClasses,
}

/// Serialized bundle of preprocessing transform + trained classifier.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelArtifact {
    /// Training schema in training column order, with fitted transforms.
    pub schema: Vec<ColumnSpec>,
    /// Trained classifier over the transformed feature space.
    pub classifier: LinearClassifier,
}

impl ModelArtifact {
    /// Deserializes an artifact from its JSON bytes and validates its shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the classifier dimensions
    /// do not match the feature width implied by the schema.
    pub fn from_bytes(data: &[u8]) -> Result<Self, ArtifactError> {
        let artifact: Self = serde_json::from_slice(data)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Serializes the artifact to JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Total width of the transformed feature vector.
    #[must_use]
    pub fn feature_width(&self) -> usize {
        self.schema
            .iter()
            .map(|col| col.transform.output_width())
            .sum()
    }

    /// Applies the preprocessing transform to a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not line up with the training
    /// schema (missing column, wrong type, unseen category token).
    pub fn preprocess(&self, record: &PredictionRecord) -> Result<Vec<f64>, TransformError> {
        let mut features = Vec::with_capacity(self.feature_width());
        for column in &self.schema {
            column.apply(record, &mut features)?;
        }
        Ok(features)
    }

    /// Runs the classifier on a transformed feature vector.
    #[must_use]
    pub fn classify(&self, features: &[f64]) -> i64 {
        self.classifier.classify(features)
    }

    fn validate(&self) -> Result<(), ArtifactError> {
        let classes = self.classifier.classes.len();
        // A class-less classifier can never produce a real prediction; it
        // must not load and silently fall back to label 0.
        if classes == 0 {
            return Err(ArtifactError::NoClasses);
        }
        if self.classifier.weights.len() != classes || self.classifier.intercepts.len() != classes {
            return Err(ArtifactError::ClassCountMismatch {
                classes,
                weights: self.classifier.weights.len(),
                intercepts: self.classifier.intercepts.len(),
            });
        }

        let feature_width = self.feature_width();
        for (class_index, weights) in self.classifier.weights.iter().enumerate() {
            if weights.len() != feature_width {
                return Err(ArtifactError::ShapeMismatch {
                    feature_width,
                    class_index,
                    weight_len: weights.len(),
                });
            }
        }

        Ok(())
    }
}
