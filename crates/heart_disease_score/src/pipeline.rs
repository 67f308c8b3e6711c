//! Inbound prediction boundary: normalize, resolve, infer.

use std::collections::HashMap;
use std::sync::Arc;

use artifact_store::ContentStore;
use prediction_structs::{PredictError, PredictionRecord, PredictionResult};
use tracing::info;

use crate::inference::run_inference;
use crate::resolver::ArtifactResolver;

/// The serving pipeline exposed to the outer request layer.
///
/// Accepts raw string form fields and returns either a prediction or a
/// [`PredictError`] whose variant tells the caller what went wrong.
/// Validation runs first, so a malformed request never touches the content
/// store or the model.
pub struct PredictionPipeline {
    resolver: ArtifactResolver,
    model_id: String,
}

impl PredictionPipeline {
    /// Builds a pipeline serving `model_id` from the given content store.
    #[must_use]
    pub fn new(store: Arc<dyn ContentStore>, model_id: impl Into<String>) -> Self {
        Self {
            resolver: ArtifactResolver::new(store),
            model_id: model_id.into(),
        }
    }

    /// Predicts the severity category for one submitted form.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::Validation`] for a malformed form, or any
    /// resolver/inference error from the later stages.
    pub async fn predict_form(
        &self,
        fields: &HashMap<String, String>,
    ) -> Result<PredictionResult, PredictError> {
        let record = PredictionRecord::from_form(fields)?;

        let artifact = self.resolver.resolve(&self.model_id).await?;
        let result = run_inference(&artifact, &record)?;

        info!(
            model_id = %self.model_id,
            class = result.class,
            severity = result.label(),
            "Prediction complete"
        );
        Ok(result)
    }
}
