//! Push-model command - publishes a trained artifact into the model registry.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use artifact_store::{ContentStore, model_artifact_path};
use bytes::Bytes;
use ml_model::ModelArtifact;
use tracing::info;

/// Runs the push-model command.
///
/// The file is deserialized locally before upload, so a corrupt artifact is
/// rejected here instead of surfacing on the first prediction request.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not deserialize into a
/// valid artifact, or the upload fails.
pub async fn run(store: Arc<dyn ContentStore>, model_id: &str, file: &Path) -> Result<()> {
    let data = std::fs::read(file)
        .with_context(|| format!("Failed to read artifact file {}", file.display()))?;

    let artifact = ModelArtifact::from_bytes(&data)
        .with_context(|| format!("Artifact file {} is not a valid model", file.display()))?;

    let path = model_artifact_path(model_id);
    store
        .put(&path, Bytes::from(data))
        .await
        .with_context(|| format!("Failed to upload artifact to {path}"))?;

    info!(
        model_id,
        path,
        features = artifact.feature_width(),
        classes = artifact.classifier.classes.len(),
        "Model artifact published"
    );

    Ok(())
}
