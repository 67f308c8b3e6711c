//! Check-model command - reports whether an artifact exists for a model id.

use std::sync::Arc;

use anyhow::{Context, Result};
use artifact_store::{ContentStore, model_artifact_path};
use tracing::info;

/// Runs the check-model command.
///
/// # Errors
///
/// Returns an error if the content store cannot be queried.
pub async fn run(store: Arc<dyn ContentStore>, model_id: &str) -> Result<()> {
    let path = model_artifact_path(model_id);

    let present = store
        .exists(&path)
        .await
        .with_context(|| format!("Failed to query content store for {path}"))?;

    if present {
        info!(model_id, path, "Model artifact is present");
        println!("present");
    } else {
        info!(model_id, path, "Model artifact is missing");
        println!("missing");
    }

    Ok(())
}
