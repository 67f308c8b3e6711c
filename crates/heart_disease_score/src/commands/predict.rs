//! Predict command - runs one prediction from command-line form fields.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use artifact_store::ContentStore;
use prediction_structs::COLUMN_NAMES;
use tracing::info;

use crate::pipeline::PredictionPipeline;

/// Runs the predict command.
///
/// The nine attribute values arrive as raw strings, exactly as a web form
/// would submit them, and go through the same normalization path.
///
/// # Errors
///
/// Returns an error if validation, artifact resolution, or inference fails.
pub async fn run(
    store: Arc<dyn ContentStore>,
    model_id: &str,
    values: [String; 9],
) -> Result<()> {
    let fields: HashMap<String, String> = COLUMN_NAMES
        .iter()
        .map(|&name| name.to_owned())
        .zip(values)
        .collect();

    let pipeline = PredictionPipeline::new(store, model_id);
    let result = pipeline.predict_form(&fields).await?;

    info!(
        class = result.class,
        severity = result.label(),
        "Predicted heart-disease severity"
    );
    println!("{}", result.label());

    Ok(())
}
