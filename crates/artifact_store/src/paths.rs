//! Deterministic artifact path derivation.

/// Registry prefix under which trained artifacts are published.
pub const MODEL_REGISTRY_PREFIX: &str = "model-registry";

/// Filename of the serialized artifact inside a model's registry directory.
pub const MODEL_FILE_NAME: &str = "model.json";

/// Derives the store path for a model's artifact.
///
/// Format: `model-registry/{model_id}/model.json`. The same id always maps to
/// the same path, so publishing and resolving never have to agree on anything
/// beyond the id.
#[must_use]
pub fn model_artifact_path(model_id: &str) -> String {
    format!("{MODEL_REGISTRY_PREFIX}/{model_id}/{MODEL_FILE_NAME}")
}
