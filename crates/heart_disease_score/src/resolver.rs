//! Lazy, process-lifetime resolution of model artifacts.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use artifact_store::{ContentStore, StoreError, model_artifact_path};
use ml_model::ModelArtifact;
use prediction_structs::PredictError;
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// Resolves logical model ids to loaded artifacts.
///
/// Artifacts are fetched from the injected content store on first use and
/// cached for the life of the process: at most one fetch per id, no eviction,
/// no TTL. Concurrent first callers for the same id coordinate through a
/// per-id [`OnceCell`], so exactly one of them performs the fetch and none
/// ever observes a partially constructed artifact. A failed load leaves the
/// cell unset, so the next call retries instead of wedging on a poisoned
/// entry.
pub struct ArtifactResolver {
    store: Arc<dyn ContentStore>,
    cache: Mutex<HashMap<String, Arc<OnceCell<Arc<ModelArtifact>>>>>,
}

impl ArtifactResolver {
    /// Creates a resolver over the given content store with an empty cache.
    #[must_use]
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self {
            store,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the artifact for `model_id`, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::ArtifactNotFound`] if the store has no object
    /// at the derived path, [`PredictError::ArtifactCorrupt`] if the bytes do
    /// not deserialize into a valid artifact, or
    /// [`PredictError::StoreUnavailable`] if the fetch times out or fails.
    pub async fn resolve(&self, model_id: &str) -> Result<Arc<ModelArtifact>, PredictError> {
        let cell = {
            let mut cache = self.cache.lock().expect("artifact cache lock poisoned");
            Arc::clone(cache.entry(model_id.to_owned()).or_default())
        };

        if let Some(artifact) = cell.get() {
            debug!(model_id, "Artifact cache hit");
            return Ok(Arc::clone(artifact));
        }

        let artifact = cell.get_or_try_init(|| self.load(model_id)).await?;
        Ok(Arc::clone(artifact))
    }

    async fn load(&self, model_id: &str) -> Result<Arc<ModelArtifact>, PredictError> {
        let path = model_artifact_path(model_id);
        info!(model_id, path, "Loading model artifact from content store");

        let data = self.store.fetch(&path).await.map_err(|err| match err {
            StoreError::NotFound { path } => PredictError::ArtifactNotFound { path },
            err @ (StoreError::Timeout { .. } | StoreError::Io { .. }) => {
                PredictError::StoreUnavailable {
                    path: path.clone(),
                    reason: err.to_string(),
                }
            }
        })?;

        let artifact =
            ModelArtifact::from_bytes(&data).map_err(|err| PredictError::ArtifactCorrupt {
                path: path.clone(),
                reason: err.to_string(),
            })?;

        info!(
            model_id,
            features = artifact.feature_width(),
            "Model artifact loaded"
        );
        Ok(Arc::new(artifact))
    }
}
