//! Content-store boundary for model artifacts.
//!
//! The prediction core only depends on the narrow [`ContentStore`] contract;
//! the concrete backing store (local filesystem, blob storage, in-memory) is
//! whatever `object_store` implementation gets injected at startup.

use bytes::Bytes;

mod blob;
mod paths;

pub use blob::BlobContentStore;
pub use paths::model_artifact_path;

/// Errors reported by a content store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No object exists at the requested path.
    #[error("no object at `{path}`")]
    NotFound { path: String },

    /// The fetch did not complete within the configured timeout.
    #[error("fetching `{path}` timed out after {seconds}s")]
    Timeout { path: String, seconds: u64 },

    /// Any other I/O failure from the backing store.
    #[error("store I/O failed for `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: object_store::Error,
    },
}

/// Narrow contract the prediction core consumes.
#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetches the object at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no object exists at `path`,
    /// [`StoreError::Timeout`] if the fetch exceeds the configured bound,
    /// or [`StoreError::Io`] for any other store failure.
    async fn fetch(&self, path: &str) -> Result<Bytes, StoreError>;

    /// Reports whether an object exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the store cannot be queried.
    async fn exists(&self, path: &str) -> Result<bool, StoreError>;

    /// Writes `data` to `path`, replacing any existing object.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the write fails.
    async fn put(&self, path: &str, data: Bytes) -> Result<(), StoreError>;
}
