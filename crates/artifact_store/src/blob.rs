//! `object_store`-backed implementation of the content-store contract.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use object_store::ObjectStore;
use object_store::path::Path as ObjectStorePath;
use tokio::time::timeout;
use tracing::debug;

use crate::{ContentStore, StoreError};

/// Content store backed by any `object_store` implementation.
///
/// Every fetch is bounded by `fetch_timeout` so a stalled store fails the
/// request instead of hanging the caller.
pub struct BlobContentStore {
    store: Arc<dyn ObjectStore>,
    fetch_timeout: Duration,
}

impl BlobContentStore {
    /// Wraps an object store handle with a fetch timeout.
    #[must_use]
    pub fn new(store: Arc<dyn ObjectStore>, fetch_timeout: Duration) -> Self {
        Self {
            store,
            fetch_timeout,
        }
    }
}

#[async_trait::async_trait]
impl ContentStore for BlobContentStore {
    async fn fetch(&self, path: &str) -> Result<Bytes, StoreError> {
        let object_path = ObjectStorePath::from(path);

        let read = async {
            self.store
                .get(&object_path)
                .await
                .map_err(|source| map_store_error(path, source))?
                .bytes()
                .await
                .map_err(|source| map_store_error(path, source))
        };

        let data = timeout(self.fetch_timeout, read)
            .await
            .map_err(|_| StoreError::Timeout {
                path: path.to_owned(),
                seconds: self.fetch_timeout.as_secs(),
            })??;

        debug!(path, bytes = data.len(), "Fetched object from store");
        Ok(data)
    }

    async fn exists(&self, path: &str) -> Result<bool, StoreError> {
        let object_path = ObjectStorePath::from(path);

        match self.store.head(&object_path).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(source) => Err(map_store_error(path, source)),
        }
    }

    async fn put(&self, path: &str, data: Bytes) -> Result<(), StoreError> {
        let object_path = ObjectStorePath::from(path);

        self.store
            .put(&object_path, data.into())
            .await
            .map_err(|source| map_store_error(path, source))?;

        debug!(path, "Wrote object to store");
        Ok(())
    }
}

fn map_store_error(path: &str, source: object_store::Error) -> StoreError {
    match source {
        object_store::Error::NotFound { .. } => StoreError::NotFound {
            path: path.to_owned(),
        },
        source => StoreError::Io {
            path: path.to_owned(),
            source,
        },
    }
}
