use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use object_store::ObjectStore;
use object_store::local::LocalFileSystem;

/// Default logical model identifier served by the pipeline.
pub const DEFAULT_MODEL_ID: &str = "heartdisease";

/// Default bound on a single content-store fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Returns the base path for the model object store.
#[must_use]
pub fn get_base_path() -> PathBuf {
    dotenvy::dotenv().ok();

    #[cfg(target_os = "linux")]
    let base_path_unwrap = PathBuf::from("/workspace/heartdisease");

    #[cfg(target_os = "windows")]
    let base_path_unwrap = PathBuf::from(r"C:\GitHub\heart_disease_score\models");

    std::env::var("MODEL_STORE_PATH").map_or_else(|_| base_path_unwrap, PathBuf::from)
}

/// Creates a filesystem-backed object store rooted at `base_path`.
///
/// The handle is constructed once at startup and passed into the artifact
/// resolver; there is deliberately no process-wide store singleton.
///
/// # Errors
///
/// Returns an error if the base directory cannot be created or opened.
pub fn create_object_store(base_path: &Path) -> anyhow::Result<Arc<dyn ObjectStore>> {
    std::fs::create_dir_all(base_path).with_context(|| {
        format!(
            "Failed to create object store directory {}",
            base_path.display()
        )
    })?;

    let store = LocalFileSystem::new_with_prefix(base_path)
        .with_context(|| format!("Failed to open object store at {}", base_path.display()))?;

    Ok(Arc::new(store))
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory backing the model object store.
    pub model_store_path: PathBuf,

    /// Logical identifier of the model to serve.
    pub model_id: String,

    /// Upper bound on a single content-store fetch.
    pub fetch_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `MODEL_STORE_PATH`: Base directory for the model store (default: `/workspace/heartdisease`)
    /// - `MODEL_ID`: Logical model identifier (default: `heartdisease`)
    /// - `FETCH_TIMEOUT_SECS`: Content-store fetch timeout in seconds (default: 30)
    ///
    /// # Errors
    ///
    /// Returns an error if `FETCH_TIMEOUT_SECS` is set but not a positive integer.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file
        dotenvy::dotenv().ok();

        let model_store_path = get_base_path();

        let model_id = std::env::var("MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_owned());

        let fetch_timeout = match std::env::var("FETCH_TIMEOUT_SECS") {
            Ok(raw) => parse_fetch_timeout(&raw)?,
            Err(_) => DEFAULT_FETCH_TIMEOUT,
        };

        Ok(Self {
            model_store_path,
            model_id,
            fetch_timeout,
        })
    }
}

fn parse_fetch_timeout(raw: &str) -> anyhow::Result<Duration> {
    let secs: u64 = raw
        .parse()
        .context("FETCH_TIMEOUT_SECS must be a positive integer")?;

    // A zero bound would fail every fetch immediately.
    anyhow::ensure!(secs > 0, "FETCH_TIMEOUT_SECS must be greater than zero");

    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_timeout_parses_positive_seconds() {
        assert_eq!(parse_fetch_timeout("5").unwrap(), Duration::from_secs(5));
    }

    #[test]
    fn test_zero_fetch_timeout_is_rejected() {
        let err = parse_fetch_timeout("0").unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn test_non_numeric_fetch_timeout_is_rejected() {
        assert!(parse_fetch_timeout("fast").is_err());
    }
}
