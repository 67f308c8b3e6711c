//! Environment-driven configuration for the prediction service.

mod config;

pub use config::*;
