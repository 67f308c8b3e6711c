//! Heart Disease Severity Predictor
//!
//! Serving core that turns raw patient form fields into a heart-disease
//! severity category using a pre-trained model artifact from a content store.

pub mod commands;
pub mod inference;
pub mod pipeline;
pub mod resolver;
