//! CLI command implementations.

pub mod check_model;
pub mod predict;
pub mod push_model;
