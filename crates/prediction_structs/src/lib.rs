//! Common structs for heart-disease prediction shared across crates.

mod error;
mod record;
mod severity;

pub use error::*;
pub use record::*;
pub use severity::*;
