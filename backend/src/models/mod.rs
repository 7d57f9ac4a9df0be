//! Domain models for the FarmEase backend
//!
//! Re-exports models and the growth estimator from the shared crate

pub use shared::growth;
pub use shared::models::*;
