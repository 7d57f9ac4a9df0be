//! Shared types and models for the FarmEase platform
//!
//! This crate contains the crop/soil lookup tables and the growth estimation
//! engine, shared between the backend and the browser (via WASM).

pub mod growth;
pub mod models;
pub mod validation;

pub use growth::*;
pub use models::*;
pub use validation::*;
