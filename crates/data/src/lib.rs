//! Startup artifact loading for the `oficio` application.
//!
//! Reads the six reference datasets from a data directory and validates
//! them into one immutable [`oficio_core::Assets`] bundle. The load is
//! atomic: any missing file, parse failure, or cross-artifact inconsistency
//! fails the whole load, and the service must not start. Partial
//! initialization is not a supported state.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Artifact reading and validation.
pub mod loader;

pub use loader::{load_assets, LoadError, ARTIFACT_FILES};
