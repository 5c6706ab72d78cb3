//! # uisnap-core
//!
//! Core types for the uisnap fixture runner.
//!
//! This crate contains all fundamental types with **no internal dependencies**
//! on other uisnap crates. It provides:
//!
//! - Error types and the crate-wide `Result` alias
//! - Runner configuration (YAML loading and validation)
//! - Run identifiers for log correlation
//! - Capture types (`RenderedPage`, `Stylesheet`)
//!
//! ## Architecture
//!
//! This is Layer 0 in the architecture - all other crates depend on this one,
//! but this crate has no dependencies on other uisnap crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export all modules
pub mod config;
pub mod error;
pub mod page;
pub mod run;

// Re-export commonly used types
pub use config::RunnerConfig;
pub use error::{Error, Result};
pub use page::{RenderedPage, Stylesheet};
pub use run::RunId;
