//! # uisnap-bundle
//!
//! One-shot fixture bundle builder for the uisnap fixture runner.
//!
//! This crate provides:
//! - A build configuration with fixed defaults and a customization hook
//! - The callback-based `Bundler` seam around the external bundling tool
//! - `create_bundle`, adapting the completion callback into an awaitable
//!
//! One-shot only: no retry, no caching, no incremental rebuild. Bundler
//! failures propagate unwrapped as [`uisnap_core::Error::Bundler`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod config;

// Re-export commonly used types
pub use builder::{create_bundle, BuildCompletion, Bundler, CommandBundler};
pub use config::{BundleConfig, OUTPUT_FILENAME};
