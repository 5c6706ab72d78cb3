//! # uisnap-dom
//!
//! Scratch document surface for the uisnap fixture runner.
//!
//! This crate provides:
//! - An arena-backed document model (body, element nodes, raw markup chunks)
//! - innerHTML/outerHTML serialization
//! - Element lookup by id and a small CSS-like selector
//!
//! ## Architecture
//!
//! This is Layer 1 in the architecture - it depends only on uisnap-core and
//! models the single shared scratch surface that examples render into. The
//! surface is destructively overwritten between examples; it carries no state
//! across them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod node;
pub mod selector;

// Re-export commonly used types
pub use document::Document;
pub use node::{NodeId, RenderValue};
pub use selector::Selector;
