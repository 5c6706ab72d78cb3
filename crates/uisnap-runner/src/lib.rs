//! # uisnap-runner
//!
//! Example sequencer and render pipeline for the uisnap fixture runner.
//!
//! This crate provides:
//! - Example registration and flattening (file → component → variant)
//! - Cursor-based iteration with filtering and skip-on-mismatch
//! - The render-then-extract pipeline with bounded content polling
//! - The `Harness` collaborator seam (mount, cleanup, asset discovery)
//!
//! ## Architecture
//!
//! This is Layer 2 in the architecture - it depends on uisnap-core and
//! uisnap-dom and drives one-at-a-time rendering of examples into the shared
//! scratch document.
//!
//! Processing is strictly sequential by design: the document is a single
//! destructively-overwritten scratch surface, so no two examples may ever be
//! processed concurrently.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assets;
pub mod example;
pub mod filter;
pub mod harness;
pub mod process;
pub mod render;
pub mod sequencer;
pub mod styles;
pub mod wait;

// Re-export commonly used types
pub use example::{component_name_from_file_name, Example, ExampleSource, FilePayload};
pub use filter::{DefaultFilter, ExampleFilter};
pub use harness::{DefaultHarness, Harness};
pub use process::{ProcessOutcome, RenderFailure, ROOT_ELEMENT_ID};
pub use render::{BoxRenderFuture, RenderContext, RenderFn, RenderReturn, RenderSpec};
pub use sequencer::{InitOptions, Sequencer, SequencerState};
pub use styles::collect_style_contents;
pub use wait::{wait_for_content, ContentWait, WaitOutcome};
