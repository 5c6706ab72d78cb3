//! The harness seam: mount, cleanup and asset discovery collaborators.

use uisnap_core::Result;
use uisnap_dom::{Document, NodeId, RenderValue};

use crate::assets;

/// Framework-specific collaborators around the render pipeline.
///
/// The sequencer itself is framework-agnostic; everything that depends on how
/// render values become document content lives behind this trait.
pub trait Harness: Send + Sync {
    /// Mount a render value into the given root container.
    ///
    /// Returns the element that became the effective root (usually the given
    /// container, but a harness may redirect).
    fn mount(&self, doc: &mut Document, value: RenderValue, root: NodeId) -> Result<NodeId>;

    /// Invalidate leftover rendering state before a new example renders.
    ///
    /// Invoked unconditionally at the start of every `process_current` call,
    /// before the body is cleared.
    fn cleanup(&self, doc: &mut Document) -> Result<()>;

    /// Discover asset references in the rendered document.
    fn asset_paths(&self, doc: &Document) -> Vec<String>;
}

/// Harness for plain-markup render values.
///
/// Mounts markup under the designated container, performs no teardown, and
/// scans serialized markup for asset references.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHarness;

impl Harness for DefaultHarness {
    fn mount(&self, doc: &mut Document, value: RenderValue, root: NodeId) -> Result<NodeId> {
        doc.mount(root, value)?;
        Ok(root)
    }

    fn cleanup(&self, _doc: &mut Document) -> Result<()> {
        Ok(())
    }

    fn asset_paths(&self, doc: &Document) -> Vec<String> {
        assets::collect_asset_paths(doc)
    }
}
