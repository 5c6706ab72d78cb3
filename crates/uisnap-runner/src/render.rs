//! Render function contract and normalization.
//!
//! An example's render value is either a bare function or a richer descriptor
//! carrying stylesheets and target restrictions. Normalization collapses both
//! into the plain function the pipeline invokes.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use uisnap_core::Stylesheet;
use uisnap_dom::{Document, NodeId, RenderValue};

use crate::harness::Harness;

/// Future returned by an asynchronous render function.
pub type BoxRenderFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'static>>;

/// What a render function hands back to the pipeline.
pub enum RenderReturn {
    /// A value for the pipeline to mount into the root container
    Value(RenderValue),
    /// The function already mounted through its [`RenderContext`]
    Mounted,
    /// Rendering completes when this future resolves
    Async(BoxRenderFuture),
}

impl std::fmt::Debug for RenderReturn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Mounted => write!(f, "Mounted"),
            Self::Async(_) => write!(f, "Async(..)"),
        }
    }
}

/// A render function for one example variant.
pub type RenderFn = Arc<dyn Fn(RenderContext) -> anyhow::Result<RenderReturn> + Send + Sync>;

/// Handle passed into render functions.
///
/// Cloneable and `Send` so asynchronous render functions can keep mounting
/// after the initial call returns (portal-style rendering included).
#[derive(Clone)]
pub struct RenderContext {
    doc: Arc<Mutex<Document>>,
    root: NodeId,
    harness: Arc<dyn Harness>,
}

impl RenderContext {
    pub(crate) fn new(doc: Arc<Mutex<Document>>, root: NodeId, harness: Arc<dyn Harness>) -> Self {
        Self { doc, root, harness }
    }

    /// Mount a render value into the designated root container.
    ///
    /// Returns the element the harness reports as the effective root.
    pub fn render_into(&self, value: RenderValue) -> anyhow::Result<NodeId> {
        let mut doc = self.doc.lock().unwrap();
        let effective = self.harness.mount(&mut doc, value, self.root)?;
        Ok(effective)
    }

    /// The shared scratch document.
    pub fn document(&self) -> Arc<Mutex<Document>> {
        Arc::clone(&self.doc)
    }

    /// The designated root container for this render.
    pub fn root(&self) -> NodeId {
        self.root
    }
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// Render value attached to an example: a bare function or a descriptor.
#[derive(Clone)]
pub enum RenderSpec {
    /// Bare render function
    Func(RenderFn),
    /// Descriptor with associated metadata
    Descriptor {
        /// The render function
        render: RenderFn,
        /// Stylesheets to attach to the capture
        stylesheets: Vec<Stylesheet>,
        /// Targets this example is restricted to (empty = all targets)
        targets: Vec<String>,
    },
}

impl RenderSpec {
    /// Wrap a closure as a bare render spec.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(RenderContext) -> anyhow::Result<RenderReturn> + Send + Sync + 'static,
    {
        Self::Func(Arc::new(f))
    }

    /// Render spec that mounts a fixed markup string.
    pub fn markup(markup: impl Into<String>) -> Self {
        let markup = markup.into();
        Self::func(move |_ctx| Ok(RenderReturn::Value(RenderValue::markup(markup.clone()))))
    }

    /// Descriptor render spec from a closure.
    pub fn descriptor<F>(f: F, stylesheets: Vec<Stylesheet>, targets: Vec<String>) -> Self
    where
        F: Fn(RenderContext) -> anyhow::Result<RenderReturn> + Send + Sync + 'static,
    {
        Self::Descriptor {
            render: Arc::new(f),
            stylesheets,
            targets,
        }
    }

    /// Normalize into the plain render function the pipeline invokes.
    pub fn render_fn(&self) -> RenderFn {
        match self {
            Self::Func(f) => Arc::clone(f),
            Self::Descriptor { render, .. } => Arc::clone(render),
        }
    }

    /// Stylesheets declared by a descriptor, if any.
    pub fn stylesheets(&self) -> Option<&[Stylesheet]> {
        match self {
            Self::Func(_) => None,
            Self::Descriptor { stylesheets, .. } => {
                if stylesheets.is_empty() {
                    None
                } else {
                    Some(stylesheets)
                }
            }
        }
    }

    /// Target restriction declared by a descriptor (empty = unrestricted).
    pub fn targets(&self) -> &[String] {
        match self {
            Self::Func(_) => &[],
            Self::Descriptor { targets, .. } => targets,
        }
    }
}

impl std::fmt::Debug for RenderSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Func(_) => write!(f, "RenderSpec::Func(..)"),
            Self::Descriptor {
                stylesheets,
                targets,
                ..
            } => f
                .debug_struct("RenderSpec::Descriptor")
                .field("stylesheets", stylesheets)
                .field("targets", targets)
                .finish_non_exhaustive(),
        }
    }
}
