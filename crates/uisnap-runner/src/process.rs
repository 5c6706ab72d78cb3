//! The render-then-extract pipeline for the current example.

use tracing::{debug, warn};

use uisnap_core::{RenderedPage, Result};
use uisnap_dom::{NodeId, Selector};

use crate::render::{RenderFn, RenderReturn};
use crate::sequencer::Sequencer;
use crate::wait::{wait_for_content, ContentWait};

/// Id of the container inserted into the body before each render.
pub const ROOT_ELEMENT_ID: &str = "uisnap-root";

/// A render failure, returned (not raised) so one example's failure never
/// aborts the sequence.
#[derive(Debug)]
pub struct RenderFailure {
    /// Component of the failing example
    pub component: String,
    /// Variant of the failing example
    pub variant: String,
    /// File the example was registered from
    pub file_name: String,
    /// The underlying failure
    pub cause: anyhow::Error,
}

impl std::fmt::Display for RenderFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to render component \"{}\", variant \"{}\" in {}",
            self.component, self.variant, self.file_name
        )
    }
}

impl std::error::Error for RenderFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.cause.as_ref())
    }
}

/// Result of processing one example.
#[derive(Debug)]
pub enum ProcessOutcome {
    /// The example rendered; its capture is ready to ship
    Page(Box<RenderedPage>),
    /// The example's render function failed
    Failed(RenderFailure),
}

impl ProcessOutcome {
    /// The capture, if the example rendered.
    pub fn page(&self) -> Option<&RenderedPage> {
        match self {
            Self::Page(page) => Some(page),
            Self::Failed(_) => None,
        }
    }

    /// The failure, if the example did not render.
    pub fn failure(&self) -> Option<&RenderFailure> {
        match self {
            Self::Page(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    /// Whether this outcome is a render failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl Sequencer {
    /// Render the example at the cursor and extract its capture.
    ///
    /// Resets the scratch document, invokes the render function, locates the
    /// effective root, waits (bounded) for content, and collects asset paths.
    /// Render-time failures come back as [`ProcessOutcome::Failed`]; errors
    /// from invalid sequencer state propagate as `Err`.
    pub async fn process_current(&self) -> Result<ProcessOutcome> {
        let example = self.current()?.clone();
        let render_fn = example.render.render_fn();

        // Invalidate leftover rendering state from the previous item
        {
            let mut doc = self.doc.lock().unwrap();
            self.harness.cleanup(&mut doc)?;
        }

        debug!(
            "Rendering component {}, variant {} (run_id={})",
            example.component,
            example.variant,
            self.run_id()
        );
        if let Err(cause) = self.render_example(&render_fn).await {
            return Ok(ProcessOutcome::Failed(RenderFailure {
                component: example.component,
                variant: example.variant,
                file_name: example.file_name,
                cause,
            }));
        }

        let root = self.locate_root();
        let wait = ContentWait::from_config(self.config());
        let outcome = wait_for_content(&self.doc, root, &wait).await;

        let asset_paths = {
            let doc = self.doc.lock().unwrap();
            self.harness.asset_paths(&doc)
        };

        let mut page = RenderedPage::new(
            outcome.html,
            example.component,
            example.variant,
            asset_paths,
        );
        if let Some(stylesheets) = example.render.stylesheets() {
            page.stylesheets = Some(stylesheets.to_vec());
        }
        Ok(ProcessOutcome::Page(Box::new(page)))
    }

    /// Reset the document and run one render function to completion.
    async fn render_example(&self, render_fn: &RenderFn) -> anyhow::Result<()> {
        let root = {
            let mut doc = self.doc.lock().unwrap();
            doc.clear_body();
            let root = doc.create_element("div");
            doc.set_attribute(root, "id", ROOT_ELEMENT_ID)?;
            let body = doc.body();
            doc.append_child(body, root)?;
            root
        };

        let ctx = crate::render::RenderContext::new(
            self.document(),
            root,
            std::sync::Arc::clone(&self.harness),
        );

        match render_fn(ctx.clone())? {
            RenderReturn::Value(value) => {
                ctx.render_into(value)?;
            }
            RenderReturn::Mounted => {}
            RenderReturn::Async(future) => {
                future.await?;
            }
        }
        Ok(())
    }

    /// Concatenated text of every `<style>` block currently in the document.
    ///
    /// A separate extraction alongside [`Sequencer::process_current`]; the
    /// capture's `css` field stays reserved and empty.
    pub fn extract_css(&self) -> String {
        let doc = self.doc.lock().unwrap();
        crate::styles::collect_style_contents(&doc)
    }

    /// Locate the element whose content gets captured.
    ///
    /// A configured selector wins when it matches. Otherwise the designated
    /// container is used; when that container is empty but a body-child
    /// sibling has content, the sibling wins (portal-style rendering). A
    /// missing container falls back to the body itself.
    fn locate_root(&self) -> NodeId {
        let doc = self.doc.lock().unwrap();

        if let Some(raw) = &self.config().root_element_selector {
            match Selector::parse(raw) {
                Ok(selector) => {
                    if let Some(node) = doc.query_selector(&selector) {
                        return node;
                    }
                }
                Err(e) => warn!("Ignoring root_element_selector: {e}"),
            }
        }

        let Some(root) = doc.element_by_id(ROOT_ELEMENT_ID) else {
            // The container may have been replaced by the render function
            return doc.body();
        };

        if doc.inner_html(root).is_empty() {
            // Potentially rendering to a portal element mounted as a sibling
            for sibling in doc.child_nodes(doc.body()) {
                if !doc.inner_html(sibling).is_empty() {
                    return sibling;
                }
            }
        }

        root
    }
}
