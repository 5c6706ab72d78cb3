//! Example types and registration payloads.

use std::path::Path;

use crate::render::RenderSpec;

/// One renderable unit: a specific component in a specific variant state.
///
/// Identity is the (file_name, component, variant) triple; uniqueness is not
/// enforced beyond insertion order.
#[derive(Debug, Clone)]
pub struct Example {
    /// File the example was registered from
    pub file_name: String,
    /// Component name
    pub component: String,
    /// Variant name
    pub variant: String,
    /// How to render this example
    pub render: RenderSpec,
}

/// Registration payload: one component's variants from one file.
///
/// Variant order is preserved; flattening expands each variant into one
/// [`Example`] in this order.
#[derive(Debug, Clone)]
pub struct ExampleSource {
    /// File the examples come from
    pub file_name: String,
    /// Component name
    pub component: String,
    /// Named variants in insertion order
    pub variants: Vec<(String, RenderSpec)>,
}

impl ExampleSource {
    /// Create a registration payload.
    pub fn new(
        file_name: impl Into<String>,
        component: impl Into<String>,
        variants: Vec<(String, RenderSpec)>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            component: component.into(),
            variants,
        }
    }

    /// Expand into flat examples, preserving variant order.
    pub fn flatten(self) -> Vec<Example> {
        let Self {
            file_name,
            component,
            variants,
        } = self;
        variants
            .into_iter()
            .map(|(variant, render)| Example {
                file_name: file_name.clone(),
                component: component.clone(),
                variant,
                render,
            })
            .collect()
    }
}

/// Raw per-file registration payload.
///
/// Fixture files export either a list of component entries (generated
/// examples) or a single variants map for the component named after the file.
#[derive(Debug)]
pub enum FilePayload {
    /// Explicit component entries
    Components(Vec<(String, Vec<(String, RenderSpec)>)>),
    /// Bare variants for a component derived from the file name
    Variants(Vec<(String, RenderSpec)>),
}

/// Derive a component name from a fixture file name.
///
/// Uses the file stem, so `/foo/dropdown.snap.js` names `dropdown.snap` and
/// `button.js` names `button`.
pub fn component_name_from_file_name(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string())
}
