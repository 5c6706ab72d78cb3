//! Build configuration for fixture bundles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Fixed name of the bundle output file.
pub const OUTPUT_FILENAME: &str = "uisnap-bundle.js";

/// Configuration handed to the bundling tool.
///
/// Starts from fixed defaults; callers adjust it through the customization
/// hook of [`create_bundle`](crate::create_bundle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Entry point of the fixture bundle
    pub entry: PathBuf,

    /// Module resolution extensions
    pub extensions: Vec<String>,

    /// Modules left unbundled, mapped to the globals that provide them
    pub externals: BTreeMap<String, String>,

    /// Output file name
    pub output_filename: String,

    /// Output directory
    pub output_dir: PathBuf,
}

impl BundleConfig {
    /// Default configuration for an entry point.
    ///
    /// UI-framework modules are externalized to their page globals so the
    /// bundle stays framework-agnostic; output lands in the temp directory.
    pub fn new(entry: impl Into<PathBuf>) -> Self {
        let mut externals = BTreeMap::new();
        externals.insert("react".to_string(), "React".to_string());
        externals.insert("react-dom".to_string(), "ReactDOM".to_string());

        Self {
            entry: entry.into(),
            extensions: ["*", ".js", ".jsx", ".json"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            externals,
            output_filename: OUTPUT_FILENAME.to_string(),
            output_dir: std::env::temp_dir(),
        }
    }

    /// Full path of the output file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_filename)
    }

    /// Override the output directory.
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }
}
