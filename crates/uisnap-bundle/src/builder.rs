//! The bundler seam and its callback-to-future adaptation.

use std::path::PathBuf;
use std::process::Command;

use tokio::sync::oneshot;
use tracing::{debug, error};

use uisnap_core::{Error, Result};

use crate::config::BundleConfig;

/// Completion callback handed to a [`Bundler`].
pub type BuildCompletion = Box<dyn FnOnce(std::result::Result<(), String>) + Send + 'static>;

/// The external bundling tool.
///
/// One call per build; the tool reports completion through the callback,
/// carrying its own error message on failure.
pub trait Bundler: Send + Sync {
    /// Start one build and report completion through `done`.
    fn build(&self, config: &BundleConfig, done: BuildCompletion);
}

/// Build a fixture bundle and resolve with the output file's path.
///
/// Assembles the default configuration for `entry`, passes it through the
/// customization hook, and invokes the bundler once. The tool's error is
/// propagated unwrapped. One-shot: no retry, no caching.
pub async fn create_bundle<B, F>(
    bundler: &B,
    entry: impl Into<PathBuf>,
    customize: F,
) -> Result<PathBuf>
where
    B: Bundler + ?Sized,
    F: FnOnce(BundleConfig) -> BundleConfig,
{
    let config = customize(BundleConfig::new(entry));
    let output_path = config.output_path();
    debug!(
        "Bundling {} into {}",
        config.entry.display(),
        output_path.display()
    );

    let (tx, rx) = oneshot::channel();
    bundler.build(
        &config,
        Box::new(move |result| {
            let _ = tx.send(result);
        }),
    );

    match rx.await {
        Ok(Ok(())) => Ok(output_path),
        Ok(Err(message)) => {
            error!("Bundle build failed: {message}");
            Err(Error::Bundler(message))
        }
        Err(_) => Err(Error::Bundler(
            "bundler dropped its completion callback".to_string(),
        )),
    }
}

/// Bundler backed by an external executable.
///
/// The configuration is rendered to command-line arguments; the command runs
/// on a worker thread and the completion callback fires when it exits.
#[derive(Debug, Clone)]
pub struct CommandBundler {
    program: String,
}

impl CommandBundler {
    /// Create a bundler invoking the given executable.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, config: &BundleConfig) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("--entry")
            .arg(&config.entry)
            .arg("--outfile")
            .arg(config.output_path());
        for extension in &config.extensions {
            command.arg("--extension").arg(extension);
        }
        for (module, global) in &config.externals {
            command.arg("--external").arg(format!("{module}={global}"));
        }
        command
    }
}

impl Bundler for CommandBundler {
    fn build(&self, config: &BundleConfig, done: BuildCompletion) {
        let mut command = self.command(config);
        let program = self.program.clone();
        std::thread::spawn(move || {
            let result = match command.output() {
                Ok(output) if output.status.success() => Ok(()),
                Ok(output) => {
                    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                    if stderr.is_empty() {
                        Err(format!("{program} exited with {}", output.status))
                    } else {
                        Err(stderr)
                    }
                }
                Err(e) => Err(format!("failed to run {program}: {e}")),
            };
            done(result);
        });
    }
}
