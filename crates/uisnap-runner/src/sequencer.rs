//! The example sequencer: registration, initialization and cursor iteration.

use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use uisnap_core::{Error, Result, RunId, RunnerConfig};
use uisnap_dom::Document;

use crate::example::{component_name_from_file_name, Example, ExampleSource, FilePayload};
use crate::filter::{DefaultFilter, ExampleFilter};
use crate::harness::{DefaultHarness, Harness};

/// Lifecycle state of a sequencer.
///
/// `Exhausted` is terminal; there is no reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// Accepting registrations; iteration not yet possible
    Registering,
    /// Sequence fixed; cursor not yet positioned
    Initialized,
    /// Positioned on an example
    Iterating,
    /// Cursor ran past the end of the sequence
    Exhausted,
}

/// Options for [`Sequencer::initialize`].
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Target name handed to the validation filter
    pub target: Option<String>,
}

/// Walks an ordered, flattened, optionally-filtered sequence of examples and
/// mediates one-at-a-time rendering of each into the shared scratch document.
pub struct Sequencer {
    run_id: RunId,
    config: RunnerConfig,
    only_component: Option<String>,
    pub(crate) harness: Arc<dyn Harness>,
    pub(crate) doc: Arc<Mutex<Document>>,
    registered: Vec<Example>,
    sequence: Option<Vec<Example>>,
    cursor: Option<usize>,
    state: SequencerState,
}

impl Sequencer {
    /// Create a sequencer with the default harness.
    pub fn new(config: RunnerConfig) -> Self {
        Self::with_harness(config, Arc::new(DefaultHarness))
    }

    /// Create a sequencer with a custom harness.
    pub fn with_harness(config: RunnerConfig, harness: Arc<dyn Harness>) -> Self {
        let run_id = RunId::new();
        let only_component = config.only_component().map(str::to_string);
        info!(
            "Creating sequencer: run_id={}, only_component={:?}",
            run_id, only_component
        );
        Self {
            run_id,
            config,
            only_component,
            harness,
            doc: Arc::new(Mutex::new(Document::new())),
            registered: Vec::new(),
            sequence: None,
            cursor: None,
            state: SequencerState::Registering,
        }
    }

    /// The run identifier, for log correlation.
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// The runner configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// The shared scratch document.
    pub fn document(&self) -> Arc<Mutex<Document>> {
        Arc::clone(&self.doc)
    }

    /// Length of the fixed iteration sequence, once initialized.
    pub fn sequence_len(&self) -> Option<usize> {
        self.sequence.as_ref().map(Vec::len)
    }

    /// Append flattened entries for the given registration payloads.
    ///
    /// Each `(file_name, component, variants)` payload expands into one entry
    /// per variant, in insertion order. No deduplication. Only valid before
    /// [`Sequencer::initialize`].
    pub fn register(&mut self, sources: Vec<ExampleSource>) -> Result<()> {
        if self.state != SequencerState::Registering {
            return Err(Error::InvalidState(
                "register called after initialize".to_string(),
            ));
        }
        for source in sources {
            self.registered.extend(source.flatten());
        }
        Ok(())
    }

    /// Register the contents of one fixture file.
    ///
    /// Accepts either explicit component entries (generated examples) or a
    /// bare variants map for a component named after the file.
    pub fn register_file(&mut self, file_name: &str, payload: FilePayload) -> Result<()> {
        match payload {
            FilePayload::Components(entries) => {
                debug!(
                    "Found {} component(s) in {}",
                    entries.len(),
                    file_name
                );
                let sources = entries
                    .into_iter()
                    .map(|(component, variants)| {
                        ExampleSource::new(file_name, component, variants)
                    })
                    .collect();
                self.register(sources)
            }
            FilePayload::Variants(variants) => {
                let component = component_name_from_file_name(file_name);
                debug!(
                    "Found {} variant(s) for component {} in {}",
                    variants.len(),
                    component,
                    file_name
                );
                self.register(vec![ExampleSource::new(file_name, component, variants)])
            }
        }
    }

    /// Snapshot the registered entries, validate and filter them, and fix the
    /// result as the iteration sequence.
    ///
    /// Must be called exactly once, before any iteration. Uses the default
    /// validation filter; see [`Sequencer::initialize_with_filter`].
    pub fn initialize(&mut self, options: InitOptions) -> Result<()> {
        self.initialize_with_filter(options, &DefaultFilter)
    }

    /// [`Sequencer::initialize`] with a custom validation filter.
    pub fn initialize_with_filter(
        &mut self,
        options: InitOptions,
        filter: &dyn ExampleFilter,
    ) -> Result<()> {
        if self.state != SequencerState::Registering {
            return Err(Error::InvalidState(
                "initialize called more than once".to_string(),
            ));
        }
        let registered = self.registered.clone();
        let total = registered.len();
        let sequence = filter.apply(registered, options.target.as_deref());
        info!(
            "Initialized sequencer: run_id={}, {} of {} example(s) kept, target={:?}",
            self.run_id,
            sequence.len(),
            total,
            options.target
        );
        self.sequence = Some(sequence);
        self.state = SequencerState::Initialized;
        Ok(())
    }

    /// Move the cursor to the next renderable example.
    ///
    /// Entries whose component does not match the configured `only`
    /// restriction are skipped without rendering. Returns `Ok(true)` resting
    /// on a renderable item and `Ok(false)` once past the end; further calls
    /// keep returning `Ok(false)`.
    pub fn advance(&mut self) -> Result<bool> {
        if self.sequence.is_none() {
            return Err(Error::NotInitialized);
        }

        loop {
            let cursor = match self.cursor {
                None => 0,
                Some(cursor) => cursor.saturating_add(1),
            };
            self.cursor = Some(cursor);

            match self.sequence.as_deref().and_then(|seq| seq.get(cursor)) {
                None => {
                    self.state = SequencerState::Exhausted;
                    return Ok(false);
                }
                Some(example) => {
                    if let Some(only) = &self.only_component {
                        if &example.component != only {
                            debug!(
                                "Skipping component {}, variant {} (only={})",
                                example.component, example.variant, only
                            );
                            continue;
                        }
                    }
                    self.state = SequencerState::Iterating;
                    return Ok(true);
                }
            }
        }
    }

    /// The example at the current cursor position.
    pub fn current(&self) -> Result<&Example> {
        let sequence = self.sequence.as_ref().ok_or(Error::NotInitialized)?;
        let cursor = self.cursor.ok_or(Error::NoCurrentExample)?;
        sequence.get(cursor).ok_or(Error::NoCurrentExample)
    }
}

impl std::fmt::Debug for Sequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequencer")
            .field("run_id", &self.run_id)
            .field("state", &self.state)
            .field("registered", &self.registered.len())
            .field("sequence_len", &self.sequence_len())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
