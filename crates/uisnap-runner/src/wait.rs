//! Bounded polling for rendered content to appear.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::debug;

use uisnap_core::RunnerConfig;
use uisnap_dom::{Document, NodeId};

/// Bounds for one content wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentWait {
    /// Maximum time to wait for non-empty content
    pub timeout: Duration,

    /// Polling interval between checks
    pub poll_interval: Duration,
}

impl Default for ContentWait {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            poll_interval: Duration::from_millis(10),
        }
    }
}

impl ContentWait {
    /// Content wait bounds taken from the runner configuration.
    pub fn from_config(config: &RunnerConfig) -> Self {
        Self {
            timeout: config.async_timeout(),
            poll_interval: config.poll_interval(),
        }
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the polling interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

/// Result of one content wait.
#[derive(Debug, Clone)]
pub struct WaitOutcome {
    /// Serialized content found at return time (possibly still empty)
    pub html: String,

    /// Total time waited
    pub waited: Duration,

    /// Number of polling rounds after the first check
    pub attempts: u32,
}

/// Poll a node's serialized content until it is non-empty or the timeout
/// elapses.
///
/// Empty content at timeout is not a failure; whatever is present at return
/// time is handed back. The lock is never held across an await point.
pub async fn wait_for_content(
    doc: &Arc<Mutex<Document>>,
    node: NodeId,
    wait: &ContentWait,
) -> WaitOutcome {
    let start = Instant::now();
    let mut attempts = 0u32;

    loop {
        let html = {
            let doc = doc.lock().unwrap();
            doc.inner_html(node).trim().to_string()
        };
        let waited = start.elapsed();

        if !html.is_empty() || waited >= wait.timeout {
            if attempts > 0 {
                debug!(
                    "Content not available on first check. Waited {}ms over {} attempt(s)",
                    waited.as_millis(),
                    attempts
                );
            }
            return WaitOutcome {
                html,
                waited,
                attempts,
            };
        }

        attempts += 1;
        tokio::time::sleep(wait.poll_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_root(markup: Option<&str>) -> (Arc<Mutex<Document>>, NodeId) {
        let mut doc = Document::new();
        let root = doc.create_element("div");
        let body = doc.body();
        doc.append_child(body, root).unwrap();
        if let Some(markup) = markup {
            doc.append_markup(root, markup).unwrap();
        }
        (Arc::new(Mutex::new(doc)), root)
    }

    #[test]
    fn test_content_wait_default() {
        let wait = ContentWait::default();
        assert_eq!(wait.timeout, Duration::from_secs(5));
        assert_eq!(wait.poll_interval, Duration::from_millis(10));
    }

    #[test]
    fn test_content_wait_from_config() {
        let config = RunnerConfig {
            async_timeout_ms: 250,
            poll_interval_ms: 20,
            ..Default::default()
        };
        let wait = ContentWait::from_config(&config);
        assert_eq!(wait.timeout, Duration::from_millis(250));
        assert_eq!(wait.poll_interval, Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_immediate_content_needs_no_polling() {
        let (doc, root) = doc_with_root(Some("<p>ready</p>"));
        let outcome = wait_for_content(&doc, root, &ContentWait::default()).await;
        assert_eq!(outcome.html, "<p>ready</p>");
        assert_eq!(outcome.attempts, 0);
    }

    #[tokio::test]
    async fn test_delayed_content_is_found() {
        let (doc, root) = doc_with_root(None);
        let writer = Arc::clone(&doc);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(15)).await;
            writer
                .lock()
                .unwrap()
                .append_markup(root, "<p>late</p>")
                .unwrap();
        });

        let wait = ContentWait::default().with_timeout(Duration::from_secs(1));
        let outcome = wait_for_content(&doc, root, &wait).await;
        assert_eq!(outcome.html, "<p>late</p>");
        assert!(outcome.attempts > 0);
    }

    #[tokio::test]
    async fn test_timeout_returns_empty_content() {
        let (doc, root) = doc_with_root(None);
        let wait = ContentWait::default().with_timeout(Duration::from_millis(50));

        let start = Instant::now();
        let outcome = wait_for_content(&doc, root, &wait).await;
        let elapsed = start.elapsed();

        assert_eq!(outcome.html, "");
        assert!(elapsed >= Duration::from_millis(50));
        // Bounded wait: ~50ms timeout plus at most a few poll intervals
        assert!(elapsed < Duration::from_millis(200), "waited {elapsed:?}");
    }

    #[tokio::test]
    async fn test_whitespace_only_content_counts_as_empty() {
        let (doc, root) = doc_with_root(Some("   \n  "));
        let wait = ContentWait::default().with_timeout(Duration::from_millis(30));
        let outcome = wait_for_content(&doc, root, &wait).await;
        assert_eq!(outcome.html, "");
    }
}
