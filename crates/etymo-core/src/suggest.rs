use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::preprocess;
use crate::provider::DatasetProvider;

/// Outcome of a keystroke before any provider call.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionInput {
    /// Input is empty, the suggestion list should disappear
    Hide,
    /// Query the provider; `seq` identifies this request generation
    Query { seq: u64, prefix: String },
}

/// Prefix autocomplete over the dataset. Every keystroke gets a fresh
/// sequence number; a response whose number is no longer current by the
/// time it arrives is discarded, so out-of-order completions can never
/// overwrite newer results.
pub struct SuggestionEngine<P: ?Sized> {
    provider: Arc<P>,
    limit: usize,
    seq: AtomicU64,
}

impl<P: DatasetProvider + ?Sized> SuggestionEngine<P> {
    pub fn new(provider: Arc<P>, limit: usize) -> Self {
        Self {
            provider,
            limit,
            seq: AtomicU64::new(0),
        }
    }

    /// Register a keystroke. Empty input invalidates any in-flight
    /// request in addition to hiding the list.
    pub fn begin(&self, raw: &str) -> SuggestionInput {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let prefix = preprocess::normalize(raw);
        if prefix.is_empty() {
            SuggestionInput::Hide
        } else {
            SuggestionInput::Query { seq, prefix }
        }
    }

    /// Run the provider query for one request generation. `None` means
    /// the response went stale while awaiting and must not render.
    pub async fn fetch(&self, seq: u64, prefix: &str) -> Option<Vec<String>> {
        let words = match self.provider.suggest(prefix, self.limit).await {
            Ok(words) => words,
            Err(err) => {
                // provider trouble hides the list, it never errors the view
                tracing::debug!("suggestion fetch for '{}' failed: {}", prefix, err);
                Vec::new()
            }
        };

        if self.seq.load(Ordering::SeqCst) != seq {
            return None;
        }
        Some(words)
    }

    /// Convenience wrapper for callers without interleaving concerns:
    /// `Some(vec![])` hides the list, `None` marks a stale response.
    pub async fn on_input(&self, raw: &str) -> Option<Vec<String>> {
        match self.begin(raw) {
            SuggestionInput::Hide => Some(Vec::new()),
            SuggestionInput::Query { seq, prefix } => self.fetch(seq, &prefix).await,
        }
    }
}
