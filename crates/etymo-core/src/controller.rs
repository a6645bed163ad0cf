use std::sync::Arc;

use etymo_types::{RegionSet, ViewState};

use crate::preprocess;
use crate::provider::DatasetProvider;
use crate::view::{self, ViewEvent};

/// Owns the single live [`ViewState`] and drives it through the defined
/// transitions. A lookup is two phases so callers can show the loading
/// render before the provider answers:
///
/// 1. [`begin`](Self::begin) normalizes the input and enters `Loading`
///    (empty input is a no-op, no transition);
/// 2. [`resolve`](Self::resolve) asks the provider and enters
///    `Populated` or `Error`.
pub struct QueryController<P: ?Sized> {
    provider: Arc<P>,
    state: ViewState,
}

impl<P: DatasetProvider + ?Sized> QueryController<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn begin(&mut self, raw: &str) -> Option<(String, RegionSet)> {
        let word = preprocess::normalize(raw);
        if word.is_empty() {
            return None;
        }

        self.state = view::transition(self.state.clone(), ViewEvent::Submitted(word.clone()));
        Some((word, view::render(&self.state)))
    }

    pub async fn resolve(&mut self, word: &str) -> RegionSet {
        let event = match self.provider.word(word).await {
            Ok(record) => ViewEvent::Resolved(record),
            Err(err) => {
                tracing::debug!("lookup for '{}' failed: {}", word, err);
                ViewEvent::Failed(err.user_message())
            }
        };

        self.state = view::transition(self.state.clone(), event);
        view::render(&self.state)
    }

    /// Affix parts of the populated record, for the follow-up
    /// example fetches. Empty outside `Populated`.
    pub fn affix_parts(&self) -> Vec<String> {
        match &self.state {
            ViewState::Populated(record) => record
                .affix_analysis
                .iter()
                .map(|note| note.part.clone())
                .collect(),
            _ => Vec::new(),
        }
    }

    pub async fn fetch_examples(&self, part: &str, limit: usize) -> Vec<String> {
        match self.provider.affix_examples(part, limit).await {
            Ok(examples) => examples,
            Err(err) => {
                tracing::debug!("example fetch for '{}' failed: {}", part, err);
                Vec::new()
            }
        }
    }
}
