pub mod api;
pub mod record;
pub mod view;

pub use api::{
    AffixBreakdown, AffixExamplesResponse, AffixRef, HealthResponse, SearchResponse,
    SuggestionsResponse,
};
pub use record::{AffixEntry, AffixKind, AffixNote, SimilarWord, WordRecord};
pub use view::{RegionSet, ViewState};

/// Events flowing from the input side (stdin, CLI) into the app loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keystroke-level change of the input field, drives suggestions
    InputChanged(String),
    /// A word was submitted for lookup
    SubmitWord(String),
    Shutdown,
}

/// Events flowing from the app loop to the terminal UI
#[derive(Debug, Clone)]
pub enum UiEvent {
    Render(RegionSet),
    Suggestions(Vec<String>),
    HideSuggestions,
    /// A per-affix example fetch resolved after the main render
    ExampleSection { part: String, examples: Vec<String> },
    /// Every pending example fetch for the current word has resolved
    ExamplesDone,
    WordCount(usize),
}
