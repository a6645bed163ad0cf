use crate::record::WordRecord;

/// The single live UI state; transitions live in etymo-core
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    /// A lookup for this word is in flight
    Loading(String),
    Populated(WordRecord),
    Error(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading(_))
    }
}

/// Rendered output regions, the terminal equivalent of the page's
/// result panels. Owned by the UI loop, replaced wholesale on render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionSet {
    pub translation: String,
    pub phonetic: String,
    pub word_class: String,
    pub meanings: Vec<String>,
    /// One formatted block per affix note, or a single placeholder line
    pub affix_analysis: Vec<String>,
    /// Example sections, appended as each per-affix fetch resolves
    pub affix_examples: Vec<String>,
    /// One formatted block per similar word, or a single placeholder line
    pub comparisons: Vec<String>,
}
