use serde::{Deserialize, Serialize};

/// Morpheme category used in affix analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffixKind {
    Prefix,
    Root,
    Suffix,
}

impl AffixKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AffixKind::Prefix => "prefix",
            AffixKind::Root => "root",
            AffixKind::Suffix => "suffix",
        }
    }
}

/// One prefix/root/suffix note attached to a word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffixNote {
    #[serde(rename = "type")]
    pub kind: AffixKind,
    /// Affix text, may carry a hyphen marker ("uni-", "-able")
    pub part: String,
    pub meaning: String,
}

/// A confusable word shown alongside the queried one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarWord {
    pub word: String,
    pub translation: String,
    pub difference: String,
}

/// Full dictionary entry, keyed externally by its lowercase word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(rename = "wordClass")]
    pub word_class: String,
    pub meanings: Vec<String>,
    #[serde(rename = "affixAnalysis", default)]
    pub affix_analysis: Vec<AffixNote>,
    #[serde(rename = "similarWords", default)]
    pub similar_words: Vec<SimilarWord>,
}

/// Reference entry in the prefixes/roots data files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffixEntry {
    pub meaning: String,
    #[serde(default)]
    pub examples: Vec<String>,
}
