use serde::{Deserialize, Serialize};

use crate::record::{AffixKind, WordRecord};

/// `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub word_count: usize,
}

/// `GET /api/word/{word}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<WordRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `GET /api/suggestions?prefix=`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub success: bool,
    pub suggestions: Vec<String>,
    pub count: usize,
}

/// `GET /api/affix/{part}/examples`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffixExamplesResponse {
    pub success: bool,
    pub affix: String,
    pub examples: Vec<String>,
    pub count: usize,
}

/// A matched reference affix inside a breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffixRef {
    pub affix: String,
    #[serde(rename = "type")]
    pub kind: AffixKind,
    pub meaning: String,
}

/// `GET /api/analyze?word=` — heuristic prefix/root/suffix match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffixBreakdown {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<AffixRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<AffixRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<AffixRef>,
}
