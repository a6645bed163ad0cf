use std::collections::BTreeMap;

use async_trait::async_trait;
use etymo_types::{AffixBreakdown, AffixKind, AffixNote, SimilarWord, WordRecord};

use crate::error::ProviderError;
use crate::preprocess;
use crate::provider::DatasetProvider;

/// Small fixed dataset for controller and engine tests.
pub struct StaticProvider {
    words: BTreeMap<String, WordRecord>,
    reachable: bool,
}

impl StaticProvider {
    pub fn sample() -> Self {
        let mut words = BTreeMap::new();
        words.insert(
            "unique".to_string(),
            WordRecord {
                translation: "独特的".to_string(),
                phonetic: Some("/juːˈniːk/".to_string()),
                word_class: "adj.".to_string(),
                meanings: vec!["独特的".to_string(), "唯一的".to_string()],
                affix_analysis: vec![AffixNote {
                    kind: AffixKind::Prefix,
                    part: "uni-".to_string(),
                    meaning: "one".to_string(),
                }],
                similar_words: vec![SimilarWord {
                    word: "special".to_string(),
                    translation: "特别的".to_string(),
                    difference: "uniqueness vs. distinctiveness".to_string(),
                }],
            },
        );
        for word in ["under", "unable", "union", "untie", "uphold"] {
            words.insert(
                word.to_string(),
                WordRecord {
                    translation: "词".to_string(),
                    phonetic: None,
                    word_class: "v.".to_string(),
                    meanings: Vec::new(),
                    affix_analysis: Vec::new(),
                    similar_words: Vec::new(),
                },
            );
        }
        Self {
            words,
            reachable: true,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            words: BTreeMap::new(),
            reachable: false,
        }
    }

    fn check(&self) -> Result<(), ProviderError> {
        if self.reachable {
            Ok(())
        } else {
            Err(ProviderError::Transport("connection refused".to_string()))
        }
    }
}

#[async_trait]
impl DatasetProvider for StaticProvider {
    async fn word(&self, word: &str) -> Result<WordRecord, ProviderError> {
        self.check()?;
        self.words
            .get(&preprocess::normalize(word))
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(word.to_string()))
    }

    async fn suggest(&self, prefix: &str, limit: usize) -> Result<Vec<String>, ProviderError> {
        self.check()?;
        let prefix = preprocess::normalize(prefix);
        if prefix.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .words
            .keys()
            .filter(|word| word.starts_with(&prefix))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn affix_examples(&self, part: &str, limit: usize) -> Result<Vec<String>, ProviderError> {
        self.check()?;
        let bare = preprocess::strip_hyphens(&preprocess::normalize(part));
        if bare.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .words
            .keys()
            .filter(|word| word.contains(&bare))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn word_count(&self) -> Result<usize, ProviderError> {
        self.check()?;
        Ok(self.words.len())
    }

    async fn analyze(&self, word: &str) -> Result<AffixBreakdown, ProviderError> {
        self.check()?;
        Ok(AffixBreakdown {
            word: preprocess::normalize(word),
            prefix: None,
            root: None,
            suffix: None,
        })
    }
}
