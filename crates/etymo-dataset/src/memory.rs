use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use async_trait::async_trait;
use etymo_config::data::DataConfig;
use etymo_core::preprocess::{normalize, strip_hyphens};
use etymo_core::provider::DatasetProvider;
use etymo_core::ProviderError;
use etymo_types::{AffixBreakdown, AffixEntry, AffixKind, AffixRef, WordRecord};

/// Dataset loaded once at startup from the three static JSON files.
/// Words live in a `BTreeMap` so prefix enumeration is lexicographic.
#[derive(Debug)]
pub struct MemoryProvider {
    words: BTreeMap<String, WordRecord>,
    prefixes: BTreeMap<String, AffixEntry>,
    roots: BTreeMap<String, AffixEntry>,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ProviderError> {
    let file = File::open(path)
        .map_err(|e| ProviderError::DataUnavailable(format!("{}: {}", path.display(), e)))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ProviderError::DataUnavailable(format!("{}: {}", path.display(), e)))
}

impl MemoryProvider {
    /// Load words.json, prefixes.json and roots.json. Any missing or
    /// malformed file is `DataUnavailable`.
    pub fn load(data: &DataConfig) -> Result<Self, ProviderError> {
        let words: BTreeMap<String, WordRecord> = read_json(&data.words_path())?;
        let prefixes = read_json(&data.prefixes_path())?;
        let roots = read_json(&data.roots_path())?;

        let provider = Self::from_parts(words, prefixes, roots);
        tracing::info!("dataset loaded: {} words", provider.words.len());
        Ok(provider)
    }

    /// Build from in-memory maps; word keys are re-normalized so every
    /// key maps to exactly one record under case-insensitive lookup.
    pub fn from_parts(
        words: BTreeMap<String, WordRecord>,
        prefixes: BTreeMap<String, AffixEntry>,
        roots: BTreeMap<String, AffixEntry>,
    ) -> Self {
        let words = words
            .into_iter()
            .map(|(word, record)| (normalize(&word), record))
            .collect();
        Self {
            words,
            prefixes,
            roots,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Curated examples from the reference tables, if any.
    fn curated_examples(&self, part: &str) -> Option<&AffixEntry> {
        self.prefixes.get(part).or_else(|| self.roots.get(part))
    }
}

#[async_trait]
impl DatasetProvider for MemoryProvider {
    async fn word(&self, word: &str) -> Result<WordRecord, ProviderError> {
        let key = normalize(word);
        self.words
            .get(&key)
            .cloned()
            .ok_or(ProviderError::NotFound(key))
    }

    async fn suggest(&self, prefix: &str, limit: usize) -> Result<Vec<String>, ProviderError> {
        let prefix = normalize(prefix);
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
        let part = normalize(part);
        if part.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(entry) = self.curated_examples(&part) {
            return Ok(entry.examples.iter().take(limit).cloned().collect());
        }

        // fallback: substring scan over the word list, hyphens stripped
        let bare = strip_hyphens(&part);
        if bare.is_empty() {
            return Ok(Vec::new());
        }
        let mut examples = Vec::new();
        for word in self.words.keys() {
            if word.contains(&bare) && !examples.contains(word) {
                examples.push(word.clone());
                if examples.len() >= limit {
                    break;
                }
            }
        }
        Ok(examples)
    }

    async fn word_count(&self) -> Result<usize, ProviderError> {
        Ok(self.words.len())
    }

    async fn analyze(&self, word: &str) -> Result<AffixBreakdown, ProviderError> {
        let word = normalize(word);
        let mut breakdown = AffixBreakdown {
            word: word.clone(),
            prefix: None,
            root: None,
            suffix: None,
        };

        // hyphen position in the key marks the category: "uni-" is a
        // prefix, "-able" a suffix; first match in key order wins
        for (part, entry) in &self.prefixes {
            let bare = strip_hyphens(part);
            if part.ends_with('-') && breakdown.prefix.is_none() && word.starts_with(&bare) {
                breakdown.prefix = Some(AffixRef {
                    affix: part.clone(),
                    kind: AffixKind::Prefix,
                    meaning: entry.meaning.clone(),
                });
            } else if part.starts_with('-') && breakdown.suffix.is_none() && word.ends_with(&bare) {
                breakdown.suffix = Some(AffixRef {
                    affix: part.clone(),
                    kind: AffixKind::Suffix,
                    meaning: entry.meaning.clone(),
                });
            }
        }

        for (part, entry) in &self.roots {
            if word.contains(&strip_hyphens(part)) {
                breakdown.root = Some(AffixRef {
                    affix: part.clone(),
                    kind: AffixKind::Root,
                    meaning: entry.meaning.clone(),
                });
                break;
            }
        }

        Ok(breakdown)
    }
}
