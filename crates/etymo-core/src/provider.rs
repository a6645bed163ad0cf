use async_trait::async_trait;
use etymo_types::{AffixBreakdown, WordRecord};

use crate::error::ProviderError;

/// Lookup operations every dataset backend answers. Implemented by the
/// in-memory loader (etymo-dataset) and the HTTP client (etymo-client).
#[async_trait]
pub trait DatasetProvider: Send + Sync {
    /// Fetch the record for a normalized word. Absent word is
    /// `ProviderError::NotFound`, never a panic or an empty record.
    async fn word(&self, word: &str) -> Result<WordRecord, ProviderError>;

    /// Words starting with the normalized prefix, lexicographic,
    /// at most `limit`. Empty or unknown prefix yields an empty list.
    async fn suggest(&self, prefix: &str, limit: usize) -> Result<Vec<String>, ProviderError>;

    /// Words sharing an affix. Curated reference examples win; otherwise
    /// a substring scan with hyphen markers stripped. Heuristic only.
    async fn affix_examples(&self, part: &str, limit: usize)
    -> Result<Vec<String>, ProviderError>;

    /// Number of words in the dataset.
    async fn word_count(&self) -> Result<usize, ProviderError>;

    /// Heuristic prefix/root/suffix match against the reference tables.
    async fn analyze(&self, word: &str) -> Result<AffixBreakdown, ProviderError>;
}
