use std::env;

use serde::{Deserialize, Serialize};

fn default_suggest_limit() -> usize {
    5
}

fn default_example_limit() -> usize {
    5
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    #[serde(default = "default_suggest_limit")]
    pub suggest_limit: usize,
    #[serde(default = "default_example_limit")]
    pub example_limit: usize,
}

impl LookupConfig {
    pub fn new() -> Self {
        let suggest_limit = env::var("ETYMO_SUGGEST_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_suggest_limit);

        let example_limit = env::var("ETYMO_EXAMPLE_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_example_limit);

        Self {
            suggest_limit,
            example_limit,
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            suggest_limit: default_suggest_limit(),
            example_limit: default_example_limit(),
        }
    }
}
