use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding words.json, prefixes.json and roots.json
    pub data_dir: PathBuf,
}

impl DataConfig {
    pub fn new() -> Self {
        let data_dir = env::var("ETYMO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        Self { data_dir }
    }

    pub fn words_path(&self) -> PathBuf {
        self.data_dir.join("words.json")
    }

    pub fn prefixes_path(&self) -> PathBuf {
        self.data_dir.join("prefixes.json")
    }

    pub fn roots_path(&self) -> PathBuf {
        self.data_dir.join("roots.json")
    }

    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::new()
    }
}
