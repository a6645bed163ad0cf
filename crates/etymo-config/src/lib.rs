use std::env;

use serde::{Deserialize, Serialize};

use self::data::DataConfig;
use self::lookup::LookupConfig;
use self::server::ServerConfig;

pub mod data;
pub mod lookup;
pub mod server;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub lookup: LookupConfig,

    /// Base URL of a remote backend; when set the app queries it
    /// instead of loading the local dataset
    pub remote_url: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let remote_url = env::var("ETYMO_REMOTE_URL").ok().filter(|v| !v.is_empty());

        Config {
            server: ServerConfig::new(),
            data: DataConfig::new(),
            lookup: LookupConfig::new(),
            remote_url,
        }
    }
}
