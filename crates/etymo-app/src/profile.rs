use std::fs::File;
use std::io::BufReader;

use etymo_config::Config;

/// Load config.json from the working directory when present,
/// otherwise fall back to the env-driven defaults.
pub fn load_config() -> Config {
    match load_config_file() {
        Ok(config) => {
            tracing::info!("loaded config.json");
            config
        }
        Err(e) => {
            tracing::debug!("config.json not used: {}", e);
            Config::new()
        }
    }
}

fn load_config_file() -> anyhow::Result<Config> {
    let file = File::open("config.json")?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}
