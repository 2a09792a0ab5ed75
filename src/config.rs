use crate::logger;
use crate::models::{DEFAULT_ROUNDS, MAX_ROUNDS, MIN_ROUNDS};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "drill.json";

/// Startup preferences, read from an optional JSON file next to the binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_rounds")]
    pub rounds: u32,
}

fn default_rounds() -> u32 {
    DEFAULT_ROUNDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rounds: DEFAULT_ROUNDS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("configured rounds {0} is outside 5..=20")]
    RoundsOutOfRange(u32),
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&config.rounds) {
            return Err(ConfigError::RoundsOutOfRange(config.rounds));
        }
        Ok(config)
    }

    /// A broken config never stops the game from starting; it is logged and
    /// replaced by the defaults.
    pub fn load_or_default(path: &Path) -> Config {
        if !path.exists() {
            return Config::default();
        }
        match Config::load(path) {
            Ok(config) => config,
            Err(err) => {
                logger::log(&format!("ignoring {}: {}", path.display(), err));
                Config::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_valid_config() {
        let file = config_file(r#"{ "rounds": 12 }"#);
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.rounds, 12);
    }

    #[test]
    fn missing_rounds_field_uses_default() {
        let file = config_file("{}");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.rounds, DEFAULT_ROUNDS);
    }

    #[test]
    fn rejects_out_of_range_rounds() {
        let file = config_file(r#"{ "rounds": 50 }"#);
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::RoundsOutOfRange(50))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let file = config_file("rounds = 10");
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let config = Config::load_or_default(Path::new("does-not-exist.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_or_default_falls_back_on_bad_content() {
        let file = config_file(r#"{ "rounds": 3 }"#);
        let config = Config::load_or_default(file.path());
        assert_eq!(config, Config::default());
    }
}
