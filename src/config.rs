use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub wordlist: WordlistConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordlistConfig {
    /// Path to the common-passwords file, one candidate per line
    pub path: String,

    /// Maximum number of lines to load
    pub limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fixed candidate length for the brute-force phase
    pub length: usize,

    /// Append the 10 ASCII digits to the alphabet
    pub use_digits: bool,

    /// Append the 32 ASCII punctuation characters to the alphabet
    pub use_symbols: bool,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.wordlist.path.is_empty() {
            anyhow::bail!("wordlist.path must not be empty");
        }

        if self.wordlist.limit == 0 {
            anyhow::bail!("wordlist.limit must be greater than 0");
        }

        Ok(())
    }

    /// Create default configuration
    pub fn default_toml() -> String {
        r#"
[wordlist]
path = "passwords.txt"
limit = 1_000_000

[search]
length = 5
use_digits = true
use_symbols = false
"#
        .to_string()
    }

    /// Save default config to file
    pub fn save_default(path: &str) -> Result<()> {
        fs::write(path, Self::default_toml())
            .context("Failed to write default config")?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            wordlist: WordlistConfig {
                path: "passwords.txt".to_string(),
                limit: 1_000_000,
            },
            search: SearchConfig {
                length: 5,
                use_digits: true,
                use_symbols: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.search.length, 5);
        assert!(config.search.use_digits);
        assert!(!config.search.use_symbols);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.wordlist.path, config.wordlist.path);
        assert_eq!(parsed.search.length, config.search.length);
    }

    #[test]
    fn test_default_toml_parses() {
        let parsed: Config = toml::from_str(&Config::default_toml()).unwrap();
        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.wordlist.path, "passwords.txt");
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let mut config = Config::default();
        config.wordlist.limit = 0;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("wordlist.limit"), "got err: {}", err);
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let mut config = Config::default();
        config.wordlist.path = String::new();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("wordlist.path"), "got err: {}", err);
    }
}
