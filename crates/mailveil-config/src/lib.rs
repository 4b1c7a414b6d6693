use mailveil_links::MailClient;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration for the mailveil CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub links: LinksConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Mail client used for reply links unless overridden
    #[serde(default)]
    pub client: MailClient,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Print a redaction report to stderr
    #[serde(default)]
    pub report: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            report: false,
        }
    }
}

fn default_pretty() -> bool {
    true
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, writing the defaults there if it is missing
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(path, content)?;
            tracing::info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "mailveil", "mailveil") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.mailveil/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.links.client, MailClient::Mailto);
        assert!(config.output.pretty);
        assert!(!config.output.report);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[links]
client = "gmail"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.links.client, MailClient::Gmail);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        std::fs::write(&path, "[output]\nreport = true\n").unwrap();
        let reloaded = Config::load_from(&path).unwrap();
        assert!(reloaded.output.report);
        assert_eq!(reloaded.links.client, MailClient::Mailto);
    }

    #[test]
    fn test_invalid_client_rejected() {
        let result: Result<Config, _> = toml::from_str("[links]\nclient = \"pigeon\"\n");
        assert!(result.is_err());
    }
}
