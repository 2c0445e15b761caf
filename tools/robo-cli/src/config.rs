//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use robo_commerce::Currency;
use robo_data::DEFAULT_CATALOGUE_ENDPOINT;
use serde::{Deserialize, Deserializer, Serialize};

/// Config file names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["roboshop.toml", ".roboshop.toml", "roboshop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShopConfig {
    /// Where the catalogue comes from.
    #[serde(default)]
    pub catalogue: CatalogueConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// The currency catalogue prices are quoted in.
    pub fn currency(&self) -> Currency {
        self.catalogue.currency
    }
}

/// Catalogue source kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The built-in robotics catalogue.
    #[default]
    Static,
    /// A REST endpoint.
    Http,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Static => "static",
            SourceKind::Http => "http",
        }
    }
}

/// Catalogue configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogueConfig {
    #[serde(default)]
    pub source: SourceKind,

    /// REST endpoint used when `source = "http"`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// ISO currency code prices are quoted in (any case).
    #[serde(default, deserialize_with = "deserialize_currency")]
    pub currency: Currency,
}

fn default_endpoint() -> String {
    DEFAULT_CATALOGUE_ENDPOINT.to_string()
}

fn deserialize_currency<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Currency, D::Error> {
    let code = String::deserialize(deserializer)?;
    Currency::from_code(&code)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown currency code '{}'", code)))
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            endpoint: default_endpoint(),
            currency: Currency::default(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for terminals).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Generate a default roboshop.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# RoboShop storefront configuration

[catalogue]
# "static" uses the built-in robot list, "http" fetches from `endpoint`.
source = "static"
endpoint = "{endpoint}"
currency = "USD"

[log]
level = "info"
format = "human"
"#,
        endpoint = DEFAULT_CATALOGUE_ENDPOINT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config: ShopConfig = toml::from_str("").unwrap();
        assert_eq!(config, ShopConfig::default());
        assert_eq!(config.catalogue.source, SourceKind::Static);
        assert_eq!(config.catalogue.endpoint, DEFAULT_CATALOGUE_ENDPOINT);
        assert_eq!(config.log.format, LogFormat::Human);
    }

    #[test]
    fn test_generated_config_parses() {
        let config: ShopConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, ShopConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: ShopConfig = toml::from_str(
            r#"
            [catalogue]
            source = "http"
            currency = "CAD"

            [log]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.catalogue.source, SourceKind::Http);
        assert_eq!(config.catalogue.endpoint, DEFAULT_CATALOGUE_ENDPOINT);
        assert_eq!(config.currency(), Currency::CAD);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_json_config() {
        let config: ShopConfig =
            serde_json::from_str(r#"{"catalogue": {"endpoint": "http://shop/api"}}"#).unwrap();
        assert_eq!(config.catalogue.source, SourceKind::Static);
        assert_eq!(config.catalogue.endpoint, "http://shop/api");
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let result: Result<ShopConfig, _> = toml::from_str("[catalogue]\ncurrency = \"XYZ\"\n");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown currency code 'XYZ'"), "{}", err);
    }

    #[test]
    fn test_currency_code_is_case_insensitive() {
        let config: ShopConfig = toml::from_str("[catalogue]\ncurrency = \"eur\"\n").unwrap();
        assert_eq!(config.currency(), Currency::EUR);
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        let result: Result<ShopConfig, _> = toml::from_str("[catalogue]\nsource = \"ftp\"\n");
        assert!(result.is_err());
    }
}
