use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::{ListingPolicy, SortKey};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub listing: ListingConfig,

    #[serde(default)]
    pub loader: LoaderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// Maximum database connections (default: 5)
    pub max_db_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:recipes.db".to_string(),
            log_level: "info".to_string(),
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,

    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

/// Knobs for the listing endpoint. Two behaviors historically varied between
/// deployments: the default sort column and which columns are sortable at
/// all. Both live here, along with the null-ordering policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Column used when `sort_by` is absent or unrecognized.
    pub default_sort: String,

    /// Columns a request may sort by; anything else falls back to
    /// `default_sort`.
    pub sort_columns: Vec<String>,

    /// When true, rows with a null sort column sort after all non-null rows
    /// in both directions.
    pub nulls_last: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_sort: "cuisine".to_string(),
            sort_columns: SortKey::ALL.iter().map(|k| k.as_str().to_string()).collect(),
            nulls_last: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Dataset read by `larder load` when no path argument is given.
    pub dataset_path: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            dataset_path: "US_recipes_null.json".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            server: ServerConfig::default(),
            listing: ListingConfig::default(),
            loader: LoaderConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("larder").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".larder").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.general.database_path.is_empty() {
            anyhow::bail!("Database path cannot be empty");
        }

        self.listing_policy()?;

        Ok(())
    }

    /// Resolve the `[listing]` strings into the closed sort-key set used by
    /// the listing endpoint. Fails on any column name outside that set.
    pub fn listing_policy(&self) -> Result<ListingPolicy> {
        let default_sort = SortKey::parse(&self.listing.default_sort).ok_or_else(|| {
            anyhow::anyhow!("Unknown default_sort column: '{}'", self.listing.default_sort)
        })?;

        if self.listing.sort_columns.is_empty() {
            anyhow::bail!("sort_columns cannot be empty");
        }

        let mut recognized = Vec::with_capacity(self.listing.sort_columns.len());
        for name in &self.listing.sort_columns {
            let key = SortKey::parse(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown sort column: '{name}'"))?;
            recognized.push(key);
        }

        Ok(ListingPolicy {
            default_sort,
            recognized,
            nulls_last: self.listing.nulls_last,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.database_path, "sqlite:recipes.db");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.listing.default_sort, "cuisine");
        assert_eq!(config.listing.sort_columns.len(), 9);
        assert!(config.listing.nulls_last);
        assert_eq!(config.loader.dataset_path, "US_recipes_null.json");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("[listing]"));
        assert!(toml_str.contains("[loader]"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [listing]
            default_sort = "title"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.listing.default_sort, "title");

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.listing.sort_columns.len(), 9);
    }

    #[test]
    fn test_default_config_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_sort_column() {
        let mut config = Config::default();
        config.listing.default_sort = "id".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.listing.sort_columns = vec!["rating".to_string(), "bogus".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_listing_policy_resolution() {
        let mut config = Config::default();
        config.listing.default_sort = "title".to_string();
        config.listing.sort_columns = vec!["title".to_string(), "rating".to_string()];
        config.listing.nulls_last = false;

        let policy = config.listing_policy().unwrap();
        assert_eq!(policy.default_sort, SortKey::Title);
        assert_eq!(policy.recognized, vec![SortKey::Title, SortKey::Rating]);
        assert!(!policy.nulls_last);
    }
}
