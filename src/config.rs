// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{LoaderError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub solr: SolrConfig,
    pub admin: AdminConfig,
    pub loader: LoaderConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SolrConfig {
    /// Base URL without a collection segment, e.g. `http://localhost:8983/solr`
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminConfig {
    pub command: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoaderConfig {
    pub csv_path: PathBuf,
    pub exclude_column: String,
    pub id_field: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DemoConfig {
    pub owner_name: String,
    pub phone_suffix: String,
    pub single_core_collection: String,
    pub facet_field: String,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SOLR_LOADER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| LoaderError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| LoaderError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when it exists. Otherwise the built-in defaults are used,
    /// still overridable from the environment; no other file is consulted.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load(Some(path));
        }

        warn!(
            "Config file {} not found, using built-in defaults",
            path.display()
        );
        dotenv().ok();

        let settings = config::Config::builder()
            .add_source(
                config::Config::try_from(&Self::default_config())
                    .map_err(|e| LoaderError::Config(e.to_string()))?,
            )
            .add_source(
                config::Environment::with_prefix("SOLR_LOADER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| LoaderError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| LoaderError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            solr: SolrConfig {
                base_url: "http://localhost:8983/solr".to_string(),
            },
            admin: AdminConfig {
                command: "solr".to_string(),
            },
            loader: LoaderConfig {
                csv_path: PathBuf::from("data/Employee Data.csv"),
                exclude_column: "Bonus %".to_string(),
                id_field: "Employee_ID".to_string(),
            },
            demo: DemoConfig {
                owner_name: "Suryaeswaran".to_string(),
                phone_suffix: "6317".to_string(),
                single_core_collection: "database_hash".to_string(),
                facet_field: "Department".to_string(),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        let base_url = self.solr.base_url.trim();
        if base_url.is_empty() {
            return Err(LoaderError::Config("solr.base_url must not be empty".to_string()));
        }

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(LoaderError::Config(format!(
                "solr.base_url must be an http(s) URL: {}",
                base_url
            )));
        }

        if self.admin.command.trim().is_empty() {
            return Err(LoaderError::Config(
                "admin.command must not be empty".to_string(),
            ));
        }

        if self.loader.id_field.trim().is_empty() {
            return Err(LoaderError::Config(
                "loader.id_field must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
