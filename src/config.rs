//! Configuration management for Arkiv.
//!
//! Settings come from three layers, later wins: an optional `arkiv.toml`
//! next to the working directory (or an explicit `--config` path), then
//! `ARKIV_*` environment variables, then command-line overrides.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::repository::{RecordStore, Result as StoreResult, SqliteStore};

/// Database file used when nothing else is configured.
pub const DEFAULT_DATABASE: &str = "arkiv.db";

/// Default bind address for the web server.
pub const DEFAULT_BIND: &str = "127.0.0.1:3030";

const CONFIG_FILE: &str = "arkiv.toml";

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,
    /// Bind address for `serve` (host, port, or host:port).
    pub bind: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE),
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Overrides collected from global CLI flags.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path; must exist when given.
    pub config: Option<PathBuf>,
    /// Database path override.
    pub database: Option<PathBuf>,
}

impl Settings {
    /// Load settings: config file, then environment, then CLI overrides.
    pub fn load(options: &LoadOptions) -> anyhow::Result<Settings> {
        let mut settings = match &options.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| {
                    anyhow::anyhow!("cannot read config {}: {e}", path.display())
                })?;
                toml::from_str(&raw)
                    .map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display()))?
            }
            None => {
                let discovered = PathBuf::from(CONFIG_FILE);
                if discovered.is_file() {
                    let raw = std::fs::read_to_string(&discovered)?;
                    toml::from_str(&raw).map_err(|e| {
                        anyhow::anyhow!("invalid config {}: {e}", discovered.display())
                    })?
                } else {
                    Settings::default()
                }
            }
        };

        if let Ok(database) = std::env::var("ARKIV_DATABASE") {
            if !database.is_empty() {
                settings.database_path = PathBuf::from(database);
            }
        }
        if let Ok(bind) = std::env::var("ARKIV_BIND") {
            if !bind.is_empty() {
                settings.bind = bind;
            }
        }

        if let Some(database) = &options.database {
            settings.database_path = database.clone();
        }

        Ok(settings)
    }

    /// Open the configured database, creating the schema if needed.
    pub fn create_store(&self) -> StoreResult<Arc<dyn RecordStore>> {
        let store = SqliteStore::open(&self.database_path)?;
        store.init_schema()?;
        Ok(Arc::new(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.database_path, PathBuf::from("arkiv.db"));
        assert_eq!(settings.bind, "127.0.0.1:3030");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str("database_path = \"/tmp/docs.db\"").unwrap();
        assert_eq!(settings.database_path, PathBuf::from("/tmp/docs.db"));
        assert_eq!(settings.bind, DEFAULT_BIND);
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let options = LoadOptions {
            config: Some(PathBuf::from("/definitely/not/here.toml")),
            database: None,
        };
        assert!(Settings::load(&options).is_err());
    }

    #[test]
    fn test_cli_database_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("arkiv.toml");
        std::fs::write(&config_path, "database_path = \"from-config.db\"").unwrap();

        let options = LoadOptions {
            config: Some(config_path),
            database: Some(dir.path().join("from-cli.db")),
        };
        let settings = Settings::load(&options).unwrap();
        assert_eq!(settings.database_path, dir.path().join("from-cli.db"));
    }
}
