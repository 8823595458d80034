//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use marquee_core::MarqueeError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Prefix of environment variables that override file configuration.
pub const ENV_PREFIX: &str = "MARQUEE";

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Untracked local overrides
    /// 4. Environment variables with `MARQUEE_` prefix, e.g. `MARQUEE_CACHE__STRATEGY=hash`
    pub fn new(config_dir: impl Into<String>) -> Result<Self, MarqueeError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, MarqueeError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    ///
    /// The previous configuration stays in place if the new one fails to load
    /// or validate.
    pub async fn reload(&self) -> Result<(), MarqueeError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    fn load_config(config_dir: &str) -> Result<AppConfig, MarqueeError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = std::env::var(format!("{}_ENVIRONMENT", ENV_PREFIX))
            .unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_marquee_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_marquee_error)?;

        ConfigValidator::validate(&app_config)
            .map_err(|errors| MarqueeError::Configuration(format_validation_errors(&errors)))?;

        Ok(app_config)
    }
}

fn config_error_to_marquee_error(err: ConfigError) -> MarqueeError {
    MarqueeError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CacheStrategy;
    use std::fs;

    #[tokio::test]
    async fn test_missing_directory_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");

        let loader = ConfigLoader::new(missing.to_string_lossy()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.cache.movie_record_cache_name, "movie");
    }

    #[tokio::test]
    async fn test_default_file_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[cache]\nstrategy = \"hash\"\nmovie_record_cache_name = \"films\"\n\n[server]\nport = 9000\n",
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.cache.strategy, CacheStrategy::Hash);
        assert_eq!(config.cache.movie_record_cache_name, "films");
        assert_eq!(config.server.port, 9000);
    }

    #[tokio::test]
    async fn test_local_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[redis]\npool_size = 4\n").unwrap();
        fs::write(dir.path().join("local.toml"), "[redis]\nenabled = false\n").unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.redis.pool_size, 4);
        assert!(!config.redis.enabled);
    }

    #[tokio::test]
    async fn test_invalid_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[cache]\nmovie_record_cache_name = \"\"\n",
        )
        .unwrap();

        let err = ConfigLoader::new(dir.path().to_string_lossy()).err().unwrap();
        assert!(matches!(err, MarqueeError::Configuration(_)));
        assert!(err.to_string().contains("cache.movie_record_cache_name"));
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        fs::write(&path, "[server]\nport = 8081\n").unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        assert_eq!(loader.get().await.server.port, 8081);

        fs::write(&path, "[server]\nport = 8082\n").unwrap();
        loader.reload().await.unwrap();
        assert_eq!(loader.get().await.server.port, 8082);
    }
}
