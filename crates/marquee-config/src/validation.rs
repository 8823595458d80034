//! Configuration validation.
//!
//! Every problem found is collected so a single startup failure reports all
//! of them at once.

use crate::AppConfig;
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { name: String, value: u16 },
    /// Pool size must be non-zero.
    EmptyPool,
    /// Pool size exceeds maximum allowed.
    PoolSizeTooLarge { value: u32, maximum: u32 },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Cache region name is empty.
    EmptyCacheName { name: String },
    /// Cache region name contains characters with glob meaning.
    InvalidCacheName { name: String, value: String },
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String, value: u64 },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// Log format is invalid.
    InvalidLogFormat { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { name, value } => {
                write!(f, "Invalid port for {}: {} (must be 1-65535)", name, value)
            }
            Self::EmptyPool => write!(f, "Redis pool size must be at least 1"),
            Self::PoolSizeTooLarge { value, maximum } => {
                write!(f, "Redis pool size {} exceeds maximum {}", value, maximum)
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::EmptyCacheName { name } => write!(f, "{} must not be empty", name),
            Self::InvalidCacheName { name, value } => {
                write!(f, "{} '{}' must not contain glob characters", name, value)
            }
            Self::NonPositiveTimeout { name, value } => {
                write!(f, "{} must be positive, got {}", name, value)
            }
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level '{}' (expected trace, debug, info, warn or error)",
                    value
                )
            }
            Self::InvalidLogFormat { value } => {
                write!(f, "Invalid log format '{}' (expected json or pretty)", value)
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: u32 = 1000;
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];
    /// Valid log formats.
    const VALID_LOG_FORMATS: &'static [&'static str] = &["json", "pretty"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(&config.server, &mut errors);
        Self::validate_redis(&config.redis, &mut errors);
        Self::validate_cache(&config.cache, &mut errors);
        Self::validate_observability(&config.observability, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(config: &crate::ServerConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: 0,
            });
        }

        if config.request_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "server.request_timeout_secs".to_string(),
                value: 0,
            });
        }
    }

    fn validate_redis(config: &crate::RedisConfig, errors: &mut Vec<ConfigValidationError>) {
        if !config.enabled {
            return;
        }

        match Url::parse(&config.url) {
            Ok(url) if matches!(url.scheme(), "redis" | "rediss") => {}
            Ok(url) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: format!("unsupported scheme '{}'", url.scheme()),
            }),
            Err(e) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: e.to_string(),
            }),
        }

        if config.pool_size == 0 {
            errors.push(ConfigValidationError::EmptyPool);
        } else if config.pool_size > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::PoolSizeTooLarge {
                value: config.pool_size,
                maximum: Self::MAX_POOL_SIZE,
            });
        }
    }

    fn validate_cache(config: &crate::CacheConfig, errors: &mut Vec<ConfigValidationError>) {
        Self::validate_cache_name(
            "cache.movie_record_cache_name",
            &config.movie_record_cache_name,
            errors,
        );
        Self::validate_cache_name(
            "cache.movie_record_hash_name",
            &config.movie_record_hash_name,
            errors,
        );
    }

    fn validate_cache_name(name: &str, value: &str, errors: &mut Vec<ConfigValidationError>) {
        if value.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyCacheName {
                name: name.to_string(),
            });
        } else if value.contains(|c: char| matches!(c, '*' | '?' | '[' | ']')) {
            errors.push(ConfigValidationError::InvalidCacheName {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    }

    fn validate_observability(
        config: &crate::ObservabilityConfig,
        errors: &mut Vec<ConfigValidationError>,
    ) {
        let level = config.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.log_level.clone(),
            });
        }

        let format = config.log_format.to_lowercase();
        if !Self::VALID_LOG_FORMATS.contains(&format.as_str()) {
            errors.push(ConfigValidationError::InvalidLogFormat {
                value: config.log_format.clone(),
            });
        }
    }
}

/// Formats validation errors for display.
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes() {
        assert!(ConfigValidator::validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigValidationError::InvalidPort { name, .. } if name == "server.port"
        )));
    }

    #[test]
    fn test_bad_redis_url() {
        let mut config = AppConfig::default();
        config.redis.url = "http://localhost:6379".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigValidationError::InvalidUrl { .. })));
    }

    #[test]
    fn test_redis_checks_skipped_when_disabled() {
        let mut config = AppConfig::default();
        config.redis.enabled = false;
        config.redis.url = "not a url".to_string();
        config.redis.pool_size = 0;

        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_zero_pool_size() {
        let mut config = AppConfig::default();
        config.redis.pool_size = 0;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors, vec![ConfigValidationError::EmptyPool]);
    }

    #[test]
    fn test_cache_name_rules() {
        let mut config = AppConfig::default();
        config.cache.movie_record_cache_name = "  ".to_string();
        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(errors[0], ConfigValidationError::EmptyCacheName { .. }));

        config.cache.movie_record_cache_name = "movie*".to_string();
        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(errors[0], ConfigValidationError::InvalidCacheName { .. }));
    }

    #[test]
    fn test_hash_name_is_checked() {
        let mut config = AppConfig::default();
        config.cache.movie_record_hash_name = String::new();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ConfigValidationError::EmptyCacheName {
                name: "cache.movie_record_hash_name".to_string()
            }]
        );
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = AppConfig::default();
        config.observability.log_level = "verbose".to_string();
        config.observability.log_format = "xml".to_string();
        config.server.port = 0;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);

        let formatted = format_validation_errors(&errors);
        assert!(formatted.starts_with("Configuration validation failed:"));
        assert!(formatted.contains("  3. "));
    }
}
