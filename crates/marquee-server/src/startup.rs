//! Server startup utilities.

use marquee_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    __  ___
   /  |/  /___ __________ ___  _____  ___
  / /|_/ / __ `/ ___/ __ `/ / / / _ \/ _ \
 / /  / / /_/ / /  / /_/ / /_/ /  __/  __/
/_/  /_/\__,_/_/   \__, /\__,_/\___/\___/
                     /_/
    "#);
}

/// Prints where the server listens and how the cache is laid out.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    info!("{}", separator);
    info!("REST API:  http://{}/api/v1", addr);
    info!("Health:    http://{}/health", addr);
    if config.server.swagger_enabled {
        info!("API Docs:  http://{}/swagger-ui", addr);
    }
    if config.redis.enabled {
        info!("Cache:     {} layout on {}", config.cache.strategy, config.redis.url);
    } else {
        info!("Cache:     {} layout in process memory", config.cache.strategy);
    }
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_banner_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_banner();
    }

    #[test]
    fn test_print_startup_info_without_redis() {
        let _ = tracing_subscriber::fmt::try_init();
        let mut config = AppConfig::default();
        config.redis.enabled = false;
        config.server.swagger_enabled = false;
        print_startup_info(&config);
    }
}
