//! Log subscriber setup for the CLI
//!
//! Logs go to stderr so the rendered dashboard on stdout stays clean.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter used when `RUST_LOG` is not set
pub fn default_directive(config: &LoggingConfig) -> String {
    format!("karoo={}", config.level.trim().to_ascii_lowercase())
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Logging already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        let config = LoggingConfig {
            level: " DEBUG ".to_string(),
            format: "pretty".to_string(),
        };
        assert_eq!(default_directive(&config), "karoo=debug");
        assert_eq!(default_directive(&LoggingConfig::default()), "karoo=info");
    }

    #[test]
    fn test_init_twice() {
        init_logging(&LoggingConfig::default());
        init_logging(&LoggingConfig::default());
    }
}
