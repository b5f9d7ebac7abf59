use crate::config::{LoggingConfig, DEFAULT_LOG_DIRECTIVE};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber with the default directive.
///
/// `RUST_LOG` takes precedence when set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Install the global subscriber from configuration.
///
/// Does nothing if a subscriber is already installed.
pub fn init_with_config(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive_for(config)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

fn directive_for(config: &LoggingConfig) -> String {
    format!("media_constraints={}", config.effective_level().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingLevel;

    #[test]
    fn directive_follows_effective_level() {
        assert_eq!(directive_for(&LoggingConfig::default()), DEFAULT_LOG_DIRECTIVE);

        let verbose = LoggingConfig {
            level: LoggingLevel::Warn,
            verbose: true,
            json: false,
        };
        assert_eq!(directive_for(&verbose), "media_constraints=debug");
    }
}
