use std::env;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logging setup.
///
/// Configured through environment variables:
/// - `RUST_LOG`: log level filter (error, warn, info, debug, trace)
/// - `CARDFORGE_DEBUG`: verbose output with file/line/thread details
pub struct LoggingConfig;

impl LoggingConfig {
    pub fn init() {
        let is_debug = env::var("CARDFORGE_DEBUG").is_ok();

        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => {
                if is_debug {
                    EnvFilter::new("cardforge=debug,info")
                } else {
                    EnvFilter::new("cardforge=info,warn")
                }
            }
        };

        let fmt_layer = if is_debug {
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
        } else {
            fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .with_thread_ids(false)
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();

        if is_debug {
            tracing::debug!("debug mode enabled");
        }
    }

    /// Init with an explicit filter string, ignoring the environment.
    pub fn init_with_filter(filter: &str) {
        tracing_subscriber::registry()
            .with(EnvFilter::new(filter))
            .with(fmt::layer())
            .init();
    }

    pub fn is_debug() -> bool {
        env::var("CARDFORGE_DEBUG").is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_debug() {
        env::remove_var("CARDFORGE_DEBUG");
        assert!(!LoggingConfig::is_debug());

        env::set_var("CARDFORGE_DEBUG", "1");
        assert!(LoggingConfig::is_debug());

        env::remove_var("CARDFORGE_DEBUG");
    }
}
