/// Shared helpers: logging setup and configuration validation.
pub mod logging;
pub mod validation;

pub use logging::LoggingConfig;
pub use validation::ConfigValidator;
