//! # Runtime Configuration
//!
//! Ambient settings the host applies once at startup: how the core logs and
//! how panics that a guard converts are reported.
//!
//! The guard itself takes no configuration; everything here is process-wide
//! and optional.
//!
//! ## Usage
//!
//! ```
//! use bridge_traits::sink::LogLevel;
//! use core_runtime::config::RuntimeConfig;
//! use core_runtime::logging::LogFormat;
//! use core_runtime::panic_hook::PanicReporting;
//!
//! let config = RuntimeConfig::builder()
//!     .log_level(LogLevel::Debug)
//!     .log_format(LogFormat::Compact)
//!     .panic_reporting(PanicReporting::Quiet)
//!     .build()
//!     .expect("valid configuration");
//!
//! assert_eq!(config.panic_reporting, PanicReporting::Quiet);
//! ```
//!
//! ## Error Handling
//!
//! The builder validates the log filter up front:
//!
//! ```should_panic
//! use core_runtime::config::RuntimeConfig;
//!
//! let config = RuntimeConfig::builder()
//!     .log_filter("core_guard=loud")
//!     .build()
//!     .expect("Should fail - invalid filter directive");
//! ```

use std::sync::Arc;

use bridge_traits::sink::{LogLevel, LoggerSink};

use crate::error::Result;
use crate::logging::{self, LogFormat, LoggingConfig};
use crate::panic_hook::PanicReporting;

/// Validated runtime configuration. Build with [`RuntimeConfig::builder`].
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Logging and host sink settings
    pub logging: LoggingConfig,

    /// Reporting of panics raised inside guarded regions
    pub panic_reporting: PanicReporting,
}

impl RuntimeConfig {
    pub fn builder() -> RuntimeConfigBuilder {
        RuntimeConfigBuilder::default()
    }
}

/// Builder for [`RuntimeConfig`].
#[derive(Debug, Default)]
pub struct RuntimeConfigBuilder {
    logging: LoggingConfig,
    panic_reporting: PanicReporting,
}

impl RuntimeConfigBuilder {
    /// Replace the whole logging configuration.
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.logging = self.logging.with_level(level);
        self
    }

    pub fn log_format(mut self, format: LogFormat) -> Self {
        self.logging = self.logging.with_format(format);
        self
    }

    /// Custom `EnvFilter` directives, replacing the default per-crate filter.
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.logging = self.logging.with_filter(filter);
        self
    }

    pub fn logger_sink(mut self, sink: Arc<dyn LoggerSink>) -> Self {
        self.logging = self.logging.with_logger_sink(sink);
        self
    }

    pub fn panic_reporting(mut self, reporting: PanicReporting) -> Self {
        self.panic_reporting = reporting;
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the log filter does
    /// not parse.
    pub fn build(self) -> Result<RuntimeConfig> {
        logging::build_filter(&self.logging)?;

        Ok(RuntimeConfig {
            logging: self.logging,
            panic_reporting: self.panic_reporting,
        })
    }
}
