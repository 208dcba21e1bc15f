//! # SDK Configuration
//!
//! Holds the process-wide SDK settings that every facade reads: debug mode,
//! the query defaults used when no adapter is registered, the event buffer
//! size and the logging setup.
//!
//! ## Usage
//!
//! ```
//! use core_runtime::config::SdkConfig;
//!
//! let config = SdkConfig::builder()
//!     .debug_mode(false)
//!     .default_lang("ru")
//!     .event_buffer_size(256)
//!     .build()
//!     .expect("valid config");
//!
//! assert_eq!(config.defaults.lang, "ru");
//! ```
//!
//! ## Error Handling
//!
//! The builder validates eagerly and reports the first invalid setting:
//!
//! ```should_panic
//! use core_runtime::config::SdkConfig;
//!
//! SdkConfig::builder()
//!     .event_buffer_size(0)
//!     .build()
//!     .expect("Should fail - zero event buffer");
//! ```

use crate::error::{Error, Result};
use crate::events::DEFAULT_EVENT_BUFFER_SIZE;
use crate::logging::LoggingConfig;
use bridge_traits::DeviceType;

/// Values returned by the core app's accessors when no adapter is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDefaults {
    /// Language code, `"en"` unless overridden
    pub lang: String,
    /// Application identifier sentinel, `"-1"` unless overridden
    pub app_id: String,
    pub payload: String,
    pub device_type: DeviceType,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            app_id: "-1".to_string(),
            payload: String::new(),
            device_type: DeviceType::Undefined,
        }
    }
}

/// SDK configuration. Use [`SdkConfigBuilder`] to construct instances.
#[derive(Debug, Clone)]
pub struct SdkConfig {
    /// Verbose diagnostics; selects the default log level
    pub debug_mode: bool,

    pub defaults: QueryDefaults,

    /// Capacity of the lifecycle event channel
    pub event_buffer_size: usize,

    pub logging: LoggingConfig,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            debug_mode: true,
            defaults: QueryDefaults::default(),
            event_buffer_size: DEFAULT_EVENT_BUFFER_SIZE,
            logging: LoggingConfig::for_debug_mode(true),
        }
    }
}

impl SdkConfig {
    pub fn builder() -> SdkConfigBuilder {
        SdkConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - Default language is not empty
    /// - Default application id is not empty
    /// - Event buffer size is greater than 0
    pub fn validate(&self) -> Result<()> {
        if self.defaults.lang.trim().is_empty() {
            return Err(Error::Config(
                "Default language cannot be empty".to_string(),
            ));
        }

        if self.defaults.app_id.trim().is_empty() {
            return Err(Error::Config(
                "Default application id cannot be empty; use \"-1\" for unknown".to_string(),
            ));
        }

        if self.event_buffer_size == 0 {
            return Err(Error::Config(
                "Event buffer size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for constructing [`SdkConfig`] instances.
#[derive(Debug, Default)]
pub struct SdkConfigBuilder {
    debug_mode: Option<bool>,
    defaults: QueryDefaults,
    event_buffer_size: Option<usize>,
    logging: Option<LoggingConfig>,
}

impl SdkConfigBuilder {
    /// Enable or disable debug mode.
    ///
    /// Default: `true`. When no explicit logging config is supplied, debug
    /// mode logs SDK crates at `Debug`, otherwise at `Warn`.
    pub fn debug_mode(mut self, enabled: bool) -> Self {
        self.debug_mode = Some(enabled);
        self
    }

    pub fn default_lang(mut self, lang: impl Into<String>) -> Self {
        self.defaults.lang = lang.into();
        self
    }

    pub fn default_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.defaults.app_id = app_id.into();
        self
    }

    pub fn default_payload(mut self, payload: impl Into<String>) -> Self {
        self.defaults.payload = payload.into();
        self
    }

    pub fn default_device_type(mut self, device_type: DeviceType) -> Self {
        self.defaults.device_type = device_type;
        self
    }

    /// Replace all query defaults at once.
    pub fn defaults(mut self, defaults: QueryDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Sets the lifecycle event channel capacity.
    ///
    /// Default: 100. Slow subscribers that fall further behind than this
    /// observe a lag error and skip ahead.
    pub fn event_buffer_size(mut self, size: usize) -> Self {
        self.event_buffer_size = Some(size);
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<SdkConfig> {
        let debug_mode = self.debug_mode.unwrap_or(true);
        let logging = self
            .logging
            .unwrap_or_else(|| LoggingConfig::for_debug_mode(debug_mode));

        let config = SdkConfig {
            debug_mode,
            defaults: self.defaults,
            event_buffer_size: self.event_buffer_size.unwrap_or(DEFAULT_EVENT_BUFFER_SIZE),
            logging,
        };

        config.validate()?;
        Ok(config)
    }
}
