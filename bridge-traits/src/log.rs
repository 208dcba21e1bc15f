//! Host logging collaborator.
//!
//! Facades log through `tracing`; a host that wants those lines in its own
//! console (browser devtools, engine log window) implements [`LoggerSink`]
//! and hands it to the logging setup in `core-runtime`. Having no sink only
//! suppresses diagnostics.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Structured log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub timestamp: DateTime<Utc>,
    /// Emitting module, e.g. `core_leaderboard::facade`
    pub target: String,
    pub message: String,
    /// Structured fields such as `facade` and `platform`
    pub fields: HashMap<String, String>,
    /// Name of the enclosing span, if any
    pub span_id: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: Utc::now(),
            target: target.into(),
            message: message.into(),
            fields: HashMap::new(),
            span_id: None,
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_span_id(mut self, span_id: impl Into<String>) -> Self {
        self.span_id = Some(span_id.into());
        self
    }

    /// Facade tag carried by SDK log lines, if present.
    pub fn facade(&self) -> Option<&str> {
        self.fields.get("facade").map(String::as_str)
    }
}

/// Logger sink trait
///
/// Receives every SDK log line that survives filtering.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::log::{LoggerSink, LogEntry, LogLevel};
///
/// async fn report(logger: &dyn LoggerSink) {
///     let entry = LogEntry::new(LogLevel::Warn, "core_leaderboard", "Sign in first")
///         .with_field("facade", "leaderboard");
///     logger.log(entry).await.ok();
/// }
/// ```
#[async_trait]
pub trait LoggerSink: Send + Sync {
    /// Forward a log entry to the host logging system
    async fn log(&self, entry: LogEntry) -> Result<()>;

    /// Flush any buffered logs
    async fn flush(&self) -> Result<()> {
        Ok(())
    }

    /// Entries below this level are dropped before reaching the sink.
    fn min_level(&self) -> LogLevel {
        LogLevel::Info
    }
}

/// Prints entries in the `[GameSDK.<facade>]` style hosts expect on stdout.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    pub min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
        }
    }
}

impl ConsoleLogger {
    fn format(entry: &LogEntry) -> String {
        let prefix = match entry.facade() {
            Some("app") | None => "[GameSDK]".to_string(),
            Some(facade) => format!("[GameSDK.{facade}]"),
        };
        format!(
            "{} {} {}: {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            entry.level.as_str(),
            prefix,
            entry.message
        )
    }
}

#[async_trait]
impl LoggerSink for ConsoleLogger {
    async fn log(&self, entry: LogEntry) -> Result<()> {
        if entry.level >= self.min_level {
            println!("{}", Self::format(&entry));
        }
        Ok(())
    }

    fn min_level(&self) -> LogLevel {
        self.min_level
    }
}
