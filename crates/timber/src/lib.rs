#![deny(missing_docs)]

//! Defines the output format of traces, events, and spans produced
//! by the adapter and the libraries it calls.

mod formatter;

use clap::ValueEnum;
pub use tracing_core::Level;

/// possible log levels
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// The `--log` argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Failures only
    Error,
    /// Failures and degraded results
    Warn,
    /// High level progress
    Info,
    /// Requests, responses and lookups
    Debug,
    /// Everything
    Trace,
}

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Initializes a global tracing subscriber that formats
/// all logs produced by an application that calls init,
/// and all logs produced by libraries consumed by that application.
///
/// Returns `false` when no subscriber was installed, either because no level
/// was asked for or because one was already set.
pub fn init(level: Option<Level>) -> bool {
    // by default, no logs are printed.
    match level {
        None => false,
        Some(level) if level == Level::TRACE => formatter::very_verbose(level),
        Some(level) if level == Level::DEBUG => formatter::verbose(level),
        Some(level) => formatter::least_verbose(level),
    }
}
