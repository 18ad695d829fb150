//! Installs the global `tracing` subscriber.

use tracing_subscriber::EnvFilter;

use crate::{
    config::{LogFormat, LoggerSettings},
    Error, Result,
};

/// Builds the filter: `override_filter` wins, then `RUST_LOG`, then `level`.
pub fn filter(settings: &LoggerSettings) -> Result<EnvFilter> {
    if let Some(directives) = &settings.override_filter {
        return EnvFilter::try_new(directives).map_err(|err| Error::Logger(err.to_string()));
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(settings.level.to_string()).map_err(|err| Error::Logger(err.to_string()))
}

/// Installs a stderr subscriber unless logging is disabled.
///
/// # Errors
///
/// Fails on invalid filter directives or when a global subscriber is already set.
pub fn init(settings: &LoggerSettings) -> Result<()> {
    if !settings.enable {
        return Ok(());
    }
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(settings)?)
        .with_writer(std::io::stderr);
    let installed = match settings.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|err| Error::Logger(err.to_string()))
}
