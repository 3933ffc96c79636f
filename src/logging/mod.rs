pub mod config;

pub use self::config::{LogFormat, LoggingConfig};

use chainmap_error::SettingsError;
use tracing_subscriber::EnvFilter;

/// Устанавливает глобальный subscriber `tracing`.
///
/// Фильтр берётся из `RUST_LOG`, а при его отсутствии — из `config.level`.
/// Повторный вызов возвращает [`SettingsError::LoggingInit`].
pub fn init_logging(config: &LoggingConfig) -> Result<(), SettingsError> {
    config.validate()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(config.ansi);

    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| SettingsError::LoggingInit {
        reason: e.to_string(),
    })?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.level,
        format = config.format.as_str(),
        "Logging system initialized"
    );

    Ok(())
}
