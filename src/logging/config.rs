use std::str::FromStr;

use chainmap_error::SettingsError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

/// Формат вывода логов.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    #[default]
    Compact,
    Json,
}

/// Конфигурация логирования.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Уровень по умолчанию (`trace`, `debug`, `info`, `warn`, `error`,
    /// `off`), если `RUST_LOG` не задан.
    pub level: String,
    pub format: LogFormat,
    pub ansi: bool,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        }
    }
}

impl LoggingConfig {
    /// Проверяет, что уровень логирования распознаётся.
    pub fn validate(&self) -> Result<(), SettingsError> {
        LevelFilter::from_str(&self.level)
            .map(|_| ())
            .map_err(|_| SettingsError::InvalidLogLevel {
                level: self.level.clone(),
            })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            ansi: true,
        }
    }
}
