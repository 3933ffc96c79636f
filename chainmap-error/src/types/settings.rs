use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки загрузки настроек и инициализации логирования.
#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    /// Источник конфигурации не прочитан или не десериализован.
    #[error("Failed to load configuration: {reason}")]
    Load { reason: String },
    /// Уровень логирования не распознан.
    #[error("Unknown log level '{level}'")]
    InvalidLogLevel { level: String },
    /// Глобальный subscriber уже установлен или не собран.
    #[error("Failed to initialize logging: {reason}")]
    LoggingInit { reason: String },
}

impl ErrorExt for SettingsError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Load { .. } => StatusCode::ConfigLoad,
            Self::InvalidLogLevel { .. } => StatusCode::InvalidLogLevel,
            Self::LoggingInit { .. } => StatusCode::LoggingInit,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
