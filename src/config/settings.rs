use std::path::Path;

use chainmap_error::SettingsError;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::{
    logging::LoggingConfig,
    table::{DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR},
};

/// Префикс переменных окружения: `CHAINMAP_TABLE__LOAD_FACTOR=0.5`.
const ENV_PREFIX: &str = "CHAINMAP";

/// Разделитель вложенных ключей в переменных окружения.
const ENV_SEPARATOR: &str = "__";

/// Параметры создания хеш-таблицы.
///
/// Значения здесь не проверяются: это делает
/// [`HashTable::from_settings`](crate::HashTable::from_settings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSettings {
    pub load_factor: f64,
    pub initial_capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub table: TableSettings,
    pub logging: LoggingConfig,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            load_factor: DEFAULT_LOAD_FACTOR,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl Settings {
    /// Значения по умолчанию, переопределённые переменными окружения
    /// `CHAINMAP_*`.
    pub fn load() -> Result<Self, SettingsError> {
        Self::build(None).map_err(Self::load_error)
    }

    /// Как [`Settings::load`], но между умолчаниями и окружением читается
    /// файл `path` (если он существует). Формат определяется по расширению.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        Self::build(Some(path.as_ref())).map_err(Self::load_error)
    }

    fn build(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = LoggingConfig::default();

        let mut builder = Config::builder()
            // Добавляем значения по умолчанию
            .set_default("table.load_factor", DEFAULT_LOAD_FACTOR)?
            .set_default("table.initial_capacity", DEFAULT_INITIAL_CAPACITY as i64)?
            .set_default("logging.level", defaults.level)?
            .set_default("logging.format", defaults.format.as_str())?
            .set_default("logging.ansi", defaults.ansi)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        let cfg = builder
            // Переменные окружения с префиксом CHAINMAP_
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        cfg.try_deserialize()
    }

    fn load_error(err: ConfigError) -> SettingsError {
        SettingsError::Load {
            reason: err.to_string(),
        }
    }
}
