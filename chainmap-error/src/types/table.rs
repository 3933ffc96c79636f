use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

pub type TableResult<T> = Result<T, TableError>;

/// Ошибки хеш-таблицы.
///
/// Отсутствие ключа ошибкой не считается: `get` возвращает `None`,
/// `remove` возвращает `false`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// Недопустимые параметры при создании таблицы.
    #[error("Invalid table configuration for '{parameter}': {reason}")]
    InvalidConfig {
        parameter: &'static str,
        reason: String,
    },
}

impl ErrorExt for TableError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidConfig { .. } => StatusCode::InvalidConfig,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
