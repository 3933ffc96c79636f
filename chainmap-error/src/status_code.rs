use std::fmt;

use num_enum::TryFromPrimitive;

/// Коды статуса ошибок chainmap.
///
/// Все коды лежат в диапазоне 3xxx: ошибки возникают только при проверке
/// параметров таблицы, загрузке настроек и установке логирования.
/// Отсутствующий ключ ошибкой не считается и кода не имеет.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u32)]
pub enum StatusCode {
    /// Недопустимые параметры хеш-таблицы.
    InvalidConfig = 3000,
    /// Источник настроек не прочитан или не разобран.
    ConfigLoad = 3001,
    InvalidLogLevel = 3002,
    LoggingInit = 3003,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl StatusCode {
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Имя кода в snake_case, пригодное для полей логов.
    pub const fn name(self) -> &'static str {
        match self {
            Self::InvalidConfig => "invalid_config",
            Self::ConfigLoad => "config_load",
            Self::InvalidLogLevel => "invalid_log_level",
            Self::LoggingInit => "logging_init",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для StatusCode
////////////////////////////////////////////////////////////////////////////////

impl From<StatusCode> for u32 {
    fn from(code: StatusCode) -> Self {
        code.code()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}/{}", self.code(), self.name())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
