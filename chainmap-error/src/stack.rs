use std::{error::Error, fmt, panic::Location, sync::Arc};

use crate::{ErrorExt, StatusCode};

/// Ошибка с цепочкой контекстов.
///
/// Корневая ошибка хранится как `dyn ErrorExt`. Каждый вызов
/// [`StackError::context`] дописывает сообщение и место вызова; статус
/// всегда берётся у корня.
#[derive(Clone)]
pub struct StackError {
    root: Arc<dyn ErrorExt>,
    contexts: Vec<ErrorContext>,
}

/// Одно звено цепочки: сообщение и место, где оно добавлено.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    pub message: String,
    pub location: &'static Location<'static>,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl StackError {
    pub fn new<E: ErrorExt>(err: E) -> Self {
        Self {
            root: Arc::new(err),
            contexts: Vec::new(),
        }
    }

    /// Добавляет контекст. Местом считается вызывающий код.
    #[track_caller]
    pub fn context(
        mut self,
        message: impl Into<String>,
    ) -> Self {
        self.contexts.push(ErrorContext {
            message: message.into(),
            location: Location::caller(),
        });
        self
    }

    #[inline]
    pub fn status_code(&self) -> StatusCode {
        self.root.status_code()
    }

    pub fn root(&self) -> &dyn ErrorExt {
        self.root.as_ref()
    }

    /// Контексты в порядке добавления: от ближнего к корню до внешнего.
    pub fn contexts(&self) -> &[ErrorContext] {
        &self.contexts
    }

    pub fn downcast_ref<T: ErrorExt>(&self) -> Option<&T> {
        self.root.as_any().downcast_ref::<T>()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для StackError
////////////////////////////////////////////////////////////////////////////////

// Внешний контекст первым, корневая ошибка последней.
impl fmt::Display for StackError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for ctx in self.contexts.iter().rev() {
            write!(f, "{}: ", ctx.message)?;
        }
        write!(f, "{}", self.root)
    }
}

impl fmt::Debug for StackError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let contexts: Vec<String> = self
            .contexts
            .iter()
            .map(|ctx| {
                format!(
                    "{} at {}:{}",
                    ctx.message,
                    ctx.location.file(),
                    ctx.location.line()
                )
            })
            .collect();

        f.debug_struct("StackError")
            .field("status", &self.status_code())
            .field("root", &self.root.to_string())
            .field("contexts", &contexts)
            .finish()
    }
}

impl Error for StackError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.root.as_ref())
    }
}

impl<E: ErrorExt> From<E> for StackError {
    fn from(err: E) -> Self {
        StackError::new(err)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
