use crate::{ChainMapResult, StackError};

/// Добавление контекста к ошибке прямо на `Result`.
///
/// Ошибка превращается в [`StackError`]; место вызова `.context(...)`
/// попадает в [`ErrorContext::location`](crate::ErrorContext::location).
pub trait ResultExt<T> {
    fn context(
        self,
        message: impl Into<String>,
    ) -> ChainMapResult<T>;

    /// Как [`ResultExt::context`], но сообщение строится только при ошибке.
    fn with_context<C, F>(
        self,
        f: F,
    ) -> ChainMapResult<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<StackError>,
{
    #[track_caller]
    fn context(
        self,
        message: impl Into<String>,
    ) -> ChainMapResult<T> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(err.into().context(message)),
        }
    }

    #[track_caller]
    fn with_context<C, F>(
        self,
        f: F,
    ) -> ChainMapResult<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(err.into().context(f())),
        }
    }
}
