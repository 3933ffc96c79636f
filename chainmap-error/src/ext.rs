use std::{any::Any, error::Error};

use crate::StatusCode;

/// Общий интерфейс ошибок chainmap.
///
/// Трейт object-safe: [`StackError`](crate::StackError) хранит корневую
/// ошибку как `dyn ErrorExt` и достаёт конкретный тип через
/// [`ErrorExt::as_any`].
pub trait ErrorExt: Error + Send + Sync + 'static {
    fn status_code(&self) -> StatusCode;

    fn as_any(&self) -> &dyn Any;
}
