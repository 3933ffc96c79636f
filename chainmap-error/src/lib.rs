pub mod context;
pub mod ext;
pub mod stack;
pub mod status_code;
pub mod types;

// Публичный экспорт, чтобы пользователям хватало `chainmap_error::*`.
pub use context::*;
pub use ext::*;
pub use stack::*;
pub use status_code::*;
pub use types::*;

/// Результат с ошибкой, несущей цепочку контекстов.
pub type ChainMapResult<T> = Result<T, StackError>;
