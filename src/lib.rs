/// Settings loading: table parameters and logging, from defaults, file and
/// `CHAINMAP_*` environment variables.
pub mod config;
/// Logging setup on top of `tracing-subscriber`.
pub mod logging;
/// Separate-chaining hash table with string keys.
pub mod table;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Errors, status codes and result aliases.
pub use chainmap_error::{
    ChainMapResult, ErrorExt, ResultExt, SettingsError, StackError, StatusCode, TableError,
    TableResult,
};
/// Settings.
pub use crate::config::{Settings, TableSettings};
/// Logging.
pub use crate::logging::{init_logging, LogFormat, LoggingConfig};
/// Hash table.
pub use crate::table::{
    polynomial_hash, HashTable, Iter, DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR,
};
