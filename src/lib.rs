//! Grab-bag utility library.
//!
//! Standalone helpers with no shared state between them:
//! - `dot` - dot-notation access into nested JSON values
//! - `strings` - splitting, censoring, truncation, interpolation
//! - `number` - locale-aware number and currency formatting
//! - `bytes` - file-size parsing and formatting
//! - `env` - environment variable coercion and runtime classification
//! - `runtime` - process-wide container: config, events, CSRF token
//! - `ids` - UUID generation
//! - `retry` - re-invoke fallible operations

/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("runtime", "Loaded config from {}", path.display());
/// log_status!("retry", "Attempt {} failed", attempt);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod bytes;
pub mod dot;
pub mod env;
pub mod error;
pub mod ids;
pub mod number;
pub mod retry;
pub mod runtime;
pub mod strings;

// Re-export the error types so callers can write `toolbelt::Result`
// instead of `toolbelt::error::Result`
pub use error::{Error, ErrorCode, Result};
