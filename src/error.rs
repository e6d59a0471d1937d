//! Global error handling for srcdump
//!
//! Only configuration and output-write failures surface here. Failures to
//! read an individual source file are reported inline in the report instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for srcdump operations
#[derive(Error, Debug)]
pub enum SrcDumpError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The report could not be written to its destination
    #[error("Failed to write report to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Specialized Result type for srcdump operations
pub type Result<T> = std::result::Result<T, SrcDumpError>;

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error::SrcDumpError::$error_type(format!($($arg)*)))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// main returns io::Result, same as the scanner and writer internals
impl From<SrcDumpError> for io::Error {
    fn from(err: SrcDumpError) -> Self {
        match err {
            SrcDumpError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}
