// platform/mod.rs
pub mod offline_cache;
pub mod wake_lock;

use std::io;
use thiserror::Error;

/// Failures of optional platform capabilities. None of these are fatal;
/// callers log them and carry on.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),
    #[error("asset path {0:?} escapes the asset root")]
    InvalidPath(String),
    #[error("asset {path:?} could not be read: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}
