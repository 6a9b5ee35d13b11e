//! Common error types.

use std::{error, fmt};

use smol_str::SmolStr;

/// An error that may be generated while watching elements.
#[derive(Debug)]
pub enum WatchError {
    /// The host rejected the selector.
    InvalidSelector {
        /// The selector as given to the watcher.
        selector: SmolStr,
        /// Why the host rejected it.
        reason: String,
    },
    /// A required part of the host environment is missing, e.g. `window` or `document`.
    Unavailable(&'static str),
    /// The host failed to perform the operation.
    Os(OsError),
}

/// The error type for when the host cannot perform the requested operation.
#[derive(Debug)]
pub struct OsError {
    line: u32,
    file: &'static str,
    error: Box<dyn error::Error + Send + Sync + 'static>,
}

impl OsError {
    #[doc(hidden)]
    pub fn new(
        line: u32,
        file: &'static str,
        error: impl Into<Box<dyn error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self { line, file, error: error.into() }
    }
}

/// Build an [`OsError`] that records where it was raised.
#[macro_export]
macro_rules! os_error {
    ($error:expr) => {{
        $crate::error::OsError::new(line!(), file!(), $error)
    }};
}

impl From<OsError> for WatchError {
    fn from(value: OsError) -> Self {
        Self::Os(value)
    }
}

impl fmt::Display for OsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.pad(&format!("os error at {}:{}: {}", self.file, self.line, self.error))
    }
}

impl fmt::Display for WatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            WatchError::InvalidSelector { selector, reason } => {
                write!(f, "invalid selector `{selector}`: {reason}")
            },
            WatchError::Unavailable(what) => write!(f, "`{what}` is not available"),
            WatchError::Os(e) => e.fmt(f),
        }
    }
}

impl error::Error for OsError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(self.error.as_ref())
    }
}

impl error::Error for WatchError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            WatchError::Os(e) => Some(e),
            _ => None,
        }
    }
}
