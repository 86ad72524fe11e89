//! Error types for nelmon plugins.
//!
//! Every variant is terminal for an invocation: the binaries turn any
//! [`Error`] into an UNKNOWN verdict carrying its display text (see
//! [`Verdict::from_error`](crate::report::Verdict::from_error)).
//!
//! Errors are boxed for efficiency: `Result<T> = Result<T, Box<Error>>`.
//!
//! ```rust
//! use nelmon::{Error, Result};
//!
//! fn describe(result: Result<()>) -> String {
//!     match result {
//!         Ok(()) => "ok".into(),
//!         Err(e) => match &*e {
//!             Error::Config(msg) => format!("bad arguments: {}", msg),
//!             Error::Transport(msg) => format!("device unreachable: {}", msg),
//!             other => other.to_string(),
//!         },
//!     }
//! }
//! ```

use async_snmp::Oid;

/// Result type alias using the crate's boxed Error type.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The error type for all nelmon operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Missing or inconsistent command-line arguments.
    ///
    /// The message is shown to the operator as-is.
    #[error("{0}")]
    Config(Box<str>),

    /// A filter regex failed to compile.
    #[error("invalid regex for {flag}: {source}")]
    InvalidPattern {
        flag: &'static str,
        #[source]
        source: regex::Error,
    },

    /// The SNMP exchange failed (timeout, authentication, network,
    /// malformed response, aborted walk, name resolution).
    #[error("{0}")]
    Transport(Box<str>),

    /// The agent answered with an OID that is not `<column>.<index>`.
    #[error("unexpected OID {oid} in response (expected a row of {column})")]
    UnexpectedOid { oid: Oid, column: Oid },
}

impl Error {
    /// Box this error (convenience for constructing boxed errors).
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Shorthand for a boxed [`Error::Config`].
    pub fn config(msg: impl Into<Box<str>>) -> Box<Self> {
        Error::Config(msg.into()).boxed()
    }

    /// Shorthand for a boxed [`Error::Transport`].
    pub fn transport(msg: impl std::fmt::Display) -> Box<Self> {
        Error::Transport(msg.to_string().into()).boxed()
    }
}
