//! Plugin verdicts and the monitoring-plugin output convention.
//!
//! A [`Verdict`] is a plain value: building one has no side effects.
//! Printing it and choosing the process exit code happens only at the
//! binary boundary through [`Verdict::emit`].

use std::fmt;
use std::process::ExitCode;

use crate::error::Error;

/// Service state reported to the monitoring system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// Exit code for this state (0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN).
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Outcome of a plugin run: a state and the message lines to print.
///
/// The first line is the summary; further lines carry one finding each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub status: Status,
    pub lines: Vec<String>,
}

impl Verdict {
    /// Verdict with a single-line message.
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            lines: vec![message.into()],
        }
    }

    /// Verdict with a multi-line message.
    pub fn with_lines(status: Status, lines: Vec<String>) -> Self {
        Self { status, lines }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(Status::Ok, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(Status::Unknown, message)
    }

    /// Every error ends the run as UNKNOWN with the error's text.
    pub fn from_error(error: &Error) -> Self {
        Self::unknown(error.to_string())
    }

    /// The text printed on stdout.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Print the verdict and hand back the matching process exit code.
    pub fn emit(&self) -> ExitCode {
        tracing::debug!(target: "nelmon::report", { status = %self.status, lines = self.lines.len() }, "emitting verdict");
        println!("{}", self.render());
        ExitCode::from(self.status.exit_code())
    }
}

impl From<Box<Error>> for Verdict {
    fn from(error: Box<Error>) -> Self {
        Self::from_error(&error)
    }
}

/// Collapse a plugin result into the verdict to report.
pub fn conclude(result: crate::Result<Verdict>) -> Verdict {
    result.unwrap_or_else(Verdict::from)
}
