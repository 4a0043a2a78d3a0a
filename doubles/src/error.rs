//! Error types for stubbing and verification
//!
//! - `VerificationError`: an expected interaction pattern is missing from the log
//! - `StubError`: a stub registration the double cannot honor

use thiserror::Error;

use crate::verification::Times;

/// A verification found the log different from what was wanted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("wanted but not invoked: {wanted}; {}", describe_recorded(.recorded))]
    WantedButNotInvoked {
        wanted: String,
        recorded: Vec<String>,
    },

    #[error("{wanted} was wanted {expected} but was invoked {actual} time(s)")]
    WrongInvocationCount {
        wanted: String,
        expected: Times,
        actual: usize,
    },

    #[error("no more interactions wanted, but found: {}", .unverified.join(", "))]
    UnexpectedInteractions { unverified: Vec<String> },
}

/// A stub registration was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StubError {
    #[error("ambiguous stub: {method}{pattern} is already stubbed on a strict double")]
    Ambiguous {
        method: &'static str,
        pattern: String,
    },

    #[error("cannot call the real method for {method}: the double is a mock")]
    NoRealInstance { method: &'static str },
}

fn describe_recorded(recorded: &[String]) -> String {
    if recorded.is_empty() {
        "there were zero interactions with this double".to_string()
    } else {
        format!("recorded: {}", recorded.join(", "))
    }
}
