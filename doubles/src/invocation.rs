//! Recorded invocations

use std::any::Any;
use std::fmt;

use crate::argument::{Argument, Call};

/// One call made against a double, in the order it happened
///
/// Invocations are never modified after they are logged.
#[derive(Debug, Clone)]
pub struct Invocation {
    sequence: u64,
    call: Call,
}

impl Invocation {
    pub(crate) fn new(sequence: u64, call: Call) -> Self {
        Self { sequence, call }
    }

    /// Position in the double's log, starting at zero
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn method(&self) -> &'static str {
        self.call.method()
    }

    pub fn arguments(&self) -> &[Argument] {
        self.call.arguments()
    }

    pub fn argument<A: Any>(&self, position: usize) -> Option<&A> {
        self.call.argument(position)
    }

    pub fn call(&self) -> &Call {
        &self.call
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.sequence, self.call)
    }
}
