//! Post-hoc verification of recorded invocations

use std::fmt;

use crate::double::{Method, TestDouble};
use crate::error::VerificationError;
use crate::ledger::Ledger;
use crate::matcher::MatcherSet;

/// How many matching invocations a verification accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Times {
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
}

impl Times {
    pub fn once() -> Self {
        Times::Exactly(1)
    }

    pub fn never() -> Self {
        Times::Exactly(0)
    }

    pub fn accepts(&self, actual: usize) -> bool {
        match *self {
            Times::Exactly(n) => actual == n,
            Times::AtLeast(n) => actual >= n,
            Times::AtMost(n) => actual <= n,
        }
    }
}

impl Default for Times {
    fn default() -> Self {
        Times::once()
    }
}

impl fmt::Display for Times {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Times::Exactly(n) => write!(f, "exactly {} time(s)", n),
            Times::AtLeast(n) => write!(f, "at least {} time(s)", n),
            Times::AtMost(n) => write!(f, "at most {} time(s)", n),
        }
    }
}

/// Start verifying `double`; defaults to exactly once
pub fn verify<D: TestDouble>(double: &D) -> Verification<'_> {
    Verification {
        ledger: double.ledger(),
        times: Times::default(),
    }
}

/// A verification waiting for the method it checks
#[must_use = "nothing is verified until `.called(..)` is invoked"]
pub struct Verification<'a> {
    ledger: &'a Ledger,
    times: Times,
}

impl<'a> Verification<'a> {
    pub fn times(self, n: usize) -> Self {
        self.expect(Times::Exactly(n))
    }

    pub fn at_least(self, n: usize) -> Self {
        self.expect(Times::AtLeast(n))
    }

    pub fn at_most(self, n: usize) -> Self {
        self.expect(Times::AtMost(n))
    }

    pub fn never(self) -> Self {
        self.expect(Times::never())
    }

    pub fn expect(self, times: Times) -> Self {
        Self { times, ..self }
    }

    /// Check the log for `method` called with arguments matching `matchers`
    ///
    /// Matching invocations count as verified for
    /// [`verify_no_more_interactions`] once this succeeds.
    pub fn called<R>(
        self,
        method: Method<R>,
        matchers: impl Into<MatcherSet>,
    ) -> Result<(), VerificationError> {
        let matchers = matchers.into();
        let matches = self.ledger.matching(method.name(), &matchers);
        let actual = matches.sequences.len();

        if self.times.accepts(actual) {
            self.ledger.mark_verified(&matches.sequences);
            return Ok(());
        }

        let wanted = format!("{}{}", method.name(), matchers);
        tracing::debug!(%wanted, expected = %self.times, actual, "verification failed");

        if actual == 0 {
            Err(VerificationError::WantedButNotInvoked {
                wanted,
                recorded: matches.recorded,
            })
        } else {
            Err(VerificationError::WrongInvocationCount {
                wanted,
                expected: self.times,
                actual,
            })
        }
    }
}

/// Fail if anything at all was invoked on `double`
pub fn verify_no_interactions<D: TestDouble>(double: &D) -> Result<(), VerificationError> {
    let invocations = double.ledger().invocations();
    if invocations.is_empty() {
        Ok(())
    } else {
        Err(VerificationError::UnexpectedInteractions {
            unverified: invocations.iter().map(ToString::to_string).collect(),
        })
    }
}

/// Fail if some invocation was not covered by an earlier successful verification
pub fn verify_no_more_interactions<D: TestDouble>(double: &D) -> Result<(), VerificationError> {
    let unverified = double.ledger().unverified();
    if unverified.is_empty() {
        Ok(())
    } else {
        Err(VerificationError::UnexpectedInteractions {
            unverified: unverified.iter().map(ToString::to_string).collect(),
        })
    }
}
