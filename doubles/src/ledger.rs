//! Per-double invocation log and stub table
//!
//! The ledger is everything about a double except its real instance. Stubbing
//! and verification only ever see a ledger, which is why neither can run real
//! code on a spy.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::argument::Call;
use crate::error::StubError;
use crate::invocation::Invocation;
use crate::matcher::MatcherSet;
use crate::response::Response;

/// How a double treats a second stub for an identical matcher set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// The newer stub replaces the older one
    #[default]
    Lenient,
    /// Re-stubbing an identical pattern fails the test
    Strict,
}

struct Stub {
    method: &'static str,
    matchers: MatcherSet,
    response: Arc<Response>,
}

#[derive(Default)]
struct LedgerState {
    invocations: Vec<Invocation>,
    verified: BTreeSet<u64>,
    stubs: Vec<Stub>,
    next_sequence: u64,
}

/// Invocation log plus registered stubs for one double
#[derive(Default)]
pub struct Ledger {
    state: Mutex<LedgerState>,
    strictness: Strictness,
    backed_by_real: bool,
}

/// Invocations of one method that satisfied a matcher set
pub(crate) struct Matches {
    pub(crate) sequences: Vec<u64>,
    pub(crate) recorded: Vec<String>,
}

impl Ledger {
    pub(crate) fn new(strictness: Strictness, backed_by_real: bool) -> Self {
        Self {
            state: Mutex::default(),
            strictness,
            backed_by_real,
        }
    }

    fn state(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    pub(crate) fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Append `call` to the log and pick the stub that answers it
    ///
    /// The invocation is logged before any stub is consulted. Stubs are
    /// searched newest first.
    pub(crate) fn record(&self, call: Call) -> (Invocation, Option<Arc<Response>>) {
        let mut state = self.state();
        let sequence = state.next_sequence;
        state.next_sequence += 1;

        let invocation = Invocation::new(sequence, call);
        state.invocations.push(invocation.clone());

        let response = state
            .stubs
            .iter()
            .rev()
            .find(|stub| {
                stub.method == invocation.method()
                    && stub.matchers.matches(invocation.arguments())
            })
            .map(|stub| Arc::clone(&stub.response));

        tracing::trace!(
            %invocation,
            stubbed = response.is_some(),
            "recorded invocation"
        );

        (invocation, response)
    }

    /// Register `response` for `method` called with arguments matching `matchers`
    ///
    /// # Panics
    ///
    /// On a strict double when an identical pattern is already stubbed, and
    /// when asking a mock to call a real method it does not have.
    pub(crate) fn register(&self, method: &'static str, matchers: MatcherSet, response: Response) {
        if response.is_call_real() && !self.backed_by_real {
            panic!("{}", StubError::NoRealInstance { method });
        }

        let mut state = self.state();
        let existing = state
            .stubs
            .iter()
            .position(|stub| stub.method == method && stub.matchers.same_pattern(&matchers));

        if let Some(position) = existing {
            if self.strictness == Strictness::Strict {
                let err = StubError::Ambiguous {
                    method,
                    pattern: matchers.to_string(),
                };
                drop(state);
                panic!("{}", err);
            }
            let replaced = state.stubs.remove(position);
            tracing::debug!(
                method,
                pattern = %matchers,
                previous = replaced.response.kind(),
                next = response.kind(),
                "replacing stub"
            );
        } else {
            tracing::debug!(
                method,
                pattern = %matchers,
                response = response.kind(),
                "registered stub"
            );
        }

        state.stubs.push(Stub {
            method,
            matchers,
            response: Arc::new(response),
        });
    }

    /// Snapshot of the log in sequence order
    pub fn invocations(&self) -> Vec<Invocation> {
        self.state().invocations.clone()
    }

    pub fn invocation_count(&self) -> usize {
        self.state().invocations.len()
    }

    pub fn stub_count(&self) -> usize {
        self.state().stubs.len()
    }

    pub(crate) fn matching(&self, method: &'static str, matchers: &MatcherSet) -> Matches {
        let state = self.state();
        let sequences = state
            .invocations
            .iter()
            .filter(|i| i.method() == method && matchers.matches(i.arguments()))
            .map(Invocation::sequence)
            .collect();
        let recorded = state.invocations.iter().map(ToString::to_string).collect();

        Matches {
            sequences,
            recorded,
        }
    }

    pub(crate) fn mark_verified(&self, sequences: &[u64]) {
        self.state().verified.extend(sequences.iter().copied());
    }

    pub(crate) fn unverified(&self) -> Vec<Invocation> {
        let state = self.state();
        state
            .invocations
            .iter()
            .filter(|i| !state.verified.contains(&i.sequence()))
            .cloned()
            .collect()
    }

    /// Forget every invocation and stub
    pub fn reset(&self) {
        let mut state = self.state();
        *state = LedgerState::default();
    }

    /// Forget invocations but keep stubs
    ///
    /// Sequence numbers keep counting up.
    pub fn clear_invocations(&self) {
        let mut state = self.state();
        state.invocations.clear();
        state.verified.clear();
    }
}
