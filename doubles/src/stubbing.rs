//! Stub registration
//!
//! Two registration orders, both side-effect free:
//!
//! - `double.when(METHOD, matchers).then_return(value)`
//! - `do_return(value).when(&double).on(METHOD, matchers)`
//!
//! Neither calls the method being stubbed, so a spy's real instance is never
//! touched and no invocation is logged while a test configures its doubles.

use std::marker::PhantomData;

use crate::argument::Call;
use crate::double::{Method, TestDouble};
use crate::ledger::Ledger;
use crate::matcher::MatcherSet;
use crate::response::Response;

/// A stub waiting for its response, started with [`TestDouble::when`]
#[must_use = "a stub does nothing until given a response"]
pub struct Stubbing<'a, R> {
    ledger: &'a Ledger,
    method: &'static str,
    matchers: MatcherSet,
    _returns: PhantomData<fn() -> R>,
}

impl<'a, R: 'static> Stubbing<'a, R> {
    pub(crate) fn new(ledger: &'a Ledger, method: Method<R>, matchers: MatcherSet) -> Self {
        Self {
            ledger,
            method: method.name(),
            matchers,
            _returns: PhantomData,
        }
    }

    /// Return `value` on every matching call
    pub fn then_return(self, value: R)
    where
        R: Clone + Send + Sync,
    {
        self.respond(Response::returning(value));
    }

    /// Compute the return value from the matching call
    pub fn then_answer<F>(self, answer: F)
    where
        F: Fn(&Call) -> R + Send + Sync + 'static,
    {
        self.respond(Response::answering(answer));
    }

    /// Run the real method for matching calls
    ///
    /// # Panics
    ///
    /// If the double is a mock.
    pub fn then_call_real(self) {
        self.respond(Response::CallReal);
    }

    fn respond(self, response: Response) {
        self.ledger.register(self.method, self.matchers, response);
    }
}

impl<'a, T, E> Stubbing<'a, Result<T, E>>
where
    T: 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Return `Err(error)` on every matching call
    pub fn then_fail(self, error: E) {
        self.respond(Response::failing::<T, E>(error));
    }
}

/// Start a stub on `double`; same as [`TestDouble::when`]
pub fn when<'a, D, R>(
    double: &'a D,
    method: Method<R>,
    matchers: impl Into<MatcherSet>,
) -> Stubbing<'a, R>
where
    D: TestDouble,
    R: 'static,
{
    Stubbing::new(double.ledger(), method, matchers.into())
}

/// A response waiting for the double and method it applies to
#[must_use = "a prepared response does nothing until registered with `.when(..).on(..)`"]
pub struct Prepared<R> {
    response: Response,
    _returns: PhantomData<fn() -> R>,
}

impl<R> Prepared<R> {
    fn new(response: Response) -> Self {
        Self {
            response,
            _returns: PhantomData,
        }
    }

    pub fn when<D: TestDouble>(self, double: &D) -> PreparedOn<'_, R> {
        PreparedOn {
            ledger: double.ledger(),
            response: self.response,
            _returns: PhantomData,
        }
    }
}

/// A response bound to a double, waiting for the method
#[must_use = "a prepared response does nothing until registered with `.on(..)`"]
pub struct PreparedOn<'a, R> {
    ledger: &'a Ledger,
    response: Response,
    _returns: PhantomData<fn() -> R>,
}

impl<'a, R> PreparedOn<'a, R> {
    /// Register the response for `method` called with arguments matching `matchers`
    pub fn on(self, method: Method<R>, matchers: impl Into<MatcherSet>) {
        self.ledger
            .register(method.name(), matchers.into(), self.response);
    }
}

/// Prepare a fixed return value: `do_return(v).when(&double).on(METHOD, matchers)`
pub fn do_return<R>(value: R) -> Prepared<R>
where
    R: Clone + Send + Sync + 'static,
{
    Prepared::new(Response::returning(value))
}

/// Prepare an `Err` for a method returning `Result<T, E>`
pub fn do_fail<T, E>(error: E) -> Prepared<Result<T, E>>
where
    T: 'static,
    E: Clone + Send + Sync + 'static,
{
    Prepared::new(Response::failing::<T, E>(error))
}

/// Prepare a computed return value
pub fn do_answer<R, F>(answer: F) -> Prepared<R>
where
    R: 'static,
    F: Fn(&Call) -> R + Send + Sync + 'static,
{
    Prepared::new(Response::answering(answer))
}

/// Prepare a fall-through to the real method of a spy
pub fn do_call_real<R>() -> Prepared<R> {
    Prepared::new(Response::CallReal)
}
