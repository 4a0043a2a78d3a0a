//! Mocks and spies
//!
//! `Double<T>` is the recording core every test double is built on. A double
//! for a trait owns one and forwards each trait method through
//! [`Double::invoke`] (spy-capable) or [`Double::answer`] (mock-only).

use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Mutex, PoisonError};

use crate::argument::Call;
use crate::invocation::Invocation;
use crate::ledger::{Ledger, Strictness};
use crate::matcher::MatcherSet;
use crate::neutral::Neutral;
use crate::response::Resolution;
use crate::stubbing::Stubbing;

/// Typed name of a method on a capability trait
///
/// The return type ties stubs to the method's signature, so
/// `when(RETRIEVE_DATA, ..).then_return("five")` does not compile when
/// `RETRIEVE_DATA` is a `Method<i32>`.
pub struct Method<R> {
    name: &'static str,
    _returns: PhantomData<fn() -> R>,
}

impl<R> Method<R> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _returns: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<R> Clone for Method<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Method<R> {}

impl<R> fmt::Debug for Method<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Method({})", self.name)
    }
}

impl<R> From<Method<R>> for &'static str {
    fn from(method: Method<R>) -> Self {
        method.name
    }
}

/// Anything backed by a [`Ledger`]: stubbing and verification entry point
pub trait TestDouble {
    fn ledger(&self) -> &Ledger;

    /// Start a stub for `method` called with arguments matching `matchers`
    ///
    /// Nothing is invoked while stubbing, on mocks or spies.
    fn when<R>(&self, method: Method<R>, matchers: impl Into<MatcherSet>) -> Stubbing<'_, R>
    where
        Self: Sized,
        R: 'static,
    {
        Stubbing::new(self.ledger(), method, matchers.into())
    }

    /// Snapshot of every invocation so far, in call order
    fn invocations(&self) -> Vec<Invocation> {
        self.ledger().invocations()
    }

    /// Every argument passed at `position` to `method`, in call order
    ///
    /// Invocations whose argument at `position` is not an `A` are skipped.
    fn captured<A>(&self, method: impl Into<&'static str>, position: usize) -> Vec<A>
    where
        Self: Sized,
        A: Any + Clone,
    {
        let method = method.into();
        self.ledger()
            .invocations()
            .iter()
            .filter(|i| i.method() == method)
            .filter_map(|i| i.argument::<A>(position).cloned())
            .collect()
    }

    /// Forget all invocations and stubs
    fn reset(&self) {
        self.ledger().reset();
    }

    /// Forget invocations, keep stubs
    fn clear_invocations(&self) {
        self.ledger().clear_invocations();
    }
}

/// Recording core of a mock or spy over `T`
///
/// A mock has no `T`; a spy owns one and delegates unstubbed calls to it.
pub struct Double<T = ()> {
    ledger: Ledger,
    real: Option<Mutex<T>>,
}

impl<T> Double<T> {
    /// A double whose unstubbed methods return [`Neutral`] values
    pub fn mock() -> Self {
        Self {
            ledger: Ledger::new(Strictness::Lenient, false),
            real: None,
        }
    }

    /// A double whose unstubbed methods run on `real`
    pub fn spy(real: T) -> Self {
        Self {
            ledger: Ledger::new(Strictness::Lenient, true),
            real: Some(Mutex::new(real)),
        }
    }

    /// Reject re-stubbing an identical pattern instead of replacing it
    pub fn strict(self) -> Self {
        Self {
            ledger: self.ledger.with_strictness(Strictness::Strict),
            real: self.real,
        }
    }

    pub fn is_spy(&self) -> bool {
        self.real.is_some()
    }

    /// Run `inspect` against the real instance, if this is a spy
    ///
    /// Not recorded as an invocation.
    pub fn with_real<V>(&self, inspect: impl FnOnce(&mut T) -> V) -> Option<V> {
        let real = self.real.as_ref()?;
        let mut guard = real.lock().unwrap_or_else(PoisonError::into_inner);
        Some(inspect(&mut guard))
    }

    pub fn into_real(self) -> Option<T> {
        self.real
            .map(|real| real.into_inner().unwrap_or_else(PoisonError::into_inner))
    }

    /// Record `call`, then resolve it
    ///
    /// Resolution order: the newest matching stub, then `real` on a spy, then
    /// the neutral value on a mock. `real` only runs when the call falls
    /// through to the real instance.
    ///
    /// # Panics
    ///
    /// If a stub produced a value that is not an `R`. [`Method`] rules this out
    /// unless a double labels two methods with the same name.
    pub fn invoke<R, F>(&self, call: Call, real: F) -> R
    where
        R: Neutral + 'static,
        F: FnOnce(&mut T) -> R,
    {
        self.dispatch(call, Some(real))
    }

    /// Record `call` and resolve it from stubs alone
    ///
    /// Unstubbed calls and `then_call_real` stubs resolve to the neutral value.
    /// This is the dispatch for hand-written doubles of traits the double
    /// cannot hold a real instance of, such as async ports.
    pub fn answer<R>(&self, call: Call) -> R
    where
        R: Neutral + 'static,
    {
        self.dispatch(call, None::<fn(&mut T) -> R>)
    }

    fn dispatch<R, F>(&self, call: Call, real: Option<F>) -> R
    where
        R: Neutral + 'static,
        F: FnOnce(&mut T) -> R,
    {
        let (invocation, response) = self.ledger.record(call);

        let fall_through = match response {
            Some(response) => match response.resolve(invocation.call()) {
                Resolution::Value(value) => return downcast_value(invocation.method(), value),
                Resolution::CallReal => true,
            },
            None => self.is_spy(),
        };

        match (fall_through, real) {
            (true, Some(real)) => self
                .with_real(real)
                .unwrap_or_else(R::neutral),
            _ => R::neutral(),
        }
    }
}

impl<T> Default for Double<T> {
    fn default() -> Self {
        Self::mock()
    }
}

impl<T> TestDouble for Double<T> {
    fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

impl<T> fmt::Debug for Double<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Double")
            .field("spy", &self.is_spy())
            .field("invocations", &self.ledger.invocation_count())
            .field("stubs", &self.ledger.stub_count())
            .finish()
    }
}

fn downcast_value<R: 'static>(method: &'static str, value: Box<dyn Any>) -> R {
    match value.downcast::<R>() {
        Ok(value) => *value,
        Err(_) => panic!(
            "stub for `{}` does not produce a `{}`",
            method,
            type_name::<R>()
        ),
    }
}
