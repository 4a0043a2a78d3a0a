//! Argument matchers
//!
//! A `Matcher` is a predicate over one positional argument. A `MatcherSet`
//! matches a call when the arity is the same and every position matches.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::argument::Argument;

type Predicate = Box<dyn Fn(&Argument) -> bool + Send + Sync>;

/// What two matchers must share to count as the same pattern
enum Identity {
    /// `eq`: same type and equal expected value
    Value {
        expected: Arc<dyn Any + Send + Sync>,
        same: fn(&dyn Any, &dyn Any) -> bool,
    },
    /// `any::<T>`: same type
    OfType(TypeId),
    /// `matching`: closures are never comparable
    Predicate,
}

impl Identity {
    fn same(&self, other: &Identity) -> bool {
        match (self, other) {
            (
                Identity::Value { expected, same },
                Identity::Value {
                    expected: theirs, ..
                },
            ) => {
                let ours: &dyn Any = &**expected;
                let theirs: &dyn Any = &**theirs;
                (*same)(ours, theirs)
            }
            (Identity::OfType(a), Identity::OfType(b)) => a == b,
            _ => false,
        }
    }
}

fn same_value<A: PartialEq + Any>(a: &dyn Any, b: &dyn Any) -> bool {
    match (a.downcast_ref::<A>(), b.downcast_ref::<A>()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Predicate over a single argument
pub struct Matcher {
    description: String,
    identity: Identity,
    predicate: Predicate,
}

impl Matcher {
    pub fn matches(&self, argument: &Argument) -> bool {
        (self.predicate)(argument)
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Matches an argument equal to `expected`
///
/// An argument of a different type never matches.
pub fn eq<A>(expected: A) -> Matcher
where
    A: PartialEq + Any + Send + Sync + fmt::Debug,
{
    let description = format!("{:?}", expected);
    let wanted = Arc::new(expected);
    let expected: Arc<dyn Any + Send + Sync> = wanted.clone();
    Matcher {
        description,
        identity: Identity::Value {
            expected,
            same: same_value::<A>,
        },
        predicate: Box::new(move |argument| {
            argument
                .downcast_ref::<A>()
                .is_some_and(|actual| *actual == *wanted)
        }),
    }
}

/// Matches any argument of type `A`
pub fn any<A: Any>() -> Matcher {
    Matcher {
        description: format!("any::<{}>()", type_name::<A>()),
        identity: Identity::OfType(TypeId::of::<A>()),
        predicate: Box::new(|argument| argument.downcast_ref::<A>().is_some()),
    }
}

/// Matches an argument of type `A` for which `predicate` holds
///
/// `description` is what verification failures print for this position.
pub fn matching<A, F>(description: impl Into<String>, predicate: F) -> Matcher
where
    A: Any,
    F: Fn(&A) -> bool + Send + Sync + 'static,
{
    Matcher {
        description: description.into(),
        identity: Identity::Predicate,
        predicate: Box::new(move |argument| {
            argument.downcast_ref::<A>().is_some_and(&predicate)
        }),
    }
}

/// Ordered per-argument matchers for one method
#[derive(Debug, Default)]
pub struct MatcherSet {
    matchers: Vec<Matcher>,
}

impl MatcherSet {
    pub fn new(matchers: Vec<Matcher>) -> Self {
        Self { matchers }
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn matches(&self, arguments: &[Argument]) -> bool {
        self.matchers.len() == arguments.len()
            && self
                .matchers
                .iter()
                .zip(arguments)
                .all(|(matcher, argument)| matcher.matches(argument))
    }

    /// Whether both sets accept exactly the same calls
    ///
    /// `eq` compares type and value, `any` compares type. A `matching`
    /// predicate is never the same as anything, even itself.
    pub(crate) fn same_pattern(&self, other: &MatcherSet) -> bool {
        self.matchers.len() == other.matchers.len()
            && self
                .matchers
                .iter()
                .zip(&other.matchers)
                .all(|(a, b)| a.identity.same(&b.identity))
    }
}

impl fmt::Display for MatcherSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, matcher) in self.matchers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&matcher.description)?;
        }
        f.write_str(")")
    }
}

impl From<Vec<Matcher>> for MatcherSet {
    fn from(matchers: Vec<Matcher>) -> Self {
        Self::new(matchers)
    }
}

impl<const N: usize> From<[Matcher; N]> for MatcherSet {
    fn from(matchers: [Matcher; N]) -> Self {
        Self::new(matchers.into())
    }
}

impl From<Matcher> for MatcherSet {
    fn from(matcher: Matcher) -> Self {
        Self::new(vec![matcher])
    }
}
