//! Neutral return values
//!
//! What an unstubbed mock returns: zero, `false`, empty text, `None`, empty
//! collections, `()`. A `Result` is neutral when it is `Ok` of the neutral
//! value, so an unstubbed repository lookup reads as "found nothing".

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::sync::Arc;

/// The value a mock returns when no stub matches
pub trait Neutral {
    fn neutral() -> Self;
}

macro_rules! neutral_from_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Neutral for $ty {
                fn neutral() -> Self {
                    Default::default()
                }
            }
        )*
    };
}

neutral_from_default!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
);

impl<T> Neutral for Option<T> {
    fn neutral() -> Self {
        None
    }
}

impl<T> Neutral for Vec<T> {
    fn neutral() -> Self {
        Vec::new()
    }
}

impl<T> Neutral for VecDeque<T> {
    fn neutral() -> Self {
        VecDeque::new()
    }
}

impl<K, V> Neutral for HashMap<K, V> {
    fn neutral() -> Self {
        HashMap::new()
    }
}

impl<K, V> Neutral for BTreeMap<K, V> {
    fn neutral() -> Self {
        BTreeMap::new()
    }
}

impl<T> Neutral for HashSet<T> {
    fn neutral() -> Self {
        HashSet::new()
    }
}

impl<T> Neutral for BTreeSet<T> {
    fn neutral() -> Self {
        BTreeSet::new()
    }
}

impl<T: Neutral> Neutral for Box<T> {
    fn neutral() -> Self {
        Box::new(T::neutral())
    }
}

impl<T: Neutral> Neutral for Arc<T> {
    fn neutral() -> Self {
        Arc::new(T::neutral())
    }
}

impl<T: Neutral, E> Neutral for Result<T, E> {
    fn neutral() -> Self {
        Ok(T::neutral())
    }
}

impl<A: Neutral, B: Neutral> Neutral for (A, B) {
    fn neutral() -> Self {
        (A::neutral(), B::neutral())
    }
}

impl<A: Neutral, B: Neutral, C: Neutral> Neutral for (A, B, C) {
    fn neutral() -> Self {
        (A::neutral(), B::neutral(), C::neutral())
    }
}

/// Implement [`Neutral`] through `Default` for your own return types
///
/// ```
/// #[derive(Debug, Default, PartialEq)]
/// struct Summary {
///     total: u32,
/// }
///
/// sandbox_doubles::neutral_via_default!(Summary);
///
/// use sandbox_doubles::Neutral;
/// assert_eq!(Summary::neutral(), Summary { total: 0 });
/// ```
#[macro_export]
macro_rules! neutral_via_default {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Neutral for $ty {
                fn neutral() -> Self {
                    ::std::default::Default::default()
                }
            }
        )+
    };
}
