//! Declarative helpers
//!
//! `test_double!` writes the double for a synchronous, object-safe trait: a
//! struct with `mock`/`spy` constructors and a trait impl that records every
//! call and dispatches it through [`Double::invoke`](crate::Double::invoke).
//!
//! Arguments are recorded through `ToOwned`, so `&str` is logged as `String`
//! and `&[T]` as `Vec<T>`. Stub and verify with matchers over the owned type.

/// Build a [`MatcherSet`](crate::MatcherSet) from matchers; `matchers![]` for no arguments
#[macro_export]
macro_rules! matchers {
    () => {
        $crate::MatcherSet::default()
    };
    ($($matcher:expr),+ $(,)?) => {
        $crate::MatcherSet::new(::std::vec![$($matcher),+])
    };
}

/// Generate a mock/spy double for a trait
///
/// ```
/// use sandbox_doubles::{eq, test_double, verify, Method, TestDouble};
///
/// pub trait Greeter {
///     fn greet(&self, name: &str) -> String;
/// }
///
/// test_double! {
///     pub struct GreeterDouble for Greeter {
///         fn greet(&self, name: &str) -> String;
///     }
/// }
///
/// const GREET: Method<String> = Method::new("greet");
///
/// let greeter = GreeterDouble::mock();
/// greeter
///     .when(GREET, [eq("Ada".to_string())])
///     .then_return("Hello, Ada".to_string());
///
/// assert_eq!(greeter.greet("Ada"), "Hello, Ada");
/// assert_eq!(greeter.greet("Bob"), "");
/// verify(&greeter).called(GREET, [eq("Bob".to_string())]).unwrap();
/// ```
#[macro_export]
macro_rules! test_double {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident for $capability:path {
            $(
                $(#[$method_meta:meta])*
                fn $method:ident(&self $(, $arg:ident : $arg_ty:ty)*) $(-> $ret:ty)?;
            )*
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            double: $crate::Double<::std::boxed::Box<dyn $capability + ::std::marker::Send>>,
        }

        #[allow(dead_code)]
        impl $name {
            /// Unstubbed methods return neutral values
            pub fn mock() -> Self {
                Self {
                    double: $crate::Double::mock(),
                }
            }

            /// Unstubbed methods run on `real`
            pub fn spy<Real>(real: Real) -> Self
            where
                Real: $capability + ::std::marker::Send + 'static,
            {
                Self {
                    double: $crate::Double::spy(::std::boxed::Box::new(real)),
                }
            }

            /// Re-stubbing an identical pattern fails the test
            pub fn strict(self) -> Self {
                Self {
                    double: self.double.strict(),
                }
            }

            pub fn is_spy(&self) -> bool {
                self.double.is_spy()
            }

            /// Inspect the real instance behind a spy without recording a call
            pub fn with_real<V>(
                &self,
                inspect: impl FnOnce(&mut (dyn $capability + ::std::marker::Send + 'static)) -> V,
            ) -> ::std::option::Option<V> {
                self.double.with_real(|real| inspect(&mut **real))
            }
        }

        impl $capability for $name {
            $(
                $(#[$method_meta])*
                fn $method(&self $(, $arg: $arg_ty)*) -> $crate::__double_return_type!($($ret)?) {
                    let call = $crate::Call::new(::std::stringify!($method))
                        $(.arg($arg.to_owned()))*;
                    self.double.invoke(call, move |real| real.$method($($arg),*))
                }
            )*
        }

        impl $crate::TestDouble for $name {
            fn ledger(&self) -> &$crate::Ledger {
                $crate::TestDouble::ledger(&self.double)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.double, f)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __double_return_type {
    () => { () };
    ($ret:ty) => { $ret };
}
