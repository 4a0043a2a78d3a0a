//! Test doubles for trait-shaped dependencies
//!
//! Mocks, spies, argument matchers and verification for code that takes its
//! collaborators as trait objects or generic parameters.
//!
//! - [`Double`]: recording core. A mock returns [`Neutral`] values unless
//!   stubbed; a spy wraps a real instance and delegates unstubbed calls to it.
//! - [`test_double!`]: generates the double type for a synchronous trait.
//! - [`TestDouble::when`] and [`do_return`]: stub registration. Neither calls
//!   the method being stubbed.
//! - [`verify`]: count-qualified checks against the invocation log.
//!
//! ```
//! use sandbox_doubles::{do_return, matchers, test_double, verify, Method};
//!
//! pub trait DataService {
//!     fn retrieve_data(&self) -> i32;
//! }
//!
//! test_double! {
//!     pub struct DataServiceDouble for DataService {
//!         fn retrieve_data(&self) -> i32;
//!     }
//! }
//!
//! const RETRIEVE_DATA: Method<i32> = Method::new("retrieve_data");
//!
//! let service = DataServiceDouble::mock();
//! assert_eq!(service.retrieve_data(), 0);
//!
//! do_return(5).when(&service).on(RETRIEVE_DATA, matchers![]);
//! assert_eq!(service.retrieve_data() * 2, 10);
//!
//! verify(&service).times(2).called(RETRIEVE_DATA, matchers![]).unwrap();
//! ```
//!
//! Doubles are meant for one test on one thread. The ledger sits behind a
//! mutex so doubles satisfy `Send + Sync` port bounds, not so they can be
//! called concurrently.

mod argument;
mod double;
mod error;
mod invocation;
mod ledger;
mod macros;
mod matcher;
mod neutral;
mod response;
mod stubbing;
mod verification;

#[cfg(test)]
mod scenarios;

pub use argument::{Argument, Call};
pub use double::{Double, Method, TestDouble};
pub use error::{StubError, VerificationError};
pub use invocation::Invocation;
pub use ledger::{Ledger, Strictness};
pub use matcher::{any, eq, matching, Matcher, MatcherSet};
pub use neutral::Neutral;
pub use stubbing::{
    do_answer, do_call_real, do_fail, do_return, when, Prepared, PreparedOn, Stubbing,
};
pub use verification::{
    verify, verify_no_interactions, verify_no_more_interactions, Times, Verification,
};
