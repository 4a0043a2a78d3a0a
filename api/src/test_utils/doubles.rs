//! Doubles for the port traits
//!
//! Each double records its calls in a ledger; stub with `when`/`do_return`
//! and check with `verify` using the method constants below.

use async_trait::async_trait;
use sandbox_doubles::{test_double, Call, Double, Ledger, Method, TestDouble};

use crate::domain::entities::{User, UserId};
use crate::domain::ports::{DataService, GreetingService, ListManagement, UserRepository};
use crate::error::DomainError;

// ============================================================================
// User Repository
// ============================================================================

pub const FIND_USER_BY_ID: Method<Result<Option<User>, DomainError>> = Method::new("find_by_id");
pub const FIND_ALL_USERS: Method<Result<Vec<User>, DomainError>> = Method::new("find_all");

/// Mock `UserRepository`; unstubbed lookups return `Ok(None)` / `Ok(vec![])`
#[derive(Debug, Default)]
pub struct MockUserRepository {
    double: Double,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-stubbing the same lookup fails the test
    pub fn strict() -> Self {
        Self {
            double: Double::mock().strict(),
        }
    }
}

impl TestDouble for MockUserRepository {
    fn ledger(&self) -> &Ledger {
        self.double.ledger()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.double.answer(Call::new(FIND_USER_BY_ID.name()).arg(*id))
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        self.double.answer(Call::new(FIND_ALL_USERS.name()))
    }
}

// ============================================================================
// Collaborator services
// ============================================================================

test_double! {
    /// Mock or spy for `DataService`
    pub struct DataServiceDouble for DataService {
        fn retrieve_data(&self) -> i32;
        fn print_sum(&self, a: f64, b: f64);
    }
}

pub const RETRIEVE_DATA: Method<i32> = Method::new("retrieve_data");
pub const PRINT_SUM: Method<()> = Method::new("print_sum");

test_double! {
    /// Mock or spy for `ListManagement`
    pub struct ListManagementDouble for ListManagement {
        fn create_list(&self) -> Vec<String>;
        fn get_list_size(&self, list: &[String]) -> usize;
        fn add_item(&self, item: &str);
        fn item_count(&self) -> usize;
    }
}

pub const CREATE_LIST: Method<Vec<String>> = Method::new("create_list");
pub const GET_LIST_SIZE: Method<usize> = Method::new("get_list_size");
pub const ADD_ITEM: Method<()> = Method::new("add_item");
pub const ITEM_COUNT: Method<usize> = Method::new("item_count");

test_double! {
    /// Mock or spy for `GreetingService`
    pub struct GreetingServiceDouble for GreetingService {
        fn greet(&self) -> String;
    }
}

pub const GREET: Method<String> = Method::new("greet");
