//! End-to-end scenarios
//!
//! Small services wired to doubles the way application tests use them:
//! constructor injection, stub, exercise, verify.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::{
    any, do_return, eq, matchers, matching, test_double, verify, verify_no_more_interactions,
    Call, Double, Ledger, Method, TestDouble,
};

// ============================================================================
// Data processor over a mocked data service
// ============================================================================

pub trait DataService {
    fn retrieve_data(&self) -> i32;
    fn print_sum(&self, a: f64, b: f64);
}

test_double! {
    pub struct DataServiceDouble for DataService {
        fn retrieve_data(&self) -> i32;
        fn print_sum(&self, a: f64, b: f64);
    }
}

const RETRIEVE_DATA: Method<i32> = Method::new("retrieve_data");
const PRINT_SUM: Method<()> = Method::new("print_sum");

struct DataProcessor<D: DataService> {
    data_service: D,
}

impl<D: DataService> DataProcessor<D> {
    fn new(data_service: D) -> Self {
        Self { data_service }
    }

    fn process(&self) -> i32 {
        self.data_service.retrieve_data() * 2
    }
}

#[test]
fn processor_doubles_stubbed_data() {
    let data_service = DataServiceDouble::mock();
    data_service
        .when(RETRIEVE_DATA, matchers![])
        .then_return(5);
    let processor = DataProcessor::new(data_service);

    assert_eq!(processor.process(), 10);
    verify(&processor.data_service)
        .called(RETRIEVE_DATA, matchers![])
        .unwrap();
}

#[test]
fn mocked_interface_call_is_verified_with_its_arguments() {
    let data_service = DataServiceDouble::mock();

    data_service.print_sum(10.0, 20.0);

    verify(&data_service)
        .called(PRINT_SUM, [eq(10.0_f64), eq(20.0_f64)])
        .unwrap();
    verify_no_more_interactions(&data_service).unwrap();
}

#[test]
fn log_length_equals_call_count() {
    let data_service = DataServiceDouble::mock();

    for n in 0..7 {
        data_service.print_sum(n as f64, 1.0);
        data_service.retrieve_data();
    }

    assert_eq!(data_service.invocations().len(), 14);
}

// ============================================================================
// Argument matchers over a member lookup
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    name: String,
    age: u32,
}

pub trait MemberLookup {
    fn find_user(&self, name: &str, age: u32) -> Option<Member>;
}

test_double! {
    pub struct MemberLookupDouble for MemberLookup {
        fn find_user(&self, name: &str, age: u32) -> Option<Member>;
    }
}

const FIND_USER: Method<Option<Member>> = Method::new("find_user");

#[test]
fn exact_argument_matchers_select_the_stub() {
    let lookup = MemberLookupDouble::mock();
    let alice = Member {
        name: "Alice".to_string(),
        age: 10,
    };
    lookup
        .when(FIND_USER, [eq("Bob".to_string()), eq(25_u32)])
        .then_return(Some(alice.clone()));

    assert_eq!(lookup.find_user("Bob", 25), Some(alice));
    assert_eq!(lookup.find_user("Bob", 26), None);
}

#[test]
fn predicate_and_wildcard_matchers() {
    let lookup = MemberLookupDouble::mock();
    lookup
        .when(
            FIND_USER,
            [any::<String>(), matching("adult", |age: &u32| *age >= 18)],
        )
        .then_answer(|call| {
            Some(Member {
                name: call.argument::<String>(0).cloned().unwrap_or_default(),
                age: call.argument::<u32>(1).copied().unwrap_or_default(),
            })
        });

    assert_eq!(
        lookup.find_user("Carol", 30).map(|member| member.name),
        Some("Carol".to_string())
    );
    assert_eq!(lookup.find_user("Dave", 12), None);
    verify(&lookup)
        .times(2)
        .called(FIND_USER, [any::<String>(), any::<u32>()])
        .unwrap();
    assert_eq!(lookup.captured::<u32>(FIND_USER, 1), vec![30, 12]);
}

#[test]
fn predicates_sharing_a_description_keep_both_stubs() {
    let lookup = MemberLookupDouble::mock();
    let bob = Member {
        name: "Bob".to_string(),
        age: 30,
    };
    lookup
        .when(
            FIND_USER,
            [any::<String>(), matching("age", |age: &u32| *age >= 18)],
        )
        .then_return(Some(bob.clone()));
    lookup
        .when(
            FIND_USER,
            [any::<String>(), matching("age", |age: &u32| *age < 5)],
        )
        .then_return(None);

    assert_eq!(lookup.find_user("x", 30), Some(bob));
    assert_eq!(lookup.find_user("x", 3), None);
}

#[derive(Clone)]
pub struct Token {
    id: u32,
    secret: String,
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.secret == other.secret
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.id)
    }
}

pub trait TokenCheck {
    fn check(&self, token: Token) -> bool;
}

test_double! {
    pub struct TokenCheckDouble for TokenCheck {
        fn check(&self, token: Token) -> bool;
    }
}

const CHECK: Method<bool> = Method::new("check");

#[test]
fn strict_double_tells_apart_values_that_print_alike() {
    let checker = TokenCheckDouble::mock().strict();
    let valid = Token {
        id: 1,
        secret: "a".to_string(),
    };
    let forged = Token {
        id: 1,
        secret: "b".to_string(),
    };
    checker.when(CHECK, [eq(valid.clone())]).then_return(true);
    checker.when(CHECK, [eq(forged.clone())]).then_return(false);

    assert!(checker.check(valid));
    assert!(!checker.check(forged));
}

// ============================================================================
// Spy over a real list wrapper
// ============================================================================

pub trait ListManagement {
    fn create_list(&self) -> Vec<String>;
    fn get_list_size(&self, list: &[String]) -> usize;
    fn add_item(&self, item: &str);
    fn item_count(&self) -> usize;
}

test_double! {
    pub struct ListManagerDouble for ListManagement {
        fn create_list(&self) -> Vec<String>;
        fn get_list_size(&self, list: &[String]) -> usize;
        fn add_item(&self, item: &str);
        fn item_count(&self) -> usize;
    }
}

const GET_LIST_SIZE: Method<usize> = Method::new("get_list_size");
const ADD_ITEM: Method<()> = Method::new("add_item");
const ITEM_COUNT: Method<usize> = Method::new("item_count");

#[derive(Default)]
struct ListManager {
    items: RwLock<Vec<String>>,
    size_queries: RwLock<usize>,
}

impl ListManagement for ListManager {
    fn create_list(&self) -> Vec<String> {
        Vec::new()
    }

    fn get_list_size(&self, list: &[String]) -> usize {
        *self.size_queries.write().unwrap() += 1;
        list.len()
    }

    fn add_item(&self, item: &str) {
        self.items.write().unwrap().push(item.to_string());
    }

    fn item_count(&self) -> usize {
        self.items.read().unwrap().len()
    }
}

#[test]
fn spy_uses_real_methods_until_stubbed() {
    let spy = ListManagerDouble::spy(ListManager::default());

    let mut list = spy.create_list();
    list.push("Item".to_string());
    assert_eq!(spy.get_list_size(&list), 1);

    spy.when(GET_LIST_SIZE, [eq(list.clone())]).then_return(100);

    assert_eq!(spy.get_list_size(&list), 100);
}

#[test]
fn do_return_on_spy_never_runs_the_real_method() {
    let spy = ListManagerDouble::spy(ListManager::default());
    let list = vec!["one".to_string(), "two".to_string(), "three".to_string()];

    do_return(100_usize)
        .when(&spy)
        .on(GET_LIST_SIZE, [eq(list.clone())]);

    assert!(spy.invocations().is_empty());
    assert_eq!(spy.get_list_size(&list), 100);
    assert_eq!(spy.invocations().len(), 1);
}

#[test]
fn stub_registration_leaves_real_state_alone() {
    let real = ListManager::default();
    real.add_item("seed");
    let spy = ListManagerDouble::spy(real);

    spy.when(GET_LIST_SIZE, [any::<Vec<String>>()]).then_return(7);
    do_return(0_usize).when(&spy).on(ITEM_COUNT, matchers![]);

    assert_eq!(spy.with_real(|real| real.item_count()), Some(1));
    assert!(spy.invocations().is_empty());
}

#[test]
fn unstubbed_spy_calls_mutate_the_real_list() {
    let spy = ListManagerDouble::spy(ListManager::default());

    spy.add_item("a");
    spy.add_item("b");

    assert_eq!(spy.item_count(), 2);
    assert_eq!(spy.with_real(|real| real.item_count()), Some(2));
    verify(&spy).times(2).called(ADD_ITEM, [any::<String>()]).unwrap();
    assert_eq!(
        spy.captured::<String>(ADD_ITEM, 0),
        vec!["a".to_string(), "b".to_string()]
    );
}

#[test]
fn stubbed_spy_method_ignores_real_state() {
    let spy = ListManagerDouble::spy(ListManager::default());
    spy.add_item("a");
    spy.when(ITEM_COUNT, matchers![]).then_return(42);

    spy.add_item("b");

    assert_eq!(spy.item_count(), 42);
    assert_eq!(spy.with_real(|real| real.item_count()), Some(2));
}

#[test]
fn call_real_stub_restores_fall_through() {
    let spy = ListManagerDouble::spy(ListManager::default());
    spy.when(ITEM_COUNT, matchers![]).then_return(42);
    spy.when(ITEM_COUNT, matchers![]).then_call_real();

    spy.add_item("a");

    assert_eq!(spy.item_count(), 1);
}

#[test]
fn doubles_share_no_state() {
    let first = ListManagerDouble::mock();
    let second = ListManagerDouble::mock();
    first.when(ITEM_COUNT, matchers![]).then_return(3);

    first.add_item("x");

    assert_eq!(second.item_count(), 0);
    assert_eq!(second.invocations().len(), 1);
    assert_eq!(first.invocations().len(), 1);
}

// ============================================================================
// Hand-written double for an async port
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: i64,
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    Unavailable,
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, StoreError>;
}

#[derive(Default)]
struct MockAccountStore {
    double: Double,
}

const FIND_BY_ID: Method<Result<Option<Account>, StoreError>> = Method::new("find_by_id");

impl TestDouble for MockAccountStore {
    fn ledger(&self) -> &Ledger {
        self.double.ledger()
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, StoreError> {
        self.double.answer(Call::new(FIND_BY_ID.name()).arg(id))
    }
}

struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    async fn display_name(&self, id: i64) -> Result<String, StoreError> {
        Ok(self
            .store
            .find_by_id(id)
            .await?
            .map(|account| account.name)
            .unwrap_or_else(|| "unknown".to_string()))
    }
}

#[test]
fn async_port_double_answers_from_stubs() {
    let store = Arc::new(MockAccountStore::default());
    store.when(FIND_BY_ID, [eq(1_i64)]).then_return(Ok(Some(Account {
        id: 1,
        name: "Test User".to_string(),
    })));
    store
        .when(FIND_BY_ID, [eq(2_i64)])
        .then_fail(StoreError::Unavailable);
    let service = AccountService {
        store: store.clone(),
    };

    assert_eq!(
        tokio_test::block_on(service.display_name(1)),
        Ok("Test User".to_string())
    );
    assert_eq!(
        tokio_test::block_on(service.display_name(2)),
        Err(StoreError::Unavailable)
    );
    assert_eq!(
        tokio_test::block_on(service.display_name(3)),
        Ok("unknown".to_string())
    );
    verify(&*store)
        .at_least(1)
        .called(FIND_BY_ID, [any::<i64>()])
        .unwrap();
}
