//! Collaborator ports
//!
//! Synchronous capabilities the application services depend on. Tests swap
//! them for doubles; the binary wires the adapters in `crate::adapters` or
//! the real services in `crate::app`.

/// Source of the number `DataProcessor` works on
pub trait DataService: Send + Sync {
    fn retrieve_data(&self) -> i32;

    /// Report `a + b` through whatever channel the service writes to
    fn print_sum(&self, a: f64, b: f64);
}

#[cfg_attr(test, mockall::automock)]
pub trait GreetingService: Send + Sync {
    fn greet(&self) -> String;
}

/// A string list with an item store behind it
pub trait ListManagement: Send + Sync {
    fn create_list(&self) -> Vec<String>;
    fn get_list_size(&self, list: &[String]) -> usize;
    fn add_item(&self, item: &str);
    fn item_count(&self) -> usize;
}
