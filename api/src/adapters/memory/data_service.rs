//! Data service with a configured value

use crate::domain::ports::DataService;

/// Returns the same number on every call and logs sums
pub struct FixedDataService {
    value: i32,
}

impl FixedDataService {
    pub fn new(value: i32) -> Self {
        Self { value }
    }
}

impl DataService for FixedDataService {
    fn retrieve_data(&self) -> i32 {
        tracing::debug!(value = self.value, "retrieving data");
        self.value
    }

    fn print_sum(&self, a: f64, b: f64) {
        tracing::info!("Sum: {}", a + b);
    }
}
