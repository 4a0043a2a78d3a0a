//! Data processor
//!
//! Derives values from a `DataService`.

use std::sync::Arc;

use crate::domain::ports::DataService;
use crate::error::DomainError;

pub struct DataProcessor<DS>
where
    DS: DataService + ?Sized,
{
    data_service: Arc<DS>,
}

impl<DS> DataProcessor<DS>
where
    DS: DataService + ?Sized,
{
    pub fn new(data_service: Arc<DS>) -> Self {
        Self { data_service }
    }

    /// Twice the service's current value
    ///
    /// Fails with `DomainError::Internal` when the result does not fit an `i32`.
    pub fn process(&self) -> Result<i32, DomainError> {
        let value = self.data_service.retrieve_data();
        value.checked_mul(2).ok_or_else(|| {
            DomainError::Internal(format!("processing {} overflows i32", value))
        })
    }

    pub fn report_sum(&self, a: f64, b: f64) {
        self.data_service.print_sum(a, b);
    }
}
