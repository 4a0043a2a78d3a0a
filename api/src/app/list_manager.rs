//! List manager
//!
//! Backs the `/api/list` endpoints.

use std::sync::{PoisonError, RwLock};

use crate::domain::ports::ListManagement;

#[derive(Debug, Default)]
pub struct ListManager {
    items: RwLock<Vec<String>>,
}

impl ListManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListManagement for ListManager {
    fn create_list(&self) -> Vec<String> {
        Vec::new()
    }

    fn get_list_size(&self, list: &[String]) -> usize {
        list.len()
    }

    fn add_item(&self, item: &str) {
        tracing::debug!(item, "adding list item");
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item.to_string());
    }

    fn item_count(&self) -> usize {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
