//! Book domain entity

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publisher: String,
    /// Publication month as printed, e.g. "May 2020"
    pub date_created: String,
    /// ISBN, or the retailer identifier for titles without one
    pub isbn: String,
    pub description: String,
}
