//! Review Model

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::serde_thing;

/// Review document (collection `review`). Reviews are write-once: never
/// updated or deleted, and `order_id` linkage is not validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_thing::option"
    )]
    pub id: Option<Thing>,
    pub rating: i64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    /// Unix millis, assigned server-side on insert.
    #[serde(default)]
    pub created_at: i64,
}

/// Create payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCreate {
    pub rating: i64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
}
