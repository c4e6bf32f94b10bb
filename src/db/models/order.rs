//! Order Model
//!
//! Orders embed their item list at creation time; items are informational
//! snapshots and are never cross-checked against the menu collection.

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::serde_thing;

/// Order lifecycle status. Set directly by admin action, no transition
/// validation (any status may replace any other).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Ready,
    Completed,
    Canceled,
}

/// Payment status. Never touched by the status update endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
    Refunded,
}

/// Line item embedded in an order. `item_id` is an informational reference
/// to a menu item; existence is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub item_id: String,
    pub title: String,
    pub quantity: i64,
    pub unit_price: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Order document (collection `orders`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_thing::option"
    )]
    pub id: Option<Thing>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub table_number: Option<String>,
    pub items: Vec<OrderItem>,
    /// Declared total. Deliberately NOT validated against the item sum.
    pub total_amount: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    /// Unix millis, assigned server-side on insert. Listings sort on this.
    #[serde(default)]
    pub created_at: i64,
}

/// Create payload. `created_at` is ignored if supplied; the server stamps it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub table_number: Option<String>,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
}
