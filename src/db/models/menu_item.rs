//! Menu Item Model

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::serde_thing;

/// Menu category. The set is fixed; anything else fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Drinks,
    Desserts,
    Meals,
}

/// Menu item document (collection `menu_item`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_thing::option"
    )]
    pub id: Option<Thing>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category: Category,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

/// Create / full-replace payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category: Category,
    #[serde(default)]
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
}

impl From<MenuItemCreate> for MenuItem {
    fn from(data: MenuItemCreate) -> Self {
        Self {
            id: None,
            title: data.title,
            description: data.description,
            price: data.price,
            category: data.category,
            image_url: data.image_url,
            is_available: data.is_available.unwrap_or(true),
        }
    }
}
