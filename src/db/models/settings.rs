//! Restaurant Settings Model (Singleton)
//!
//! At most one document exists, stored under the fixed record id
//! `restaurant_settings:main`.

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::serde_thing;

/// UI theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

/// Restaurant settings singleton. Every field has a default so a partial
/// PUT payload deserializes into a complete document (whole-document
/// replace semantics, no field merge).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantSettings {
    #[serde(skip_serializing_if = "Option::is_none", with = "serde_thing::option")]
    pub id: Option<Thing>,
    pub restaurant_name: String,
    pub logo_url: Option<String>,
    pub primary_color: String,
    pub languages: Vec<String>,
    pub default_language: String,
    pub theme: Theme,
    pub currency: String,
    pub address: Option<String>,
    pub contact_email: Option<String>,
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        Self {
            id: None,
            restaurant_name: "Your Restaurant".to_string(),
            logo_url: None,
            primary_color: "#4f46e5".to_string(),
            languages: vec!["en".to_string(), "ar".to_string()],
            default_language: "en".to_string(),
            theme: Theme::Light,
            currency: "USD".to_string(),
            address: None,
            contact_email: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payload_fills_defaults() {
        let settings: RestaurantSettings =
            serde_json::from_str(r#"{"restaurant_name": "Casa Mia"}"#).unwrap();
        assert_eq!(settings.restaurant_name, "Casa Mia");
        assert_eq!(settings.primary_color, "#4f46e5");
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.languages, vec!["en", "ar"]);
    }

    #[test]
    fn theme_is_lowercase_on_the_wire() {
        let json = serde_json::to_value(Theme::System).unwrap();
        assert_eq!(json, "system");
    }
}
