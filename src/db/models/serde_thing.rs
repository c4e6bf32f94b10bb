//! Serde support for SurrealDB record ids.
//!
//! 序列化时把 `Thing` 输出为 `"table:key"` 字符串，
//! 保证对外文档携带字符串 `id` 字段；
//! 反序列化兼容字符串格式和 SurrealDB 原生格式。

use std::fmt;

use serde::{Deserialize, Deserializer, Serializer, de};
use surrealdb::sql::Thing;

fn thing_from_str(s: &str) -> Thing {
    match s.split_once(':') {
        Some((tb, key)) => Thing::from((tb.to_string(), key.to_string())),
        None => Thing::from((String::new(), s.to_string())),
    }
}

struct ThingVisitor;

impl<'de> de::Visitor<'de> for ThingVisitor {
    type Value = Thing;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a record id string like 'table:key' or a native Thing")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(thing_from_str(v))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(thing_from_str(&v))
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        Thing::deserialize(de::value::MapAccessDeserializer::new(map))
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Thing::deserialize(deserializer)
    }
}

/// Serde adapter for `Option<Thing>` id fields.
pub mod option {
    use super::*;

    pub fn serialize<S>(value: &Option<Thing>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(thing) => serializer.serialize_str(&thing.to_string()),
            None => serializer.serialize_none(),
        }
    }

    struct OptionThingVisitor;

    impl<'de> de::Visitor<'de> for OptionThingVisitor {
        type Value = Option<Thing>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("null or a record id")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(ThingVisitor).map(Some)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Thing>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OptionThingVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Doc {
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "super::option"
        )]
        id: Option<Thing>,
        name: String,
    }

    #[test]
    fn id_serializes_as_table_key_string() {
        let doc = Doc {
            id: Some(Thing::from(("menu_item", "abc123"))),
            name: "Latte".into(),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["id"], "menu_item:abc123");
    }

    #[test]
    fn missing_id_is_skipped() {
        let doc = Doc {
            id: None,
            name: "Latte".into(),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn id_roundtrips_from_string_form() {
        let doc: Doc =
            serde_json::from_str(r#"{"id": "menu_item:abc123", "name": "Latte"}"#).unwrap();
        let id = doc.id.unwrap();
        assert_eq!(id.tb, "menu_item");
        assert_eq!(id.id.to_string(), "abc123");
    }
}
