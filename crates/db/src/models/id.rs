//! Lenient id parsing for request bodies.
//!
//! Desktop clients send `server_id` as a JSON string (`"1"`), so key fields
//! accept either an integer or a string holding one.

use realmkeep_core::types::DbId;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(DbId),
    Text(String),
}

/// `deserialize_with` target for [`DbId`] fields.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<DbId, D::Error>
where
    D: Deserializer<'de>,
{
    match IdRepr::deserialize(deserializer) {
        Ok(IdRepr::Number(id)) => Ok(id),
        Ok(IdRepr::Text(text)) => text.trim().parse().map_err(|_| {
            D::Error::custom(format!("invalid id {text:?}, expected an integer"))
        }),
        Err(_) => Err(D::Error::custom(
            "invalid id, expected an integer or a numeric string",
        )),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Key {
        #[serde(deserialize_with = "deserialize_id")]
        id: DbId,
    }

    fn parse(value: serde_json::Value) -> Result<Key, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn accepts_number_and_numeric_string() {
        assert_eq!(parse(serde_json::json!({"id": 7})).unwrap().id, 7);
        assert_eq!(parse(serde_json::json!({"id": "7"})).unwrap().id, 7);
        assert_eq!(parse(serde_json::json!({"id": " 12 "})).unwrap().id, 12);
    }

    #[test]
    fn rejects_non_numeric_values() {
        let err = parse(serde_json::json!({"id": "seven"})).unwrap_err();
        assert!(err.to_string().contains("invalid id \"seven\""));
        assert!(parse(serde_json::json!({"id": 1.5})).is_err());
        assert!(parse(serde_json::json!({"id": null})).is_err());
        assert!(parse(serde_json::json!({})).is_err());
    }
}
