//! Composite column types stored on a character: item stacks and equipment.

use realmkeep_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One inventory slot, stored as the `item_stack_type` composite.
///
/// The derive also provides the `_item_stack_type` array mapping used by the
/// `inventory` and `vault` columns.
///
/// Accepts either `{"item_id": 7, "quantity": 3}` or the tuple form `[7, 3]`
/// on input; always serializes as an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow, sqlx::Type)]
#[serde(from = "ItemStackRepr")]
#[sqlx(type_name = "item_stack_type")]
pub struct ItemStack {
    pub item_id: DbId,
    pub quantity: i32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ItemStackRepr {
    Object { item_id: DbId, quantity: i32 },
    Pair(DbId, i32),
}

impl From<ItemStackRepr> for ItemStack {
    fn from(repr: ItemStackRepr) -> Self {
        let (item_id, quantity) = match repr {
            ItemStackRepr::Object { item_id, quantity } => (item_id, quantity),
            ItemStackRepr::Pair(item_id, quantity) => (item_id, quantity),
        };
        ItemStack { item_id, quantity }
    }
}

/// Eight nullable item references, stored as the `equipment_type` composite.
///
/// `Default` is the all-empty loadout every new character starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "equipment_type")]
pub struct Equipment {
    pub head: Option<DbId>,
    pub chest: Option<DbId>,
    pub legs: Option<DbId>,
    pub feet: Option<DbId>,
    pub hands: Option<DbId>,
    pub main_hand: Option<DbId>,
    pub off_hand: Option<DbId>,
    pub accessory: Option<DbId>,
}

/// Body of `POST /inventory/all`. Replaces the whole inventory array.
#[derive(Debug, Clone, Deserialize)]
pub struct SetInventory {
    #[serde(deserialize_with = "crate::models::id::deserialize_id")]
    pub server_id: DbId,
    pub name: String,
    pub inventory: Vec<ItemStack>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_has_derived_array_mapping() {
        fn has_array_type<T: sqlx::postgres::PgHasArrayType>() {}
        has_array_type::<ItemStack>();
        has_array_type::<Equipment>();
    }

    #[test]
    fn stack_parses_object_form() {
        let stack: ItemStack =
            serde_json::from_value(serde_json::json!({"item_id": 7, "quantity": 3})).unwrap();
        assert_eq!(stack, ItemStack { item_id: 7, quantity: 3 });
    }

    #[test]
    fn stack_parses_tuple_form() {
        let stack: ItemStack = serde_json::from_value(serde_json::json!([12, 1])).unwrap();
        assert_eq!(stack, ItemStack { item_id: 12, quantity: 1 });
    }

    #[test]
    fn stack_rejects_incomplete_input() {
        assert!(serde_json::from_value::<ItemStack>(serde_json::json!([12])).is_err());
        assert!(serde_json::from_value::<ItemStack>(serde_json::json!({"item_id": 1})).is_err());
        assert!(serde_json::from_value::<ItemStack>(serde_json::json!("1,2")).is_err());
    }

    #[test]
    fn stack_serializes_as_object() {
        let json = serde_json::to_value(ItemStack { item_id: 4, quantity: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({"item_id": 4, "quantity": 2}));
    }

    #[test]
    fn set_inventory_accepts_mixed_stack_forms() {
        let body: SetInventory = serde_json::from_value(serde_json::json!({
            "server_id": 1,
            "name": "Aria",
            "inventory": [[1, 1], {"item_id": 2, "quantity": 5}],
        }))
        .unwrap();
        assert_eq!(
            body.inventory,
            vec![
                ItemStack { item_id: 1, quantity: 1 },
                ItemStack { item_id: 2, quantity: 5 },
            ]
        );
    }

    #[test]
    fn default_equipment_has_eight_empty_slots() {
        let json = serde_json::to_value(Equipment::default()).unwrap();
        let slots = json.as_object().unwrap();
        assert_eq!(slots.len(), 8);
        assert!(slots.values().all(serde_json::Value::is_null));
    }
}
