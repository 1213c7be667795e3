//! Item list: active items first, expired last.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub is_expired: bool,
}

impl Item {
    pub fn status(&self) -> &'static str {
        if self.is_expired {
            "Expired"
        } else {
            "Active"
        }
    }

    /// `"<name> (Active)"` or `"<name> (Expired)"`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.status())
    }
}

/// Stable partition: active items in input order, then expired items in input order.
pub fn order_items(items: Vec<Item>) -> Vec<Item> {
    let (mut active, expired): (Vec<_>, Vec<_>) =
        items.into_iter().partition(|item| !item.is_expired);
    active.extend(expired);
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, is_expired: bool) -> Item {
        Item {
            name: name.into(),
            is_expired,
        }
    }

    #[test]
    fn given_mixed_items_when_ordering_then_active_first_keeping_relative_order() {
        let ordered = order_items(vec![
            item("a", true),
            item("b", false),
            item("c", true),
            item("d", false),
        ]);
        let names: Vec<_> = ordered.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["b", "d", "a", "c"]);
    }

    #[test]
    fn given_item_when_labelling_then_includes_status() {
        assert_eq!(item("Milk", false).label(), "Milk (Active)");
        assert_eq!(item("Bread", true).label(), "Bread (Expired)");
    }

    #[test]
    fn given_json_without_expiry_flag_when_deserializing_then_defaults_to_active() {
        let items: Vec<Item> =
            serde_json::from_str(r#"[{"name":"Milk"},{"name":"Eggs","isExpired":true}]"#).unwrap();
        assert!(!items[0].is_expired);
        assert!(items[1].is_expired);
    }
}
