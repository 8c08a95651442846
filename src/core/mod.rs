pub mod metrics;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque item identifier. Callers supply integers or strings; both print
/// verbatim in report output and are never interpreted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Number(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

/// A caller-supplied priced entity. `value` accepts any real number,
/// negatives included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub value: f64,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value,
        }
    }
}

/// Requesting principal for a report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: Role,
}

impl User {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

/// Capability tag of the requesting user. Only the exact tag `ADMIN` grants
/// admin visibility; every other tag is a standard user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Standard,
}

impl Role {
    pub fn parse(s: &str) -> Self {
        match s {
            "ADMIN" => Role::Admin,
            _ => Role::Standard,
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::parse(&s)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => "ADMIN".to_string(),
            Role::Standard => "USER".to_string(),
        }
    }
}

/// Output text convention selected by the caller. `Unknown` is a deliberate
/// variant, not an error: it renders every section as the empty string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Html,
    Unknown,
}

impl ReportFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "CSV" => ReportFormat::Csv,
            "HTML" => ReportFormat::Html,
            _ => ReportFormat::Unknown,
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Csv => "CSV",
            ReportFormat::Html => "HTML",
            ReportFormat::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// An item as retained by the access filter, annotated for rendering.
/// Always copy-constructed; the caller's items are never touched.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleItem {
    pub id: ItemId,
    pub name: String,
    pub value: f64,
    pub priority: bool,
}

impl VisibleItem {
    /// Retain an item without priority annotation (standard-user views).
    pub fn plain(item: &Item) -> Self {
        Self::marked(item, false)
    }

    /// Retain an item with an explicit priority flag (admin views).
    pub fn marked(item: &Item, priority: bool) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            value: item.value,
            priority,
        }
    }
}

/// Payload of a report request as loaded from disk: the requesting user and
/// the candidate items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub user: User,
    pub items: Vec<Item>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_is_exact_match() {
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse("admin"), Role::Standard);
        assert_eq!(Role::parse("USER"), Role::Standard);
        assert_eq!(Role::parse(""), Role::Standard);
    }

    #[test]
    fn format_parse_falls_back_to_unknown() {
        assert_eq!(ReportFormat::parse("CSV"), ReportFormat::Csv);
        assert_eq!(ReportFormat::parse("HTML"), ReportFormat::Html);
        assert_eq!(ReportFormat::parse("XML"), ReportFormat::Unknown);
        assert_eq!(ReportFormat::parse("csv"), ReportFormat::Unknown);
    }

    #[test]
    fn item_id_displays_verbatim() {
        assert_eq!(ItemId::from(42).to_string(), "42");
        assert_eq!(ItemId::from("SKU-9").to_string(), "SKU-9");
    }

    #[test]
    fn visible_item_copies_without_touching_source() {
        let item = Item::new(1, "A", 1500.0);
        let visible = VisibleItem::marked(&item, true);
        assert_eq!(visible.id, item.id);
        assert_eq!(visible.name, item.name);
        assert_eq!(visible.value, item.value);
        assert!(visible.priority);
        // source still intact
        assert_eq!(item, Item::new(1, "A", 1500.0));
    }

    #[test]
    fn request_deserializes_mixed_id_types() {
        let raw = r#"{
            "user": {"name": "Alice", "role": "ADMIN"},
            "items": [
                {"id": 1, "name": "A", "value": 1500},
                {"id": "SKU-2", "name": "B", "value": 300.5}
            ]
        }"#;
        let request: ReportRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.user.role, Role::Admin);
        assert_eq!(request.items[0].id, ItemId::Number(1));
        assert_eq!(request.items[1].id, ItemId::Text("SKU-2".to_string()));
        assert_eq!(request.items[1].value, 300.5);
    }
}
