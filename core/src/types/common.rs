//! Shapes shared by every resource: free-form data, polymorphic references,
//! pagination and per-call options.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Free-form `data` / `properties` payload: a string-keyed map of arbitrary JSON.
pub type Properties = serde_json::Map<String, Value>;

/// Read a `Properties` field that the server may send as `null`.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<Properties, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Properties>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reference to a recipient, actor or tenant in request options.
///
/// The server accepts a bare identifier, a `{collection, id}` object
/// reference, or an inline property map that upserts the entity before use.
/// The client forwards whichever form it is given.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntityRef {
    Id(String),
    Object { collection: String, id: String },
    Inline(Properties),
}

impl EntityRef {
    pub fn object(collection: impl Into<String>, id: impl Into<String>) -> Self {
        EntityRef::Object {
            collection: collection.into(),
            id: id.into(),
        }
    }
}

impl From<&str> for EntityRef {
    fn from(id: &str) -> Self {
        EntityRef::Id(id.to_string())
    }
}

impl From<String> for EntityRef {
    fn from(id: String) -> Self {
        EntityRef::Id(id)
    }
}

impl From<Properties> for EntityRef {
    fn from(properties: Properties) -> Self {
        EntityRef::Inline(properties)
    }
}

/// Cursor block returned with every paginated list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

/// One page of a list endpoint.
///
/// Depending on the endpoint, results arrive under `items`, `entries` or
/// both; `results` picks whichever is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub page_info: PageInfo,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub fn results(&self) -> &[T] {
        if self.items.is_empty() {
            &self.entries
        } else {
            &self.items
        }
    }

    pub fn into_results(self) -> Vec<T> {
        if self.items.is_empty() {
            self.entries
        } else {
            self.items
        }
    }

    /// Cursor to pass as `ListOptions::after` for the next page, if any.
    pub fn next_cursor(&self) -> Option<&str> {
        self.page_info.after.as_deref()
    }
}

/// Pagination and filtering for list endpoints.
///
/// `filters` carries endpoint-specific keys (`status`, `channel_id`, ...)
/// and is flattened into the query string next to the cursor fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_data: Option<Properties>,
    #[serde(flatten)]
    pub filters: Properties,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    pub fn trigger_data(mut self, data: Properties) -> Self {
        self.trigger_data = Some(data);
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }
}

/// Per-call options understood by mutating endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodOptions {
    /// Sent as the `Idempotency-Key` header so the server can deduplicate retries.
    pub idempotency_key: Option<String>,
}

impl MethodOptions {
    pub fn with_idempotency_key(key: impl Into<String>) -> Self {
        Self {
            idempotency_key: Some(key.into()),
        }
    }

    pub fn with_generated_idempotency_key() -> Self {
        Self::with_idempotency_key(uuid::Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entity_ref_variants_serialize_to_wire_shapes() {
        assert_eq!(serde_json::to_value(EntityRef::from("user_1")).unwrap(), json!("user_1"));
        assert_eq!(
            serde_json::to_value(EntityRef::object("projects", "p1")).unwrap(),
            json!({"collection": "projects", "id": "p1"})
        );
        let inline = json!({"id": "user_2", "email": "u2@knock.app"})
            .as_object()
            .cloned()
            .unwrap();
        assert_eq!(
            serde_json::to_value(EntityRef::from(inline)).unwrap(),
            json!({"id": "user_2", "email": "u2@knock.app"})
        );
    }

    #[test]
    fn paginated_response_prefers_items_then_entries() {
        let items: PaginatedResponse<String> =
            serde_json::from_value(json!({"page_info": {"page_size": 2}, "items": ["a"]})).unwrap();
        assert_eq!(items.results(), ["a".to_string()]);

        let entries: PaginatedResponse<String> = serde_json::from_value(json!({
            "page_info": {"page_size": 2, "after": "c2"},
            "entries": ["b", "c"]
        }))
        .unwrap();
        assert_eq!(entries.results().len(), 2);
        assert_eq!(entries.next_cursor(), Some("c2"));
        assert_eq!(entries.into_results(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn paginated_response_tolerates_missing_fields() {
        let page: PaginatedResponse<String> = serde_json::from_value(json!({})).unwrap();
        assert!(page.results().is_empty());
        assert_eq!(page.page_info, PageInfo::default());
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Record {
        id: String,
    }

    #[test]
    fn paginated_response_decodes_records_without_default() {
        let page: PaginatedResponse<Record> = serde_json::from_value(json!({
            "page_info": {"page_size": 1},
            "entries": [{"id": "r1"}]
        }))
        .unwrap();
        assert_eq!(page.into_results(), vec![Record { id: "r1".into() }]);
    }

    #[test]
    fn list_options_flatten_filters() {
        let options = ListOptions::new()
            .page_size(10)
            .after("cursor")
            .filter("status", json!(["sent"]));
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"page_size": 10, "after": "cursor", "status": ["sent"]})
        );
    }

    #[test]
    fn generated_idempotency_keys_are_unique() {
        let a = MethodOptions::with_generated_idempotency_key();
        let b = MethodOptions::with_generated_idempotency_key();
        assert!(a.idempotency_key.is_some());
        assert_ne!(a, b);
    }
}
