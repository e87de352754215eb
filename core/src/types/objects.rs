use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{null_as_empty, EntityRef, Properties};

/// An object in a collection (projects, teams, Slack channels, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnockObject {
    pub id: String,
    pub collection: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Properties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A recipient subscribed to an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectSubscription {
    pub object: KnockObject,
    pub recipient: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inserted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BulkSetObjects {
    /// Each entry must carry an `id`; remaining keys become object properties.
    pub objects: Vec<Properties>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkDeleteObjects {
    pub object_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddSubscriptions {
    pub recipients: Vec<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteSubscriptions {
    pub recipients: Vec<EntityRef>,
}

/// Subscriptions to add for one object in a bulk request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BulkSubscription {
    /// Object id within the collection.
    pub id: String,
    pub recipients: Vec<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BulkAddSubscriptions {
    pub subscriptions: Vec<BulkSubscription>,
}
