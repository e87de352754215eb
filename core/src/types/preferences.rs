use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::Properties;

/// Preference set used whenever a caller does not name one.
pub const DEFAULT_PREFERENCE_SET_ID: &str = "default";

/// Resolve an optional preference-set id to the one used on the wire.
pub fn preference_set_id(id: Option<&str>) -> &str {
    id.unwrap_or(DEFAULT_PREFERENCE_SET_ID)
}

/// A named bundle of workflow, category and channel-type subscription settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSet {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflows: Option<Properties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_types: Option<Properties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Properties>,
}

/// Body for replacing a preference set. `id` is only read by bulk operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreferenceSetOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflows: Option<Properties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_types: Option<Properties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Properties>,
}

/// Setting for one workflow in a preference set: either a blanket
/// subscription flag or per-channel-type flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WorkflowPreference {
    Subscribed { subscribed: bool },
    ChannelTypes(BTreeMap<String, bool>),
}

impl WorkflowPreference {
    pub fn subscribed(subscribed: bool) -> Self {
        WorkflowPreference::Subscribed { subscribed }
    }

    pub fn channel_types<K, I>(channel_types: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, bool)>,
    {
        WorkflowPreference::ChannelTypes(
            channel_types
                .into_iter()
                .map(|(channel_type, enabled)| (channel_type.into(), enabled))
                .collect(),
        )
    }
}

impl From<bool> for WorkflowPreference {
    fn from(subscribed: bool) -> Self {
        WorkflowPreference::subscribed(subscribed)
    }
}

impl From<BTreeMap<String, bool>> for WorkflowPreference {
    fn from(channel_types: BTreeMap<String, bool>) -> Self {
        WorkflowPreference::ChannelTypes(channel_types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_set_id_falls_back_to_default() {
        assert_eq!(preference_set_id(None), "default");
        assert_eq!(preference_set_id(Some("tenant-a")), "tenant-a");
    }

    #[test]
    fn workflow_preference_bodies() {
        assert_eq!(
            serde_json::to_value(WorkflowPreference::from(true)).unwrap(),
            json!({"subscribed": true})
        );
        assert_eq!(
            serde_json::to_value(WorkflowPreference::channel_types([("email", true), ("sms", false)]))
                .unwrap(),
            json!({"email": true, "sms": false})
        );
    }

    #[test]
    fn preference_set_tolerates_null_sections() {
        let set: PreferenceSet = serde_json::from_value(json!({
            "id": "default",
            "workflows": {"welcome": true},
            "channel_types": null
        }))
        .unwrap();
        assert_eq!(set.id, "default");
        assert_eq!(set.workflows.unwrap()["welcome"], true);
        assert!(set.channel_types.is_none());
        assert!(set.categories.is_none());
    }
}
