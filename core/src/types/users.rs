use serde::{Deserialize, Serialize};

use super::common::{null_as_empty, Properties};
use super::preferences::PreferenceSetOptions;

/// A Knock user. Fields beyond the well-known ones are custom properties set
/// through `identify` and are kept in `properties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub properties: Properties,
}

/// Provider-specific data (push tokens, Slack connections, ...) stored for a
/// user or object on one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelData {
    pub channel_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Properties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BulkIdentifyUsers {
    /// Each entry must carry an `id`; remaining keys become user properties.
    pub users: Vec<Properties>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkDeleteUsers {
    pub user_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BulkSetUserPreferences {
    pub user_ids: Vec<String>,
    pub preferences: PreferenceSetOptions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_keeps_custom_properties() {
        let raw = json!({
            "id": "chris",
            "email": "chris@knock.app",
            "name": "Chris Bell",
            "plan": "enterprise",
            "seats": 12
        });
        let user: User = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(user.id, "chris");
        assert_eq!(user.email.as_deref(), Some("chris@knock.app"));
        assert_eq!(user.properties["plan"], "enterprise");
        assert_eq!(user.properties["seats"], 12);
        assert!(!user.properties.contains_key("email"));
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn channel_data_defaults_missing_data() {
        let channel: ChannelData =
            serde_json::from_value(json!({"channel_id": "apns"})).unwrap();
        assert!(channel.data.is_empty());

        let channel: ChannelData =
            serde_json::from_value(json!({"channel_id": "apns", "data": null})).unwrap();
        assert!(channel.data.is_empty());
    }

    #[test]
    fn channel_data_round_trips() {
        let raw = json!({"channel_id": "apns", "data": {"tokens": ["t1", "t2"]}});
        let channel: ChannelData = serde_json::from_value(raw.clone()).unwrap();
        let encoded = serde_json::to_value(&channel).unwrap();
        assert_eq!(encoded, raw);
        assert_eq!(serde_json::from_value::<ChannelData>(encoded).unwrap(), channel);
    }
}
