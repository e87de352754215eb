use serde_json::json;

use super::recipient::Recipient;
use super::{filtered_list_request, list_request};
use crate::client::KnockClient;
use crate::error::Result;
use crate::request::KnockRequest;
use crate::types::{
    preference_set_id, BulkDeleteUsers, BulkIdentifyUsers, BulkOperation,
    BulkSetUserPreferences, ChannelData, ListOptions, Message, PaginatedResponse, PreferenceSet,
    PreferenceSetOptions, Properties, Schedule, User, WorkflowPreference,
};

/// `/users` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a KnockClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a KnockClient) -> Self {
        Self { client }
    }

    fn recipient(&self, user_id: &str) -> Recipient<'a> {
        Recipient::new(self.client, format!("/users/{user_id}"))
    }

    pub fn get(&self, user_id: &str) -> Result<User> {
        self.client
            .send(&KnockRequest::get(format!("/users/{user_id}")))
    }

    pub fn list(&self, options: Option<&ListOptions>) -> Result<PaginatedResponse<User>> {
        self.client.send(&list_request("/users".into(), options)?)
    }

    /// Create or update a user. Keys in `properties` not sent are left unchanged.
    pub fn identify(&self, user_id: &str, properties: &Properties) -> Result<User> {
        let req = KnockRequest::put(format!("/users/{user_id}")).options(properties)?;
        self.client.send(&req)
    }

    pub fn delete(&self, user_id: &str) -> Result<()> {
        self.client
            .send_empty(&KnockRequest::delete(format!("/users/{user_id}")))
    }

    /// Merge `from_user_id` into `user_id`; the source user is removed.
    pub fn merge(&self, user_id: &str, from_user_id: &str) -> Result<User> {
        let req = KnockRequest::post(format!("/users/{user_id}/merge"))
            .options_value(json!({ "from_user_id": from_user_id }));
        self.client.send(&req)
    }

    pub fn bulk_identify(&self, users: &BulkIdentifyUsers) -> Result<BulkOperation> {
        let req = KnockRequest::post("/users/bulk/identify").options(users)?;
        self.client.send(&req)
    }

    pub fn bulk_delete(&self, users: &BulkDeleteUsers) -> Result<BulkOperation> {
        let req = KnockRequest::post("/users/bulk/delete").options(users)?;
        self.client.send(&req)
    }

    /// Replace a preference set for many users at once.
    ///
    /// The nested preference-set id is taken from `set_id` (or the default
    /// set) only when `options.preferences.id` is unset.
    pub fn bulk_set_preferences(
        &self,
        mut options: BulkSetUserPreferences,
        set_id: Option<&str>,
    ) -> Result<BulkOperation> {
        if options.preferences.id.is_none() {
            options.preferences.id = Some(preference_set_id(set_id).to_string());
        }
        let req = KnockRequest::post("/users/bulk/preferences").options(&options)?;
        self.client.send(&req)
    }

    pub fn get_channel_data(&self, user_id: &str, channel_id: &str) -> Result<ChannelData> {
        self.recipient(user_id).get_channel_data(channel_id)
    }

    /// Replace the channel data stored for `channel_id`. `data` is sent
    /// as the request body unchanged, so it carries the `{"data": ...}`
    /// envelope the API expects.
    pub fn set_channel_data(
        &self,
        user_id: &str,
        channel_id: &str,
        data: &Properties,
    ) -> Result<ChannelData> {
        self.recipient(user_id).set_channel_data(channel_id, data)
    }

    pub fn unset_channel_data(&self, user_id: &str, channel_id: &str) -> Result<()> {
        self.recipient(user_id).unset_channel_data(channel_id)
    }

    pub fn get_all_preferences(&self, user_id: &str) -> Result<Vec<PreferenceSet>> {
        self.recipient(user_id).get_all_preferences()
    }

    pub fn get_preferences(&self, user_id: &str, set_id: Option<&str>) -> Result<PreferenceSet> {
        self.recipient(user_id).get_preferences(set_id)
    }

    pub fn set_preferences(
        &self,
        user_id: &str,
        preferences: &PreferenceSetOptions,
        set_id: Option<&str>,
    ) -> Result<PreferenceSet> {
        self.recipient(user_id).set_preferences(preferences, set_id)
    }

    pub fn set_channel_type_preferences(
        &self,
        user_id: &str,
        channel_type: &str,
        subscribed: bool,
        set_id: Option<&str>,
    ) -> Result<PreferenceSet> {
        self.recipient(user_id)
            .set_channel_type_preferences(channel_type, subscribed, set_id)
    }

    /// Set one workflow's preference, either as a plain `bool` subscription
    /// or as per-channel-type flags. Both forms hit the same endpoint.
    pub fn set_workflow_preferences(
        &self,
        user_id: &str,
        workflow: &str,
        preference: impl Into<WorkflowPreference>,
        set_id: Option<&str>,
    ) -> Result<PreferenceSet> {
        self.recipient(user_id)
            .set_workflow_preferences(workflow, &preference.into(), set_id)
    }

    /// Messages sent to the user. `trigger_data` filters are JSON-encoded.
    pub fn get_messages(
        &self,
        user_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<PaginatedResponse<Message>> {
        let req = filtered_list_request(format!("/users/{user_id}/messages"), options)?;
        self.client.send(&req)
    }

    pub fn get_schedules(
        &self,
        user_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<PaginatedResponse<Schedule>> {
        let req = list_request(format!("/users/{user_id}/schedules"), options)?;
        self.client.send(&req)
    }
}
