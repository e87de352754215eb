//! Channel data and preference endpoints shared by users and objects.
//!
//! Both recipient kinds expose the same sub-resources under their own base
//! path (`/users/{id}` or `/objects/{collection}/{id}`).

use serde_json::json;

use crate::client::KnockClient;
use crate::error::Result;
use crate::request::KnockRequest;
use crate::types::{
    preference_set_id, ChannelData, PreferenceSet, PreferenceSetOptions, Properties,
    WorkflowPreference,
};

pub(crate) struct Recipient<'a> {
    client: &'a KnockClient,
    base: String,
}

impl<'a> Recipient<'a> {
    pub(crate) fn new(client: &'a KnockClient, base: String) -> Self {
        Self { client, base }
    }

    fn channel_data_path(&self, channel_id: &str) -> String {
        format!("{}/channel_data/{}", self.base, channel_id)
    }

    fn preferences_path(&self, set_id: Option<&str>) -> String {
        format!("{}/preferences/{}", self.base, preference_set_id(set_id))
    }

    pub(crate) fn get_channel_data(&self, channel_id: &str) -> Result<ChannelData> {
        self.client
            .send(&KnockRequest::get(self.channel_data_path(channel_id)))
    }

    pub(crate) fn set_channel_data(&self, channel_id: &str, data: &Properties) -> Result<ChannelData> {
        let req = KnockRequest::put(self.channel_data_path(channel_id)).options(data)?;
        self.client.send(&req)
    }

    pub(crate) fn unset_channel_data(&self, channel_id: &str) -> Result<()> {
        self.client
            .send_empty(&KnockRequest::delete(self.channel_data_path(channel_id)))
    }

    pub(crate) fn get_all_preferences(&self) -> Result<Vec<PreferenceSet>> {
        self.client
            .send(&KnockRequest::get(format!("{}/preferences", self.base)))
    }

    pub(crate) fn get_preferences(&self, set_id: Option<&str>) -> Result<PreferenceSet> {
        self.client
            .send(&KnockRequest::get(self.preferences_path(set_id)))
    }

    pub(crate) fn set_preferences(
        &self,
        preferences: &PreferenceSetOptions,
        set_id: Option<&str>,
    ) -> Result<PreferenceSet> {
        let req = KnockRequest::put(self.preferences_path(set_id)).options(preferences)?;
        self.client.send(&req)
    }

    pub(crate) fn set_channel_type_preferences(
        &self,
        channel_type: &str,
        subscribed: bool,
        set_id: Option<&str>,
    ) -> Result<PreferenceSet> {
        let path = format!("{}/channel_types/{}", self.preferences_path(set_id), channel_type);
        let req = KnockRequest::put(path).options_value(json!({ "subscribed": subscribed }));
        self.client.send(&req)
    }

    pub(crate) fn set_workflow_preferences(
        &self,
        workflow: &str,
        preference: &WorkflowPreference,
        set_id: Option<&str>,
    ) -> Result<PreferenceSet> {
        let path = format!("{}/workflows/{}", self.preferences_path(set_id), workflow);
        let req = KnockRequest::put(path).options(preference)?;
        self.client.send(&req)
    }
}
