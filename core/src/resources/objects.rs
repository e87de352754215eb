use super::recipient::Recipient;
use super::{filtered_list_request, list_request};
use crate::client::KnockClient;
use crate::error::Result;
use crate::request::KnockRequest;
use crate::types::{
    AddSubscriptions, BulkAddSubscriptions, BulkDeleteObjects, BulkOperation, BulkSetObjects,
    ChannelData, DeleteSubscriptions, KnockObject, ListOptions, Message, ObjectSubscription,
    PaginatedResponse, PreferenceSet, PreferenceSetOptions, Properties, Schedule,
    WorkflowPreference,
};

/// `/objects/{collection}` endpoints.
///
/// Objects are addressed by collection and id. They can hold channel data
/// and preferences exactly like users, and recipients can subscribe to them.
#[derive(Debug, Clone, Copy)]
pub struct Objects<'a> {
    client: &'a KnockClient,
}

impl<'a> Objects<'a> {
    pub(crate) fn new(client: &'a KnockClient) -> Self {
        Self { client }
    }

    fn recipient(&self, collection: &str, object_id: &str) -> Recipient<'a> {
        Recipient::new(self.client, object_path(collection, object_id))
    }

    pub fn list(
        &self,
        collection: &str,
        options: Option<&ListOptions>,
    ) -> Result<PaginatedResponse<KnockObject>> {
        let req = list_request(format!("/objects/{collection}"), options)?;
        self.client.send(&req)
    }

    pub fn get(&self, collection: &str, object_id: &str) -> Result<KnockObject> {
        self.client
            .send(&KnockRequest::get(object_path(collection, object_id)))
    }

    pub fn set(
        &self,
        collection: &str,
        object_id: &str,
        properties: &Properties,
    ) -> Result<KnockObject> {
        let req = KnockRequest::put(object_path(collection, object_id)).options(properties)?;
        self.client.send(&req)
    }

    pub fn delete(&self, collection: &str, object_id: &str) -> Result<()> {
        self.client
            .send_empty(&KnockRequest::delete(object_path(collection, object_id)))
    }

    pub fn bulk_set(&self, collection: &str, objects: &BulkSetObjects) -> Result<BulkOperation> {
        let req = KnockRequest::post(format!("/objects/{collection}/bulk/set")).options(objects)?;
        self.client.send(&req)
    }

    pub fn bulk_delete(
        &self,
        collection: &str,
        objects: &BulkDeleteObjects,
    ) -> Result<BulkOperation> {
        let req =
            KnockRequest::post(format!("/objects/{collection}/bulk/delete")).options(objects)?;
        self.client.send(&req)
    }

    pub fn get_channel_data(
        &self,
        collection: &str,
        object_id: &str,
        channel_id: &str,
    ) -> Result<ChannelData> {
        self.recipient(collection, object_id)
            .get_channel_data(channel_id)
    }

    /// Replace the channel data stored for `channel_id`. `data` is sent
    /// as the request body unchanged, so it carries the `{"data": ...}`
    /// envelope the API expects.
    pub fn set_channel_data(
        &self,
        collection: &str,
        object_id: &str,
        channel_id: &str,
        data: &Properties,
    ) -> Result<ChannelData> {
        self.recipient(collection, object_id)
            .set_channel_data(channel_id, data)
    }

    pub fn unset_channel_data(
        &self,
        collection: &str,
        object_id: &str,
        channel_id: &str,
    ) -> Result<()> {
        self.recipient(collection, object_id)
            .unset_channel_data(channel_id)
    }

    pub fn get_all_preferences(
        &self,
        collection: &str,
        object_id: &str,
    ) -> Result<Vec<PreferenceSet>> {
        self.recipient(collection, object_id).get_all_preferences()
    }

    pub fn get_preferences(
        &self,
        collection: &str,
        object_id: &str,
        set_id: Option<&str>,
    ) -> Result<PreferenceSet> {
        self.recipient(collection, object_id).get_preferences(set_id)
    }

    pub fn set_preferences(
        &self,
        collection: &str,
        object_id: &str,
        preferences: &PreferenceSetOptions,
        set_id: Option<&str>,
    ) -> Result<PreferenceSet> {
        self.recipient(collection, object_id)
            .set_preferences(preferences, set_id)
    }

    pub fn set_channel_type_preferences(
        &self,
        collection: &str,
        object_id: &str,
        channel_type: &str,
        subscribed: bool,
        set_id: Option<&str>,
    ) -> Result<PreferenceSet> {
        self.recipient(collection, object_id)
            .set_channel_type_preferences(channel_type, subscribed, set_id)
    }

    pub fn set_workflow_preferences(
        &self,
        collection: &str,
        object_id: &str,
        workflow: &str,
        preference: impl Into<WorkflowPreference>,
        set_id: Option<&str>,
    ) -> Result<PreferenceSet> {
        self.recipient(collection, object_id)
            .set_workflow_preferences(workflow, &preference.into(), set_id)
    }

    pub fn list_subscriptions(
        &self,
        collection: &str,
        object_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<PaginatedResponse<ObjectSubscription>> {
        let req = list_request(subscriptions_path(collection, object_id), options)?;
        self.client.send(&req)
    }

    pub fn add_subscriptions(
        &self,
        collection: &str,
        object_id: &str,
        subscriptions: &AddSubscriptions,
    ) -> Result<Vec<ObjectSubscription>> {
        let req =
            KnockRequest::post(subscriptions_path(collection, object_id)).options(subscriptions)?;
        self.client.send(&req)
    }

    pub fn delete_subscriptions(
        &self,
        collection: &str,
        object_id: &str,
        subscriptions: &DeleteSubscriptions,
    ) -> Result<Vec<ObjectSubscription>> {
        let req = KnockRequest::delete(subscriptions_path(collection, object_id))
            .options(subscriptions)?;
        self.client.send(&req)
    }

    pub fn bulk_add_subscriptions(
        &self,
        collection: &str,
        subscriptions: &BulkAddSubscriptions,
    ) -> Result<BulkOperation> {
        let req = KnockRequest::post(format!("/objects/{collection}/bulk/subscriptions/add"))
            .options(subscriptions)?;
        self.client.send(&req)
    }

    /// Messages sent to the object. `trigger_data` filters are JSON-encoded.
    pub fn get_messages(
        &self,
        collection: &str,
        object_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<PaginatedResponse<Message>> {
        let path = format!("{}/messages", object_path(collection, object_id));
        self.client.send(&filtered_list_request(path, options)?)
    }

    pub fn get_schedules(
        &self,
        collection: &str,
        object_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<PaginatedResponse<Schedule>> {
        let path = format!("{}/schedules", object_path(collection, object_id));
        self.client.send(&list_request(path, options)?)
    }
}

fn object_path(collection: &str, object_id: &str) -> String {
    format!("/objects/{collection}/{object_id}")
}

fn subscriptions_path(collection: &str, object_id: &str) -> String {
    format!("/objects/{collection}/{object_id}/subscriptions")
}
