use super::{filtered_list_request, list_request};
use crate::client::KnockClient;
use crate::error::Result;
use crate::request::KnockRequest;
use crate::types::{Activity, ListOptions, Message, MessageContent, MessageEvent, PaginatedResponse};

/// `/messages` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Messages<'a> {
    client: &'a KnockClient,
}

impl<'a> Messages<'a> {
    pub(crate) fn new(client: &'a KnockClient) -> Self {
        Self { client }
    }

    /// All messages in the environment. `trigger_data` filters are JSON-encoded.
    pub fn list(&self, options: Option<&ListOptions>) -> Result<PaginatedResponse<Message>> {
        self.client
            .send(&filtered_list_request("/messages".into(), options)?)
    }

    pub fn get(&self, message_id: &str) -> Result<Message> {
        self.client
            .send(&KnockRequest::get(format!("/messages/{message_id}")))
    }

    pub fn get_content(&self, message_id: &str) -> Result<MessageContent> {
        self.client
            .send(&KnockRequest::get(format!("/messages/{message_id}/content")))
    }

    pub fn get_events(
        &self,
        message_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<PaginatedResponse<MessageEvent>> {
        let req = list_request(format!("/messages/{message_id}/events"), options)?;
        self.client.send(&req)
    }

    pub fn get_activities(
        &self,
        message_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<PaginatedResponse<Activity>> {
        let req = filtered_list_request(format!("/messages/{message_id}/activities"), options)?;
        self.client.send(&req)
    }
}
