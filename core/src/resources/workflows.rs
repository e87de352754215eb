use serde_json::{json, Value};

use super::list_options_with;
use crate::client::KnockClient;
use crate::error::Result;
use crate::request::KnockRequest;
use crate::types::{
    CancelWorkflow, CreateSchedules, ListOptions, MethodOptions, PaginatedResponse, Schedule,
    TriggerWorkflow, TriggerWorkflowResponse, UpdateSchedules,
};

const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// Workflow runs and their schedules.
#[derive(Debug, Clone, Copy)]
pub struct Workflows<'a> {
    client: &'a KnockClient,
}

impl<'a> Workflows<'a> {
    pub(crate) fn new(client: &'a KnockClient) -> Self {
        Self { client }
    }

    /// Run workflow `key` for the given recipients.
    ///
    /// An idempotency key in `method_options` is sent as the
    /// `Idempotency-Key` header; without one the header is omitted.
    pub fn trigger(
        &self,
        key: &str,
        trigger: &TriggerWorkflow,
        method_options: Option<&MethodOptions>,
    ) -> Result<TriggerWorkflowResponse> {
        let mut req = KnockRequest::post(format!("/workflows/{key}/trigger")).options(trigger)?;
        if let Some(idempotency_key) = method_options.and_then(|o| o.idempotency_key.as_deref()) {
            req = req.header(IDEMPOTENCY_KEY_HEADER, idempotency_key);
        }
        self.client.send(&req)
    }

    pub fn cancel(&self, key: &str, cancel: &CancelWorkflow) -> Result<()> {
        let req = KnockRequest::post(format!("/workflows/{key}/cancel")).options(cancel)?;
        self.client.send_empty(&req)
    }

    /// Create one schedule per recipient for workflow `key`.
    pub fn create_schedules(
        &self,
        key: &str,
        mut schedules: CreateSchedules,
    ) -> Result<Vec<Schedule>> {
        schedules.workflow = key.to_string();
        let req = KnockRequest::post("/schedules").options(&schedules)?;
        self.client.send(&req)
    }

    pub fn update_schedules<I, S>(
        &self,
        schedule_ids: I,
        mut update: UpdateSchedules,
    ) -> Result<Vec<Schedule>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        update.schedule_ids = schedule_ids.into_iter().map(Into::into).collect();
        let req = KnockRequest::put("/schedules").options(&update)?;
        self.client.send(&req)
    }

    pub fn delete_schedules<I, S>(&self, schedule_ids: I) -> Result<Vec<Schedule>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = schedule_ids.into_iter().map(Into::into).collect();
        let req = KnockRequest::delete("/schedules").options_value(json!({ "schedule_ids": ids }));
        self.client.send(&req)
    }

    pub fn list_schedules(
        &self,
        key: &str,
        options: Option<&ListOptions>,
    ) -> Result<PaginatedResponse<Schedule>> {
        let options = list_options_with(options, "workflow", Value::from(key))?;
        self.client
            .send(&KnockRequest::get("/schedules").options_value(options))
    }
}
