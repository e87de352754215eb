use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{EntityRef, Properties};

/// Body for `POST /workflows/{key}/trigger`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TriggerWorkflow {
    pub recipients: Vec<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Properties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<EntityRef>,
    /// Key later passed to `cancel` to stop this run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerWorkflowResponse {
    pub workflow_run_id: String,
}

/// Body for `POST /workflows/{key}/cancel`. Without `recipients` every run
/// sharing the cancellation key is cancelled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CancelWorkflow {
    pub cancellation_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients: Option<Vec<EntityRef>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatFrequency {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    #[serde(untagged)]
    Other(String),
}

/// One repetition rule of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRepeatRule {
    pub frequency: RepeatFrequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
}

impl ScheduleRepeatRule {
    pub fn new(frequency: RepeatFrequency) -> Self {
        Self {
            frequency,
            interval: None,
            days: None,
            day_of_month: None,
            hours: None,
            minutes: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    #[serde(rename = "__cursor", default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    pub workflow: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Value>,
    #[serde(default)]
    pub repeats: Vec<ScheduleRepeatRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_occurrence_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_occurrence_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inserted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Properties>,
}

/// Body for `POST /schedules`. `workflow` is filled in from the workflow key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateSchedules {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub workflow: String,
    pub recipients: Vec<EntityRef>,
    pub repeats: Vec<ScheduleRepeatRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Properties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
}

/// Body for `PUT /schedules`. `schedule_ids` is filled in by the facade.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateSchedules {
    pub schedule_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeats: Option<Vec<ScheduleRepeatRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Properties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
}
