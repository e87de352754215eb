use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkOperationStatus {
    Queued,
    Processing,
    Completed,
    Failed,
    #[serde(untagged)]
    Other(String),
}

/// Progress record for an asynchronous bulk job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOperation {
    pub id: String,
    pub name: String,
    pub status: BulkOperationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_total_rows: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_rows: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<String>,
}

impl BulkOperation {
    /// True once the job reached a terminal state.
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status,
            BulkOperationStatus::Completed | BulkOperationStatus::Failed
        )
    }
}
