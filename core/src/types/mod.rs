//! Domain DTOs for the Knock API.
//!
//! # Design
//! Records returned by the API are read models: every optional field is
//! `Option` and skipped on re-serialization, so decoding and re-encoding a
//! record reproduces the server's JSON. Free-form `data` / `properties`
//! fields all use `Properties`. Request option structs are `Serialize`-only
//! and carry the snake_case wire names.

mod bulk_operations;
mod common;
mod messages;
mod objects;
mod preferences;
mod tenants;
mod users;
mod workflows;

pub use bulk_operations::{BulkOperation, BulkOperationStatus};
pub use common::{EntityRef, ListOptions, MethodOptions, PageInfo, PaginatedResponse, Properties};
pub use messages::{Activity, Message, MessageContent, MessageEvent};
pub use objects::{
    AddSubscriptions, BulkAddSubscriptions, BulkDeleteObjects, BulkSetObjects, BulkSubscription,
    DeleteSubscriptions, KnockObject, ObjectSubscription,
};
pub use preferences::{
    preference_set_id, PreferenceSet, PreferenceSetOptions, WorkflowPreference,
    DEFAULT_PREFERENCE_SET_ID,
};
pub use tenants::Tenant;
pub use users::{BulkDeleteUsers, BulkIdentifyUsers, BulkSetUserPreferences, ChannelData, User};
pub use workflows::{
    CancelWorkflow, CreateSchedules, RepeatFrequency, Schedule, ScheduleRepeatRule,
    TriggerWorkflow, TriggerWorkflowResponse, UpdateSchedules,
};
