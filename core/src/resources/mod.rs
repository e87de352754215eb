//! Resource facades: one borrowed view per API area.
//!
//! Each facade method picks the verb and path, shapes the options and hands
//! a `KnockRequest` to the client core. Identifiers are embedded in paths
//! verbatim.

mod bulk_operations;
mod messages;
mod objects;
mod preferences;
mod recipient;
mod tenants;
mod users;
mod workflows;

pub use bulk_operations::BulkOperations;
pub use messages::Messages;
pub use objects::Objects;
pub use preferences::Preferences;
pub use tenants::Tenants;
pub use users::Users;
pub use workflows::Workflows;

use serde_json::Value;

use crate::encoding::encode_trigger_data;
use crate::error::Result;
use crate::request::KnockRequest;
use crate::types::ListOptions;

/// GET request for a paginated list endpoint.
fn list_request(path: String, options: Option<&ListOptions>) -> Result<KnockRequest> {
    KnockRequest::get(path).options(&options)
}

/// Like [`list_request`], for endpoints that filter on `trigger_data`.
fn filtered_list_request(path: String, options: Option<&ListOptions>) -> Result<KnockRequest> {
    let mut value = serde_json::to_value(options)?;
    encode_trigger_data(&mut value);
    Ok(KnockRequest::get(path).options_value(value))
}

/// Serialized list options with one extra key set, used where the path alone
/// does not identify the collection being listed.
fn list_options_with(options: Option<&ListOptions>, key: &str, value: Value) -> Result<Value> {
    let mut options = options.cloned().unwrap_or_default();
    options.filters.insert(key.to_string(), value);
    Ok(serde_json::to_value(options)?)
}
