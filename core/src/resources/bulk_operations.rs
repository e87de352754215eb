use crate::client::KnockClient;
use crate::error::Result;
use crate::request::KnockRequest;
use crate::types::BulkOperation;

/// Status of asynchronous bulk jobs started by the `bulk_*` methods.
#[derive(Debug, Clone, Copy)]
pub struct BulkOperations<'a> {
    client: &'a KnockClient,
}

impl<'a> BulkOperations<'a> {
    pub(crate) fn new(client: &'a KnockClient) -> Self {
        Self { client }
    }

    pub fn get(&self, operation_id: &str) -> Result<BulkOperation> {
        self.client
            .send(&KnockRequest::get(format!("/bulk_operations/{operation_id}")))
    }
}
