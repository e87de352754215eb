use super::list_request;
use crate::client::KnockClient;
use crate::error::Result;
use crate::request::KnockRequest;
use crate::types::{ListOptions, PaginatedResponse, Properties, Tenant};

/// `/tenants` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Tenants<'a> {
    client: &'a KnockClient,
}

impl<'a> Tenants<'a> {
    pub(crate) fn new(client: &'a KnockClient) -> Self {
        Self { client }
    }

    pub fn list(&self, options: Option<&ListOptions>) -> Result<PaginatedResponse<Tenant>> {
        self.client.send(&list_request("/tenants".into(), options)?)
    }

    pub fn get(&self, tenant_id: &str) -> Result<Tenant> {
        self.client
            .send(&KnockRequest::get(format!("/tenants/{tenant_id}")))
    }

    pub fn set(&self, tenant_id: &str, properties: &Properties) -> Result<Tenant> {
        let req = KnockRequest::put(format!("/tenants/{tenant_id}")).options(properties)?;
        self.client.send(&req)
    }

    pub fn delete(&self, tenant_id: &str) -> Result<()> {
        self.client
            .send_empty(&KnockRequest::delete(format!("/tenants/{tenant_id}")))
    }
}
