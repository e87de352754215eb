//! User preference methods under their older names.
//!
//! Deprecated: every method forwards to the matching [`Users`] method and
//! new code should call that directly. Behaviour is identical.

use super::users::Users;
use crate::client::KnockClient;
use crate::error::Result;
use crate::types::{PreferenceSet, PreferenceSetOptions, WorkflowPreference};

#[derive(Debug, Clone, Copy)]
pub struct Preferences<'a> {
    users: Users<'a>,
}

impl<'a> Preferences<'a> {
    pub(crate) fn new(client: &'a KnockClient) -> Self {
        Self {
            users: Users::new(client),
        }
    }

    pub fn get_all(&self, user_id: &str) -> Result<Vec<PreferenceSet>> {
        self.users.get_all_preferences(user_id)
    }

    pub fn get(&self, user_id: &str, set_id: Option<&str>) -> Result<PreferenceSet> {
        self.users.get_preferences(user_id, set_id)
    }

    pub fn set(
        &self,
        user_id: &str,
        preferences: &PreferenceSetOptions,
        set_id: Option<&str>,
    ) -> Result<PreferenceSet> {
        self.users.set_preferences(user_id, preferences, set_id)
    }

    pub fn set_channel_type(
        &self,
        user_id: &str,
        channel_type: &str,
        subscribed: bool,
        set_id: Option<&str>,
    ) -> Result<PreferenceSet> {
        self.users
            .set_channel_type_preferences(user_id, channel_type, subscribed, set_id)
    }

    pub fn set_workflow(
        &self,
        user_id: &str,
        workflow: &str,
        preference: impl Into<WorkflowPreference>,
        set_id: Option<&str>,
    ) -> Result<PreferenceSet> {
        self.users
            .set_workflow_preferences(user_id, workflow, preference, set_id)
    }
}
