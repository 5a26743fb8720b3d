//! Role management shared by clients, channels, groups and domains.
//!
//! Every role endpoint lives under `{prefix}/{entity_id}/roles`, where the
//! prefix is `{domain_id}/clients`, `{domain_id}/channels`,
//! `{domain_id}/groups` or `domains`. A [`Roles`] value is scoped to one
//! prefix; the owning resource client hands it out through `roles(...)`.

use crate::client::{Auth, Transport};
use crate::encoding::endpoint;
use crate::error::Result;
use magistrala_core::{
    BasicPageMeta, MemberRolesPage, MembersPage, MembersRolePageQuery, Response, Role, RolePage,
    RoleProvision,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
struct AvailableActions {
    #[serde(default)]
    available_actions: Vec<String>,
}

#[derive(Deserialize)]
struct Actions {
    #[serde(default)]
    actions: Vec<String>,
}

#[derive(Deserialize)]
struct Members {
    #[serde(default)]
    members: Vec<String>,
}

/// Role operations under one entity path prefix.
#[derive(Debug, Clone)]
pub struct Roles {
    transport: Transport,
    base_url: String,
    prefix: Vec<String>,
}

impl Roles {
    /// Scope role operations to `base_url/{prefix...}`.
    #[must_use]
    pub fn new(transport: Transport, base_url: impl Into<String>, prefix: &[&str]) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            prefix: prefix.iter().map(ToString::to_string).collect(),
        }
    }

    fn url(&self, tail: &[&str]) -> String {
        let mut segments: Vec<&str> = self.prefix.iter().map(String::as_str).collect();
        segments.extend_from_slice(tail);
        endpoint(&self.base_url, &segments)
    }

    /// Actions that can be granted on this kind of entity.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn available_actions(&self, token: &str) -> Result<Vec<String>> {
        let url = self.url(&["roles", "available-actions"]);
        let res: AvailableActions = self.transport.get(url, Auth::Bearer(token)).send().await?;
        Ok(res.available_actions)
    }

    /// Create a role on an entity.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn create(
        &self,
        entity_id: &str,
        role: &RoleProvision,
        token: &str,
    ) -> Result<Role> {
        let url = self.url(&[entity_id, "roles"]);
        self.transport
            .post(url, Auth::Bearer(token))
            .json(role)
            .send()
            .await
    }

    /// List the roles of an entity.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn list(
        &self,
        entity_id: &str,
        pm: &BasicPageMeta,
        token: &str,
    ) -> Result<RolePage> {
        let url = self.url(&[entity_id, "roles"]);
        self.transport
            .get(url, Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// View one role.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn view(&self, entity_id: &str, role_id: &str, token: &str) -> Result<Role> {
        let url = self.url(&[entity_id, "roles", role_id]);
        self.transport.get(url, Auth::Bearer(token)).send().await
    }

    /// Update a role, typically its name.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn update(
        &self,
        entity_id: &str,
        role_id: &str,
        role: &Role,
        token: &str,
    ) -> Result<Role> {
        let url = self.url(&[entity_id, "roles", role_id]);
        self.transport
            .put(url, Auth::Bearer(token))
            .json(role)
            .send()
            .await
    }

    /// Delete a role.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete(&self, entity_id: &str, role_id: &str, token: &str) -> Result<Response> {
        let url = self.url(&[entity_id, "roles", role_id]);
        self.transport
            .delete(url, Auth::Bearer(token))
            .ack("Role deleted successfully")
            .await
    }

    /// Grant actions to a role. Returns the actions now granted.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn add_actions(
        &self,
        entity_id: &str,
        role_id: &str,
        actions: &[String],
        token: &str,
    ) -> Result<Vec<String>> {
        let url = self.url(&[entity_id, "roles", role_id, "actions"]);
        let res: Actions = self
            .transport
            .post(url, Auth::Bearer(token))
            .json(&json!({ "actions": actions }))
            .send()
            .await?;
        Ok(res.actions)
    }

    /// Actions granted by a role.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn list_actions(
        &self,
        entity_id: &str,
        role_id: &str,
        token: &str,
    ) -> Result<Vec<String>> {
        let url = self.url(&[entity_id, "roles", role_id, "actions"]);
        let res: Actions = self.transport.get(url, Auth::Bearer(token)).send().await?;
        Ok(res.actions)
    }

    /// Revoke some actions from a role.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_actions(
        &self,
        entity_id: &str,
        role_id: &str,
        actions: &[String],
        token: &str,
    ) -> Result<Response> {
        let url = self.url(&[entity_id, "roles", role_id, "actions", "delete"]);
        self.transport
            .post(url, Auth::Bearer(token))
            .json(&json!({ "actions": actions }))
            .ack("Role actions deleted successfully")
            .await
    }

    /// Revoke every action from a role.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_all_actions(
        &self,
        entity_id: &str,
        role_id: &str,
        token: &str,
    ) -> Result<Response> {
        let url = self.url(&[entity_id, "roles", role_id, "actions", "delete-all"]);
        self.transport
            .post(url, Auth::Bearer(token))
            .ack("Role actions deleted successfully")
            .await
    }

    /// Assign members to a role. Returns the members now assigned.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn add_members(
        &self,
        entity_id: &str,
        role_id: &str,
        members: &[String],
        token: &str,
    ) -> Result<Vec<String>> {
        let url = self.url(&[entity_id, "roles", role_id, "members"]);
        let res: Members = self
            .transport
            .post(url, Auth::Bearer(token))
            .json(&json!({ "members": members }))
            .send()
            .await?;
        Ok(res.members)
    }

    /// Members assigned to a role.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn list_members(
        &self,
        entity_id: &str,
        role_id: &str,
        pm: &BasicPageMeta,
        token: &str,
    ) -> Result<MembersPage> {
        let url = self.url(&[entity_id, "roles", role_id, "members"]);
        self.transport
            .get(url, Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Remove some members from a role.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_members(
        &self,
        entity_id: &str,
        role_id: &str,
        members: &[String],
        token: &str,
    ) -> Result<Response> {
        let url = self.url(&[entity_id, "roles", role_id, "members", "delete"]);
        self.transport
            .post(url, Auth::Bearer(token))
            .json(&json!({ "members": members }))
            .ack("Role members deleted successfully")
            .await
    }

    /// Remove every member from a role.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_all_members(
        &self,
        entity_id: &str,
        role_id: &str,
        token: &str,
    ) -> Result<Response> {
        let url = self.url(&[entity_id, "roles", role_id, "members", "delete-all"]);
        self.transport
            .post(url, Auth::Bearer(token))
            .ack("Role members deleted successfully")
            .await
    }

    /// Members of an entity across all its roles.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn list_entity_members(
        &self,
        entity_id: &str,
        pm: &MembersRolePageQuery,
        token: &str,
    ) -> Result<MemberRolesPage> {
        let url = self.url(&[entity_id, "roles", "members"]);
        self.transport
            .get(url, Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }
}
