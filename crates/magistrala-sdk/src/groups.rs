//! Groups service: hierarchical grouping of clients and channels.

use crate::client::{roles_flag, Auth, Transport};
use crate::encoding::{endpoint, require_id};
use crate::error::Result;
use crate::roles::Roles;
use magistrala_core::{Group, GroupsPage, HierarchyPage, HierarchyPageMeta, PageMetadata, Response};
use serde_json::json;

const GROUPS: &str = "groups";

/// Client for the groups service.
#[derive(Debug, Clone)]
pub struct Groups {
    transport: Transport,
    groups_url: String,
}

impl Groups {
    /// Create a groups client for `groups_url`.
    #[must_use]
    pub fn new(transport: Transport, groups_url: impl Into<String>) -> Self {
        Self {
            transport,
            groups_url: groups_url.into(),
        }
    }

    fn url(&self, domain_id: &str, tail: &[&str]) -> String {
        let mut segments = vec![domain_id, GROUPS];
        segments.extend_from_slice(tail);
        endpoint(&self.groups_url, &segments)
    }

    /// Role operations on the groups of `domain_id`.
    #[must_use]
    pub fn roles(&self, domain_id: &str) -> Roles {
        Roles::new(
            self.transport.clone(),
            self.groups_url.clone(),
            &[domain_id, GROUPS],
        )
    }

    /// Create a group.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn create(&self, group: &Group, domain_id: &str, token: &str) -> Result<Group> {
        self.transport
            .post(self.url(domain_id, &[]), Auth::Bearer(token))
            .json(group)
            .send()
            .await
    }

    /// Fetch one group, optionally with the caller's roles on it.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn group(
        &self,
        group_id: &str,
        domain_id: &str,
        list_roles: Option<bool>,
        token: &str,
    ) -> Result<Group> {
        self.transport
            .get(self.url(domain_id, &[group_id]), Auth::Bearer(token))
            .pairs(&roles_flag(list_roles))
            .send()
            .await
    }

    /// List the groups of a domain.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn groups(
        &self,
        pm: &PageMetadata,
        domain_id: &str,
        token: &str,
    ) -> Result<GroupsPage> {
        self.transport
            .get(self.url(domain_id, &[]), Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Update `group`. Groups are replaced with `PUT`.
    ///
    /// # Errors
    ///
    /// Returns error if `group.id` is missing, or on network or API errors.
    pub async fn update(&self, group: &Group, domain_id: &str, token: &str) -> Result<Group> {
        let id = require_id(group.id.as_deref(), "group")?;
        self.transport
            .put(self.url(domain_id, &[id]), Auth::Bearer(token))
            .json(group)
            .send()
            .await
    }

    /// Enable a group.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn enable(&self, group_id: &str, domain_id: &str, token: &str) -> Result<Group> {
        self.transport
            .post(self.url(domain_id, &[group_id, "enable"]), Auth::Bearer(token))
            .send()
            .await
    }

    /// Disable a group.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn disable(&self, group_id: &str, domain_id: &str, token: &str) -> Result<Group> {
        self.transport
            .post(self.url(domain_id, &[group_id, "disable"]), Auth::Bearer(token))
            .send()
            .await
    }

    /// Delete a group.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete(&self, group_id: &str, domain_id: &str, token: &str) -> Result<Response> {
        self.transport
            .delete(self.url(domain_id, &[group_id]), Auth::Bearer(token))
            .ack("Group deleted successfully")
            .await
    }

    /// Ancestors or descendants of a group.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn hierarchy(
        &self,
        group_id: &str,
        pm: &HierarchyPageMeta,
        domain_id: &str,
        token: &str,
    ) -> Result<HierarchyPage> {
        self.transport
            .get(self.url(domain_id, &[group_id, "hierarchy"]), Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Set the parent of a group.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn add_parent(
        &self,
        group_id: &str,
        parent_id: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        self.transport
            .post(self.url(domain_id, &[group_id, "parent"]), Auth::Bearer(token))
            .json(&json!({ "parent_id": parent_id }))
            .ack("Parent added successfully")
            .await
    }

    /// Make a group a root group.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn remove_parent(
        &self,
        group_id: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        self.transport
            .delete(self.url(domain_id, &[group_id, "parent"]), Auth::Bearer(token))
            .ack("Parent removed successfully")
            .await
    }

    /// Attach child groups.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn add_children(
        &self,
        group_id: &str,
        children_ids: &[String],
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        self.transport
            .post(self.url(domain_id, &[group_id, "children"]), Auth::Bearer(token))
            .json(&json!({ "children_ids": children_ids }))
            .ack("Children added successfully")
            .await
    }

    /// Detach some child groups.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn remove_children(
        &self,
        group_id: &str,
        children_ids: &[String],
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        self.transport
            .delete(self.url(domain_id, &[group_id, "children"]), Auth::Bearer(token))
            .json(&json!({ "children_ids": children_ids }))
            .ack("Children removed successfully")
            .await
    }

    /// Detach every child group.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn remove_all_children(
        &self,
        group_id: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        self.transport
            .delete(
                self.url(domain_id, &[group_id, "children", "all"]),
                Auth::Bearer(token),
            )
            .ack("All children removed successfully")
            .await
    }

    /// Child groups of a group.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn list_children(
        &self,
        group_id: &str,
        pm: &PageMetadata,
        domain_id: &str,
        token: &str,
    ) -> Result<GroupsPage> {
        self.transport
            .get(self.url(domain_id, &[group_id, "children"]), Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }
}
