//! Roles attached to clients, channels, groups and domains.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A named set of actions granted to members on one entity.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Option<String>,
    pub name: Option<String>,
    pub entity_id: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

/// Request body for creating a role.
///
/// Actions and members are optional; the server fills in an empty set.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleProvision {
    pub role_name: String,
    pub optional_actions: Option<Vec<String>>,
    pub optional_members: Option<Vec<String>>,
}

impl RoleProvision {
    /// Provision a role with no initial actions or members.
    #[must_use]
    pub fn new(role_name: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
            ..Default::default()
        }
    }

    /// Grant these actions on creation.
    #[must_use]
    pub fn with_actions(mut self, actions: Vec<String>) -> Self {
        self.optional_actions = Some(actions);
        self
    }

    /// Assign these members on creation.
    #[must_use]
    pub fn with_members(mut self, members: Vec<String>) -> Self {
        self.optional_members = Some(members);
        self
    }
}

/// Page of roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolePage {
    pub roles: Vec<Role>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// A role held by a member, with the actions it grants.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRoleActions {
    pub role_id: Option<String>,
    pub role_name: Option<String>,
    pub actions: Option<Vec<String>>,
    pub access_provider_id: Option<String>,
    pub access_provider_path: Option<String>,
    /// `direct`, `domain` or an inherited group access type
    pub access_type: Option<String>,
}

/// Every role one member holds on an entity.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRoles {
    pub member_id: Option<String>,
    pub roles: Option<Vec<MemberRoleActions>>,
}

/// Page of entity members with their roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberRolesPage {
    pub members: Vec<MemberRoles>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// Page of member ids assigned to a role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MembersPage {
    pub members: Vec<String>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provision_skips_absent_lists() {
        let body = serde_json::to_value(RoleProvision::new("operators")).unwrap();
        assert_eq!(body, serde_json::json!({"role_name": "operators"}));

        let body = serde_json::to_value(
            RoleProvision::new("operators").with_actions(vec!["read".to_string()]),
        )
        .unwrap();
        assert_eq!(body["optional_actions"], serde_json::json!(["read"]));
    }
}
