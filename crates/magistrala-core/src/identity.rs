//! Users, domains, invitations and personal access tokens.

use crate::common::{EntityRef, Metadata, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Username/secret pair of a user.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserCredentials {
    /// Login name
    pub username: Option<String>,
    /// Password
    pub secret: Option<String>,
}

/// Minimal user projection embedded in other records.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserBasicInfo {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub credentials: Option<UserCredentials>,
    pub status: Option<Status>,
    pub profile_picture: Option<String>,
}

/// A platform user.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub credentials: Option<UserCredentials>,
    pub status: Option<Status>,
    pub profile_picture: Option<String>,
    /// Platform role, `admin` or `user`
    pub role: Option<String>,
    pub tags: Option<Vec<String>>,
    pub metadata: Option<Metadata>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<EntityRef<UserBasicInfo>>,
    pub permissions: Option<Vec<String>>,
}

/// Page of users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersPage {
    pub users: Vec<User>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// Credentials submitted to issue a session token.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    /// Username or email
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Login {
    /// Build a login request.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}

/// Session token pair.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub access_type: Option<String>,
}

/// Minimal domain projection embedded in other records.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainBasicInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub route: Option<String>,
    pub status: Option<Status>,
}

/// A domain: the tenant scope owning clients, channels and groups.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Unique, human readable alias usable in place of the id
    pub route: Option<String>,
    pub status: Option<Status>,
    pub tags: Option<Vec<String>>,
    pub metadata: Option<Metadata>,
    pub role_id: Option<String>,
    pub role_name: Option<String>,
    pub actions: Option<Vec<String>>,
    pub created_by: Option<EntityRef<UserBasicInfo>>,
    pub updated_by: Option<EntityRef<UserBasicInfo>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub member_id: Option<String>,
    pub roles: Option<Vec<crate::roles::MemberRoleActions>>,
}

/// Page of domains.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainsPage {
    pub domains: Vec<Domain>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// Invitation of a user into a domain role.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub invited_by: EntityRef<UserBasicInfo>,
    pub invitee_user_id: EntityRef<UserBasicInfo>,
    pub domain_id: EntityRef<DomainBasicInfo>,
    pub domain_name: Option<String>,
    pub role_id: Option<String>,
    pub role_name: Option<String>,
    pub actions: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
}

/// Page of invitations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvitationsPage {
    pub invitations: Vec<Invitation>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// Entity kinds a PAT scope can grant access to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Groups,
    Channels,
    Clients,
    Domains,
    Users,
    Dashboards,
    Messages,
}

/// Operations a PAT scope can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Read,
    List,
    Update,
    Delete,
    Share,
    Unshare,
    Publish,
    Subscribe,
}

/// One grant of a personal access token.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    pub id: Option<String>,
    pub pat_id: Option<String>,
    pub entity_type: Option<EntityType>,
    pub optional_domain_id: Option<String>,
    pub operation: Option<Operation>,
    /// Entity id, or `*` for every entity of the type
    pub entity_id: Option<String>,
}

/// Lifecycle state of a personal access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatStatus {
    Active,
    Revoked,
    Expired,
    All,
}

impl PatStatus {
    /// Wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PatStatus::Active => "active",
            PatStatus::Revoked => "revoked",
            PatStatus::Expired => "expired",
            PatStatus::All => "all",
        }
    }
}

/// Personal access token.
#[allow(clippy::upper_case_acronyms)]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PAT {
    pub id: Option<String>,
    pub user: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Only present in create and reset responses
    pub secret: Option<String>,
    pub scope: Option<Vec<Scope>>,
    pub status: Option<PatStatus>,
    pub issued_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked: Option<bool>,
    pub revoked_at: Option<DateTime<Utc>>,
}

/// Page of personal access tokens.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PATsPage {
    pub pats: Vec<PAT>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// Page of PAT scopes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopesPage {
    pub scopes: Vec<Scope>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_omits_unset_fields() {
        let user = User {
            first_name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"first_name": "Ada", "email": "ada@example.com"})
        );
    }

    #[test]
    fn user_decodes_server_timestamps() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u-1",
                "status": "enabled",
                "created_at": "2024-05-01T10:00:00Z",
                "updated_by": "u-2",
                "unknown_field": 1
            }"#,
        )
        .unwrap();
        assert_eq!(user.id.as_deref(), Some("u-1"));
        assert_eq!(user.status, Some(Status::Enabled));
        assert!(user.created_at.is_some());
        assert_eq!(user.updated_by.and_then(|u| u.as_id().map(str::to_string)), Some("u-2".to_string()));
    }

    #[test]
    fn page_tolerates_missing_items() {
        let page: UsersPage = serde_json::from_str(r#"{"total": 0, "limit": 10}"#).unwrap();
        assert!(page.users.is_empty());
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn pat_status_and_scope_wire_names() {
        let scope = Scope {
            entity_type: Some(EntityType::Clients),
            operation: Some(Operation::Publish),
            entity_id: Some("*".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&scope).unwrap();
        assert_eq!(json["entity_type"], "clients");
        assert_eq!(json["operation"], "publish");
        assert_eq!(PatStatus::Revoked.as_str(), "revoked");
    }
}
