//! Domain-scoped entities: clients, channels and groups.

use crate::common::{ConnectionType, EntityRef, Metadata, Status};
use crate::identity::{DomainBasicInfo, UserBasicInfo};
use crate::roles::MemberRoleActions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Identity/secret pair a client authenticates with.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientCredentials {
    pub identity: Option<String>,
    pub secret: Option<String>,
}

/// Minimal client projection embedded in other records.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientBasicInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub credentials: Option<ClientCredentials>,
    pub status: Option<Status>,
}

/// A device or application connecting to channels.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: Option<String>,
    pub name: Option<String>,
    pub credentials: Option<ClientCredentials>,
    pub status: Option<Status>,
    pub tags: Option<Vec<String>>,
    pub domain_id: Option<EntityRef<DomainBasicInfo>>,
    pub parent_group_id: Option<String>,
    pub metadata: Option<Metadata>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<EntityRef<UserBasicInfo>>,
    pub identity: Option<String>,
    pub parent_group_path: Option<String>,
    pub role_id: Option<String>,
    pub role_name: Option<String>,
    pub actions: Option<Vec<String>>,
    pub access_type: Option<String>,
    pub access_provider_id: Option<String>,
    pub access_provider_role_id: Option<String>,
    pub access_provider_role_name: Option<String>,
    pub access_provider_role_actions: Option<Vec<String>>,
    pub connection_types: Option<Vec<ConnectionType>>,
    pub member_id: Option<String>,
    pub roles: Option<Vec<MemberRoleActions>>,
}

impl Client {
    /// A client with only a name set, the minimum the platform accepts.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Page of clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientsPage {
    pub clients: Vec<Client>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// Minimal channel projection embedded in other records.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelBasicInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<Status>,
}

/// A message channel.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<Status>,
    pub domain_id: Option<EntityRef<DomainBasicInfo>>,
    pub metadata: Option<Metadata>,
    pub tags: Option<Vec<String>>,
    pub parent_group_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub parent_group_path: Option<String>,
    pub role_id: Option<String>,
    pub role_name: Option<String>,
    pub actions: Option<Vec<String>>,
    pub access_type: Option<String>,
    pub access_provider_id: Option<String>,
    pub access_provider_role_id: Option<String>,
    pub access_provider_role_name: Option<String>,
    pub access_provider_role_actions: Option<Vec<String>>,
    pub connection_types: Option<Vec<ConnectionType>>,
    pub member_id: Option<String>,
    pub roles: Option<Vec<MemberRoleActions>>,
    /// Alias usable in place of the id in message topics
    pub route: Option<String>,
}

/// Page of channels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelsPage {
    pub channels: Vec<Channel>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// Minimal group projection embedded in other records.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupBasicInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<Status>,
    pub description: Option<String>,
}

/// A node in the group hierarchy.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<Status>,
    pub description: Option<String>,
    pub domain_id: Option<EntityRef<DomainBasicInfo>>,
    pub parent_id: Option<EntityRef<GroupBasicInfo>>,
    pub metadata: Option<Metadata>,
    pub level: Option<i64>,
    pub path: Option<String>,
    pub children: Option<Vec<Group>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<EntityRef<UserBasicInfo>>,
    pub role_id: Option<String>,
    pub role_name: Option<String>,
    pub actions: Option<Vec<String>>,
    pub access_type: Option<String>,
    pub access_provider_id: Option<String>,
    pub access_provider_role_id: Option<String>,
    pub access_provider_role_name: Option<String>,
    pub access_provider_role_actions: Option<Vec<String>>,
    pub member_id: Option<String>,
    pub roles: Option<Vec<MemberRoleActions>>,
}

/// Page of groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupsPage {
    pub groups: Vec<Group>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// Ancestors or descendants of a group.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HierarchyPage {
    pub level: Option<u64>,
    /// `1` for ancestors, `-1` for descendants
    pub direction: Option<i64>,
    /// Whether `groups` holds a tree instead of a flat list
    pub tree: Option<bool>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_client_serializes_only_name() {
        let json = serde_json::to_string(&Client::named("dev1")).unwrap();
        assert_eq!(json, r#"{"name":"dev1"}"#);
    }

    #[test]
    fn group_hierarchy_decodes_nested_children() {
        let page: HierarchyPage = serde_json::from_str(
            r#"{
                "level": 2,
                "direction": -1,
                "tree": true,
                "groups": [{"id": "g-1", "children": [{"id": "g-2", "parent_id": "g-1"}]}]
            }"#,
        )
        .unwrap();
        let child = &page.groups[0].children.as_ref().unwrap()[0];
        assert_eq!(child.id.as_deref(), Some("g-2"));
        assert_eq!(child.parent_id.as_ref().and_then(EntityRef::as_id), Some("g-1"));
    }

    #[test]
    fn channel_connection_types_decode() {
        let channel: Channel =
            serde_json::from_str(r#"{"id":"c-1","connection_types":["publish"]}"#).unwrap();
        assert_eq!(channel.connection_types, Some(vec![ConnectionType::Publish]));
    }
}
