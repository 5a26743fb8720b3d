//! Types shared by every service record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-form metadata attached to most entities.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Lifecycle status of users, clients, channels, groups and domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Entity is active
    #[default]
    Enabled,
    /// Entity is disabled
    Disabled,
    /// Domain has been frozen by a platform administrator
    Frozen,
    /// Entity has been deleted
    Deleted,
    /// Filter value matching every status
    All,
    /// Any status this client does not know yet
    #[serde(other)]
    Unknown,
}

impl Status {
    /// Wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Enabled => "enabled",
            Status::Disabled => "disabled",
            Status::Frozen => "frozen",
            Status::Deleted => "deleted",
            Status::All => "all",
            Status::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to another entity.
///
/// The platform returns references either as a bare identifier or, when the
/// request asked for it, as the embedded record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef<T> {
    /// Bare identifier
    Id(String),
    /// Embedded record
    Entity(T),
}

impl<T> EntityRef<T> {
    /// Return the identifier if this reference is a bare id.
    #[must_use]
    pub fn as_id(&self) -> Option<&str> {
        match self {
            EntityRef::Id(id) => Some(id),
            EntityRef::Entity(_) => None,
        }
    }
}

impl<T> From<&str> for EntityRef<T> {
    fn from(id: &str) -> Self {
        EntityRef::Id(id.to_string())
    }
}

impl<T> From<String> for EntityRef<T> {
    fn from(id: String) -> Self {
        EntityRef::Id(id)
    }
}

/// Acknowledgement returned by operations whose response carries no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// HTTP status code returned by the server
    pub status: u16,
    /// Human readable outcome
    pub message: String,
}

impl Response {
    /// Create a new acknowledgement.
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Direction of a client-channel connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    /// Client may publish to the channel
    Publish,
    /// Client may subscribe to the channel
    Subscribe,
}

impl ConnectionType {
    /// Both directions, the platform default when connecting clients.
    pub const BOTH: [ConnectionType; 2] = [ConnectionType::Publish, ConnectionType::Subscribe];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::DomainBasicInfo;

    type DomainRef = EntityRef<DomainBasicInfo>;

    #[test]
    fn entity_ref_accepts_id_or_record() {
        let id: DomainRef = serde_json::from_str(r#""d-1""#).unwrap();
        assert_eq!(id.as_id(), Some("d-1"));

        let embedded: DomainRef =
            serde_json::from_str(r#"{"id":"d-1","name":"factory"}"#).unwrap();
        match embedded {
            EntityRef::Entity(info) => assert_eq!(info.name.as_deref(), Some("factory")),
            EntityRef::Id(_) => panic!("expected embedded domain"),
        }
    }

    #[test]
    fn status_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&Status::Disabled).unwrap(), r#""disabled""#);
        let status: Status = serde_json::from_str(r#""frozen""#).unwrap();
        assert_eq!(status, Status::Frozen);
        assert_eq!(Status::Enabled.to_string(), "enabled");
    }

    #[test]
    fn unrecognized_status_does_not_fail_the_page() {
        let page: crate::entities::ClientsPage = serde_json::from_str(
            r#"{"clients":[{"id":"c1","status":"enabled"},{"id":"c2","status":"deleted"},{"id":"c3","status":"archived"}],"total":3,"offset":0,"limit":10}"#,
        )
        .unwrap();
        let statuses: Vec<_> = page.clients.iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![Some(Status::Enabled), Some(Status::Deleted), Some(Status::Unknown)]
        );
    }

    #[test]
    fn connection_types_serialize_lowercase() {
        let json = serde_json::to_string(&ConnectionType::BOTH).unwrap();
        assert_eq!(json, r#"["publish","subscribe"]"#);
    }
}
