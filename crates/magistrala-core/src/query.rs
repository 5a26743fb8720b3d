//! Query parameters of list endpoints.
//!
//! Every parameter record goes through [`query_pairs`], so all list
//! endpoints render their filters the same way:
//!
//! - unset fields are omitted, set fields appear exactly once
//! - strings verbatim, numbers in decimal, booleans as `true`/`false`
//! - arrays comma-joined, objects (e.g. `metadata`) as compact JSON
//!
//! Percent-encoding is left to the HTTP layer.

use crate::alarms::AlarmStatus;
use crate::common::{Metadata, Status};
use crate::identity::PatStatus;
use crate::rules::RuleStatus;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

/// Errors raised while rendering query parameters.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The parameter record could not be serialized
    #[error("query serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The parameter value is not a record of named fields
    #[error("query parameters must be a record, got {0}")]
    NotARecord(&'static str),
}

/// Render a parameter record as `(name, value)` pairs.
///
/// # Errors
///
/// Returns error if `params` does not serialize to a JSON object.
///
/// # Examples
///
/// ```
/// use magistrala_core::{query_pairs, PageMetadata};
///
/// let pm = PageMetadata {
///     offset: Some(0),
///     limit: Some(10),
///     name: Some("sensor".to_string()),
///     ..Default::default()
/// };
/// let pairs = query_pairs(&pm).unwrap();
/// assert_eq!(pairs.len(), 3);
/// assert!(pairs.contains(&("limit".to_string(), "10".to_string())));
/// ```
pub fn query_pairs<T: Serialize + ?Sized>(params: &T) -> Result<Vec<(String, String)>, QueryError> {
    match serde_json::to_value(params)? {
        Value::Object(fields) => Ok(fields
            .into_iter()
            .filter_map(|(name, value)| render(value).map(|value| (name, value)))
            .collect()),
        Value::Null => Ok(Vec::new()),
        Value::Bool(_) => Err(QueryError::NotARecord("bool")),
        Value::Number(_) => Err(QueryError::NotARecord("number")),
        Value::String(_) => Err(QueryError::NotARecord("string")),
        Value::Array(_) => Err(QueryError::NotARecord("array")),
    }
}

fn render(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(render)
                .collect::<Vec<_>>()
                .join(","),
        ),
        object @ Value::Object(_) => Some(object.to_string()),
    }
}

/// A record usable as the query string of a list endpoint.
pub trait QueryParams: Serialize {
    /// Render this record with [`query_pairs`].
    ///
    /// # Errors
    ///
    /// Returns error if the record cannot be serialized.
    fn to_query(&self) -> Result<Vec<(String, String)>, QueryError> {
        query_pairs(self)
    }
}

/// Offset/limit pagination.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicPageMeta {
    pub total: Option<u64>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl BasicPageMeta {
    /// Request one page.
    #[must_use]
    pub fn new(offset: u64, limit: u64) -> Self {
        Self {
            total: None,
            offset: Some(offset),
            limit: Some(limit),
        }
    }
}

impl QueryParams for BasicPageMeta {}

/// Filters shared by most list endpoints.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub total: Option<u64>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub order: Option<String>,
    pub dir: Option<String>,
    pub level: Option<u64>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub metadata: Option<Metadata>,
    pub status: Option<Status>,
    pub action: Option<String>,
    pub subject: Option<String>,
    pub object: Option<String>,
    pub tag: Option<String>,
    pub id: Option<String>,
    pub tree: Option<bool>,
    pub owner: Option<String>,
    pub shared_by: Option<String>,
    pub visibility: Option<String>,
    pub owner_id: Option<String>,
    pub topic: Option<String>,
    pub contact: Option<String>,
    pub state: Option<String>,
    pub list_perms: Option<bool>,
    pub invited_by: Option<String>,
    pub domain: Option<String>,
    pub user_id: Option<String>,
    pub relation: Option<String>,
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub access_type: Option<String>,
    pub actions: Option<Vec<String>>,
    pub role_id: Option<String>,
    pub role_name: Option<String>,
    pub group: Option<String>,
    pub client: Option<String>,
    pub channel: Option<String>,
    pub connection_type: Option<String>,
    pub root_group: Option<bool>,
}

impl PageMetadata {
    /// Request one page without further filters.
    #[must_use]
    pub fn paged(offset: u64, limit: u64) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
            ..Default::default()
        }
    }
}

impl QueryParams for PageMetadata {}

/// Filters of the message readers.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessagesPageMetadata {
    #[serde(flatten)]
    pub page: PageMetadata,
    pub subtopic: Option<String>,
    pub publisher: Option<String>,
    pub protocol: Option<String>,
    /// Value comparator: `eq`, `lt`, `le`, `gt`, `ge`
    pub comparator: Option<String>,
    pub vb: Option<bool>,
    pub vs: Option<String>,
    pub vd: Option<String>,
    pub aggregation: Option<String>,
    pub interval: Option<String>,
    pub v: Option<f64>,
}

impl QueryParams for MessagesPageMetadata {}

/// Filters of the journal service.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalsPageMetadata {
    #[serde(flatten)]
    pub page: PageMetadata,
    pub operation: Option<String>,
    pub with_metadata: Option<bool>,
    pub with_attributes: Option<bool>,
}

impl QueryParams for JournalsPageMetadata {}

/// Group hierarchy traversal.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyPageMeta {
    pub level: Option<u64>,
    /// `1` for ancestors, `-1` for descendants
    pub direction: Option<i64>,
    /// Return a tree instead of a flat list
    pub tree: Option<bool>,
}

impl QueryParams for HierarchyPageMeta {}

/// Filters for listing the members of an entity across its roles.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembersRolePageQuery {
    pub total: Option<u64>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub order_by: Option<String>,
    pub dir: Option<String>,
    pub access_provider_id: Option<String>,
    pub role_id: Option<String>,
    pub role_name: Option<String>,
    pub actions: Option<Vec<String>>,
    pub access_type: Option<String>,
}

impl QueryParams for MembersRolePageQuery {}

/// Filters for listing invitations.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationPageMeta {
    pub total: Option<u64>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub invited_by: Option<String>,
    pub invitee_user_id: Option<String>,
    pub domain_id: Option<String>,
    pub role_id: Option<String>,
    pub invited_by_or_user_id: Option<String>,
    /// `pending`, `accepted`, `rejected` or `all`
    pub state: Option<String>,
}

impl QueryParams for InvitationPageMeta {}

/// Filters for listing personal access tokens.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatPageMeta {
    pub total: Option<u64>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub status: Option<PatStatus>,
    pub name: Option<String>,
    pub id: Option<String>,
}

impl QueryParams for PatPageMeta {}

/// Filters for listing the scopes of a token.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopesPageMeta {
    pub total: Option<u64>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub pat_id: Option<String>,
    pub id: Option<String>,
}

impl QueryParams for ScopesPageMeta {}

/// Filters for listing alarms.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmPageMeta {
    pub total: Option<u64>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub domain_id: Option<String>,
    pub channel_id: Option<String>,
    pub client_id: Option<String>,
    pub subtopic: Option<String>,
    pub rule_id: Option<String>,
    pub status: Option<AlarmStatus>,
    pub assignee_id: Option<String>,
    pub severity: Option<u8>,
    pub updated_by: Option<String>,
    pub assigned_by: Option<String>,
    pub acknowledged_by: Option<String>,
    pub resolved_by: Option<String>,
}

impl QueryParams for AlarmPageMeta {}

/// Filters for listing rules.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesPageMetadata {
    pub total: Option<u64>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub dir: Option<String>,
    pub name: Option<String>,
    pub input_channel: Option<String>,
    pub status: Option<RuleStatus>,
    pub tag: Option<String>,
}

impl QueryParams for RulesPageMetadata {}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(String, String)], name: &str) -> Vec<&'a str> {
        pairs
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    #[test]
    fn unset_fields_are_omitted() {
        let pairs = PageMetadata::default().to_query().unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn set_fields_appear_exactly_once() {
        let pm = PageMetadata {
            offset: Some(5),
            limit: Some(20),
            status: Some(Status::Disabled),
            tree: Some(true),
            kind: Some("gateway".to_string()),
            ..Default::default()
        };
        let pairs = pm.to_query().unwrap();
        assert_eq!(pairs.len(), 5);
        assert_eq!(lookup(&pairs, "offset"), vec!["5"]);
        assert_eq!(lookup(&pairs, "limit"), vec!["20"]);
        assert_eq!(lookup(&pairs, "status"), vec!["disabled"]);
        assert_eq!(lookup(&pairs, "tree"), vec!["true"]);
        assert_eq!(lookup(&pairs, "type"), vec!["gateway"]);
    }

    #[test]
    fn arrays_are_comma_joined_and_objects_are_json() {
        let mut metadata = Metadata::new();
        metadata.insert("site".to_string(), Value::from("north"));
        let pm = PageMetadata {
            actions: Some(vec!["read".to_string(), "update".to_string()]),
            metadata: Some(metadata),
            ..Default::default()
        };
        let pairs = pm.to_query().unwrap();
        assert_eq!(lookup(&pairs, "actions"), vec!["read,update"]);
        assert_eq!(lookup(&pairs, "metadata"), vec![r#"{"site":"north"}"#]);
    }

    #[test]
    fn flattened_page_fields_render_alongside_extras() {
        let pm = MessagesPageMetadata {
            page: PageMetadata::paged(0, 10),
            subtopic: Some("temp/room1".to_string()),
            v: Some(2.5),
            ..Default::default()
        };
        let pairs = pm.to_query().unwrap();
        assert_eq!(lookup(&pairs, "offset"), vec!["0"]);
        assert_eq!(lookup(&pairs, "subtopic"), vec!["temp/room1"]);
        assert_eq!(lookup(&pairs, "v"), vec!["2.5"]);
        assert_eq!(pairs.len(), 4);
    }

    #[test]
    fn status_enums_render_wire_names() {
        let pm = PatPageMeta {
            status: Some(PatStatus::Active),
            ..Default::default()
        };
        assert_eq!(
            pm.to_query().unwrap(),
            vec![("status".to_string(), "active".to_string())]
        );
    }

    #[test]
    fn non_record_values_are_rejected() {
        let err = query_pairs(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, QueryError::NotARecord("array")));
    }
}
