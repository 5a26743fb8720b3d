//! Alarms raised by rules.

use crate::common::Metadata;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Alarm state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlarmStatus {
    Active,
    Cleared,
    All,
}

impl AlarmStatus {
    /// Wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AlarmStatus::Active => "active",
            AlarmStatus::Cleared => "cleared",
            AlarmStatus::All => "all",
        }
    }
}

/// An alarm raised by a rule for a measurement.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alarm {
    pub id: Option<String>,
    pub rule_id: Option<String>,
    pub domain_id: Option<String>,
    pub channel_id: Option<String>,
    pub client_id: Option<String>,
    pub subtopic: Option<String>,
    pub measurement: Option<String>,
    pub value: Option<String>,
    pub unit: Option<String>,
    pub threshold: Option<String>,
    pub cause: Option<String>,
    pub status: Option<AlarmStatus>,
    pub severity: Option<u8>,
    pub assignee_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub assigned_by: Option<String>,
    pub acknowledged_at: Option<DateTime<Utc>>,
    pub acknowledged_by: Option<String>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolved_by: Option<String>,
    pub metadata: Option<Metadata>,
}

/// Page of alarms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlarmsPage {
    pub alarms: Vec<Alarm>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}
