//! Stored messages, journals, telemetry and service health.

use crate::common::EntityRef;
use crate::entities::{ChannelBasicInfo, ClientBasicInfo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

/// A SenML record as returned by the message readers.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SenMLMessage {
    pub channel: Option<EntityRef<ChannelBasicInfo>>,
    pub subtopic: Option<String>,
    pub publisher: Option<EntityRef<ClientBasicInfo>>,
    pub protocol: Option<String>,
    pub name: Option<String>,
    pub unit: Option<String>,
    pub time: Option<f64>,
    pub update_time: Option<f64>,
    pub value: Option<f64>,
    pub string_value: Option<String>,
    pub data_value: Option<String>,
    pub bool_value: Option<bool>,
    pub sum: Option<f64>,
}

/// Page of stored messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesPage {
    pub messages: Vec<SenMLMessage>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// One audit journal entry.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    pub id: Option<String>,
    pub operation: Option<String>,
    pub occurred_at: Option<DateTime<Utc>>,
    pub attributes: Option<Value>,
    pub metadata: Option<Value>,
    pub payload: Option<Value>,
}

/// Page of journal entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalsPage {
    pub journals: Vec<Journal>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// Connection counters of one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientTelemetry {
    pub client_id: String,
    pub domain_id: String,
    #[serde(default)]
    pub subscriptions: u64,
    #[serde(default)]
    pub inbound_messages: u64,
    #[serde(default)]
    pub outbound_messages: u64,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

/// Response of a service `/health` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthInfo {
    pub status: String,
    pub version: String,
    pub commit: String,
    pub description: String,
    pub build_time: String,
    pub instance_id: String,
}
