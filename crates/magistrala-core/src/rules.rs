//! Rules engine records.

use crate::common::{EntityRef, Metadata};
use crate::entities::ChannelBasicInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Kind of a rule output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    Channels,
    SaveSenml,
    Alarms,
    Email,
    SaveRemotePg,
}

/// Destination a rule forwards its result to, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Output {
    /// Republish to a channel
    Channels {
        channel: EntityRef<ChannelBasicInfo>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        topic: Option<String>,
    },
    /// Persist as SenML
    SaveSenml,
    /// Raise an alarm
    Alarms,
    /// Send an email
    Email {
        to: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subject: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    /// Write into an external PostgreSQL table
    SaveRemotePg {
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
        table: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mapping: Option<String>,
    },
}

impl Output {
    /// The output kind.
    #[must_use]
    pub fn kind(&self) -> OutputType {
        match self {
            Output::Channels { .. } => OutputType::Channels,
            Output::SaveSenml => OutputType::SaveSenml,
            Output::Alarms => OutputType::Alarms,
            Output::Email { .. } => OutputType::Email,
            Output::SaveRemotePg { .. } => OutputType::SaveRemotePg,
        }
    }
}

/// Rule logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// `0` Lua, `1` Go
    #[serde(rename = "type")]
    pub kind: i32,
    pub value: String,
}

/// Recurrence of a scheduled rule or report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Recurring {
    Daily,
    Weekly,
    Monthly,
    #[default]
    None,
}

/// When a rule or report runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub start_datetime: String,
    pub time: String,
    pub recurring: Recurring,
    pub recurring_period: u32,
}

/// Lifecycle state of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Enabled,
    Disabled,
    Deleted,
    All,
    #[serde(other)]
    Unknown,
}

impl RuleStatus {
    /// Wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RuleStatus::Enabled => "enabled",
            RuleStatus::Disabled => "disabled",
            RuleStatus::Deleted => "deleted",
            RuleStatus::All => "all",
            RuleStatus::Unknown => "unknown",
        }
    }
}

/// A message processing rule.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: Option<String>,
    pub name: Option<String>,
    pub domain: Option<String>,
    pub metadata: Option<Metadata>,
    pub tags: Option<Vec<String>>,
    pub input_channel: Option<String>,
    pub input_topic: Option<String>,
    pub logic: Option<Script>,
    pub outputs: Option<Vec<Output>>,
    pub schedule: Option<Schedule>,
    pub status: Option<RuleStatus>,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

/// Page of rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesPage {
    pub rules: Vec<Rule>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}
