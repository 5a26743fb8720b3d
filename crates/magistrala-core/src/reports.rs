//! Report configurations and generated reports.

use crate::common::{EntityRef, Status};
use crate::entities::{ChannelBasicInfo, ClientBasicInfo};
use crate::messaging::SenMLMessage;
use crate::rules::Schedule;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Output file format of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    #[serde(rename = "pdf")]
    Pdf,
    #[serde(rename = "csv")]
    Csv,
    #[serde(rename = "AllFormats")]
    All,
}

/// Aggregation applied to metric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    #[default]
    None,
    Max,
    Min,
    Sum,
    Count,
    Avg,
}

/// Aggregation function and window.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggConfig {
    pub agg_type: Option<Aggregation>,
    /// Window such as `1h`
    pub interval: Option<String>,
}

/// Time range, aggregation and file format of a report.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricConfig {
    pub title: Option<String>,
    /// Start of the range, e.g. `now()-1h`
    pub from: Option<String>,
    pub to: Option<String>,
    pub aggregation: Option<AggConfig>,
    pub file_format: Option<Format>,
}

/// Email delivery settings of a scheduled report.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSetting {
    pub to: Option<Vec<String>>,
    pub subject: Option<String>,
    pub content: Option<String>,
}

/// Metric selection in a report request.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReqMetric {
    pub channel_id: EntityRef<ChannelBasicInfo>,
    pub client_ids: Option<Vec<EntityRef<ClientBasicInfo>>>,
    pub name: Option<String>,
    pub subtopic: Option<String>,
    pub protocol: Option<String>,
    pub format: Option<String>,
}

/// Metric selection echoed back in a generated report.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub channel_id: EntityRef<ChannelBasicInfo>,
    pub client_id: Option<EntityRef<ClientBasicInfo>>,
    pub name: Option<String>,
    pub subtopic: Option<String>,
    pub protocol: Option<String>,
    pub format: Option<String>,
}

/// Messages matching one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub metric: Metric,
    #[serde(default)]
    pub messages: Vec<SenMLMessage>,
}

/// Rendered report file.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFile {
    pub name: Option<String>,
    pub data: Option<Vec<u8>>,
    pub format: Option<Format>,
}

/// Result of generating a report.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportPage {
    #[serde(default)]
    pub total: u64,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub aggregation: Option<AggConfig>,
    #[serde(default)]
    pub reports: Vec<Report>,
    pub file: Option<ReportFile>,
}

/// Stored report definition.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub domain_id: Option<String>,
    pub schedule: Option<Schedule>,
    pub config: Option<MetricConfig>,
    pub email: Option<EmailSetting>,
    pub metrics: Option<Vec<ReqMetric>>,
    pub report_template: Option<String>,
    pub status: Option<Status>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

/// Page of report configurations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfigPage {
    pub report_configs: Vec<ReportConfig>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// HTML template a report is rendered with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub html_template: String,
}
