//! Reports service: on-demand and scheduled reports over stored messages.

use crate::client::{Auth, Transport};
use crate::encoding::{endpoint, require_id};
use crate::error::Result;
use magistrala_core::{
    PageMetadata, ReportConfig, ReportConfigPage, ReportPage, Response, Schedule, Template,
};
use serde_json::json;

const REPORTS: &str = "reports";
const CONFIGS: &str = "configs";

/// Client for the reports service.
#[derive(Debug, Clone)]
pub struct Reports {
    transport: Transport,
    reports_url: String,
}

impl Reports {
    /// Create a reports client for `reports_url`.
    #[must_use]
    pub fn new(transport: Transport, reports_url: impl Into<String>) -> Self {
        Self {
            transport,
            reports_url: reports_url.into(),
        }
    }

    fn configs_url(&self, domain_id: &str, tail: &[&str]) -> String {
        let mut segments = vec![domain_id, REPORTS, CONFIGS];
        segments.extend_from_slice(tail);
        endpoint(&self.reports_url, &segments)
    }

    /// Generate a report right away.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn generate(
        &self,
        config: &ReportConfig,
        domain_id: &str,
        token: &str,
    ) -> Result<ReportPage> {
        let url = endpoint(&self.reports_url, &[domain_id, REPORTS]);
        self.transport
            .post(url, Auth::Bearer(token))
            .json(config)
            .send()
            .await
    }

    /// Store a report configuration.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn add_config(
        &self,
        config: &ReportConfig,
        domain_id: &str,
        token: &str,
    ) -> Result<ReportConfig> {
        self.transport
            .post(self.configs_url(domain_id, &[]), Auth::Bearer(token))
            .json(config)
            .send()
            .await
    }

    /// Fetch one report configuration.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn view_config(
        &self,
        config_id: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<ReportConfig> {
        self.transport
            .get(self.configs_url(domain_id, &[config_id]), Auth::Bearer(token))
            .send()
            .await
    }

    /// List report configurations.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn list_configs(
        &self,
        pm: &PageMetadata,
        domain_id: &str,
        token: &str,
    ) -> Result<ReportConfigPage> {
        self.transport
            .get(self.configs_url(domain_id, &[]), Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Update a report configuration.
    ///
    /// # Errors
    ///
    /// Returns error if `config.id` is missing, or on network or API errors.
    pub async fn update_config(
        &self,
        config: &ReportConfig,
        domain_id: &str,
        token: &str,
    ) -> Result<ReportConfig> {
        let id = require_id(config.id.as_deref(), "report config")?;
        self.transport
            .patch(self.configs_url(domain_id, &[id]), Auth::Bearer(token))
            .json(config)
            .send()
            .await
    }

    /// Replace the schedule of a report configuration.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn update_schedule(
        &self,
        config_id: &str,
        schedule: &Schedule,
        domain_id: &str,
        token: &str,
    ) -> Result<ReportConfig> {
        self.transport
            .patch(
                self.configs_url(domain_id, &[config_id, "schedule"]),
                Auth::Bearer(token),
            )
            .json(&json!({ "schedule": schedule }))
            .send()
            .await
    }

    /// Delete a report configuration.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_config(
        &self,
        config_id: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        self.transport
            .delete(self.configs_url(domain_id, &[config_id]), Auth::Bearer(token))
            .ack("Report config deleted successfully")
            .await
    }

    /// Enable a report configuration.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn enable_config(
        &self,
        config_id: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<ReportConfig> {
        self.transport
            .post(
                self.configs_url(domain_id, &[config_id, "enable"]),
                Auth::Bearer(token),
            )
            .send()
            .await
    }

    /// Disable a report configuration.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn disable_config(
        &self,
        config_id: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<ReportConfig> {
        self.transport
            .post(
                self.configs_url(domain_id, &[config_id, "disable"]),
                Auth::Bearer(token),
            )
            .send()
            .await
    }

    /// Set the HTML template a report is rendered with.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn update_template(
        &self,
        config_id: &str,
        report_template: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        self.transport
            .put(
                self.configs_url(domain_id, &[config_id, "template"]),
                Auth::Bearer(token),
            )
            .json(&json!({ "report_template": report_template }))
            .ack("Report template updated successfully")
            .await
    }

    /// Fetch the HTML template of a report.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn view_template(
        &self,
        config_id: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<Template> {
        self.transport
            .get(
                self.configs_url(domain_id, &[config_id, "template"]),
                Auth::Bearer(token),
            )
            .send()
            .await
    }

    /// Revert a report to the default template.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_template(
        &self,
        config_id: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        self.transport
            .delete(
                self.configs_url(domain_id, &[config_id, "template"]),
                Auth::Bearer(token),
            )
            .ack("Report template deleted successfully")
            .await
    }
}
