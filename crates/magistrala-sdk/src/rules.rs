//! Rules engine: message processing rules per domain.

use crate::client::{Auth, Transport};
use crate::encoding::{endpoint, require_id};
use crate::error::Result;
use magistrala_core::{Response, Rule, RulesPage, RulesPageMetadata, Schedule};
use serde_json::json;

const RULES: &str = "rules";

/// Client for the rules engine.
#[derive(Debug, Clone)]
pub struct Rules {
    transport: Transport,
    rules_url: String,
}

impl Rules {
    /// Create a rules client for `rules_url`.
    #[must_use]
    pub fn new(transport: Transport, rules_url: impl Into<String>) -> Self {
        Self {
            transport,
            rules_url: rules_url.into(),
        }
    }

    fn url(&self, domain_id: &str, tail: &[&str]) -> String {
        let mut segments = vec![domain_id, RULES];
        segments.extend_from_slice(tail);
        endpoint(&self.rules_url, &segments)
    }

    /// Create a rule.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn create(&self, rule: &Rule, domain_id: &str, token: &str) -> Result<Rule> {
        self.transport
            .post(self.url(domain_id, &[]), Auth::Bearer(token))
            .json(rule)
            .send()
            .await
    }

    /// Fetch one rule.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn view(&self, rule_id: &str, domain_id: &str, token: &str) -> Result<Rule> {
        self.transport
            .get(self.url(domain_id, &[rule_id]), Auth::Bearer(token))
            .send()
            .await
    }

    /// List the rules of a domain.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn list(
        &self,
        pm: &RulesPageMetadata,
        domain_id: &str,
        token: &str,
    ) -> Result<RulesPage> {
        self.transport
            .get(self.url(domain_id, &[]), Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Update `rule`.
    ///
    /// # Errors
    ///
    /// Returns error if `rule.id` is missing, or on network or API errors.
    pub async fn update(&self, rule: &Rule, domain_id: &str, token: &str) -> Result<Rule> {
        let id = require_id(rule.id.as_deref(), "rule")?;
        self.transport
            .patch(self.url(domain_id, &[id]), Auth::Bearer(token))
            .json(rule)
            .send()
            .await
    }

    /// Replace the tags of a rule.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn update_tags(
        &self,
        rule_id: &str,
        tags: &[String],
        domain_id: &str,
        token: &str,
    ) -> Result<Rule> {
        self.transport
            .patch(self.url(domain_id, &[rule_id, "tags"]), Auth::Bearer(token))
            .json(&json!({ "tags": tags }))
            .send()
            .await
    }

    /// Replace the schedule of a rule.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn update_schedule(
        &self,
        rule_id: &str,
        schedule: &Schedule,
        domain_id: &str,
        token: &str,
    ) -> Result<Rule> {
        self.transport
            .patch(self.url(domain_id, &[rule_id, "schedule"]), Auth::Bearer(token))
            .json(&json!({ "schedule": schedule }))
            .send()
            .await
    }

    /// Delete a rule.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete(&self, rule_id: &str, domain_id: &str, token: &str) -> Result<Response> {
        self.transport
            .delete(self.url(domain_id, &[rule_id]), Auth::Bearer(token))
            .ack("Rule deleted successfully")
            .await
    }

    /// Enable a rule.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn enable(&self, rule_id: &str, domain_id: &str, token: &str) -> Result<Rule> {
        self.transport
            .post(self.url(domain_id, &[rule_id, "enable"]), Auth::Bearer(token))
            .send()
            .await
    }

    /// Disable a rule.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn disable(&self, rule_id: &str, domain_id: &str, token: &str) -> Result<Rule> {
        self.transport
            .post(self.url(domain_id, &[rule_id, "disable"]), Auth::Bearer(token))
            .send()
            .await
    }
}
