//! Journal service: audit trail of entity operations and client telemetry.

use crate::client::{Auth, Transport};
use crate::encoding::endpoint;
use crate::error::Result;
use magistrala_core::{ClientTelemetry, JournalsPage, JournalsPageMetadata};

const JOURNAL: &str = "journal";

/// Client for the journal service.
#[derive(Debug, Clone)]
pub struct Journals {
    transport: Transport,
    journal_url: String,
}

impl Journals {
    /// Create a journal client for `journal_url`.
    #[must_use]
    pub fn new(transport: Transport, journal_url: impl Into<String>) -> Self {
        Self {
            transport,
            journal_url: journal_url.into(),
        }
    }

    /// Journal of one entity of a domain. `entity_type` is one of `client`,
    /// `channel`, `group` or `domain`.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn entity_journals(
        &self,
        entity_type: &str,
        entity_id: &str,
        pm: &JournalsPageMetadata,
        domain_id: &str,
        token: &str,
    ) -> Result<JournalsPage> {
        let url = endpoint(&self.journal_url, &[domain_id, JOURNAL, entity_type, entity_id]);
        self.transport
            .get(url, Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Journal of a user across domains.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn user_journals(
        &self,
        user_id: &str,
        pm: &JournalsPageMetadata,
        token: &str,
    ) -> Result<JournalsPage> {
        let url = endpoint(&self.journal_url, &[JOURNAL, "user", user_id]);
        self.transport
            .get(url, Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Connection counters of a client.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn client_telemetry(
        &self,
        client_id: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<ClientTelemetry> {
        let url = endpoint(
            &self.journal_url,
            &[domain_id, JOURNAL, "client", client_id, "telemetry"],
        );
        self.transport.get(url, Auth::Bearer(token)).send().await
    }
}
