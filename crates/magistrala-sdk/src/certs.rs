//! Certs service: X.509 certificates for clients.

use crate::client::{Auth, Transport};
use crate::encoding::endpoint;
use crate::error::Result;
use magistrala_core::{Cert, CertsPage, Response};
use serde_json::json;

const CERTS: &str = "certs";

/// Client for the certs service.
#[derive(Debug, Clone)]
pub struct Certs {
    transport: Transport,
    certs_url: String,
}

impl Certs {
    /// Create a certs client for `certs_url`.
    #[must_use]
    pub fn new(transport: Transport, certs_url: impl Into<String>) -> Self {
        Self {
            transport,
            certs_url: certs_url.into(),
        }
    }

    /// Issue a certificate to a client, valid for `ttl` (e.g. `10h`).
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn issue(
        &self,
        client_id: &str,
        ttl: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<Cert> {
        let url = endpoint(&self.certs_url, &[domain_id, CERTS]);
        self.transport
            .post(url, Auth::Bearer(token))
            .json(&json!({ "client_id": client_id, "ttl": ttl }))
            .send()
            .await
    }

    /// Serials of every certificate issued to a client.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn view_by_client(
        &self,
        client_id: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<CertsPage> {
        let url = endpoint(&self.certs_url, &[domain_id, "serials", client_id]);
        self.transport.get(url, Auth::Bearer(token)).send().await
    }

    /// Fetch one certificate.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn view(&self, cert_id: &str, domain_id: &str, token: &str) -> Result<Cert> {
        let url = endpoint(&self.certs_url, &[domain_id, CERTS, cert_id]);
        self.transport.get(url, Auth::Bearer(token)).send().await
    }

    /// Revoke a certificate.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn revoke(&self, cert_id: &str, domain_id: &str, token: &str) -> Result<Response> {
        let url = endpoint(&self.certs_url, &[domain_id, CERTS, cert_id]);
        self.transport
            .delete(url, Auth::Bearer(token))
            .ack("Cert revoked successfully")
            .await
    }
}
