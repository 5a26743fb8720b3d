//! Bootstrap service: provisioning records devices fetch on first start.
//!
//! Management calls use a user token. Devices fetch their record with
//! `Authorization: Client <external_key>`, or through the secure variant
//! where the key and the response are AES-256-CFB encrypted with a shared
//! crypto key.

use crate::client::{Auth, Transport};
use crate::encoding::{endpoint, require_id};
use crate::error::Result;
use magistrala_core::{BootstrapConfig, BootstrapPage, PageMetadata, Response};
use magistrala_proto::cipher;
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct CertsUpdate<'a> {
    client_cert: Option<&'a str>,
    client_key: Option<&'a str>,
    ca_cert: Option<&'a str>,
}

/// Client for the bootstrap service.
#[derive(Debug, Clone)]
pub struct Bootstrap {
    transport: Transport,
    bootstrap_url: String,
}

impl Bootstrap {
    /// Create a bootstrap client for `bootstrap_url`.
    #[must_use]
    pub fn new(transport: Transport, bootstrap_url: impl Into<String>) -> Self {
        Self {
            transport,
            bootstrap_url: bootstrap_url.into(),
        }
    }

    fn configs_url(&self, domain_id: &str, tail: &[&str]) -> String {
        let mut segments = vec![domain_id, "clients", "configs"];
        segments.extend_from_slice(tail);
        endpoint(&self.bootstrap_url, &segments)
    }

    /// Add a bootstrap configuration.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn add(
        &self,
        config: &BootstrapConfig,
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        self.transport
            .post(self.configs_url(domain_id, &[]), Auth::Bearer(token))
            .json(config)
            .ack("Bootstrap configuration created")
            .await
    }

    /// Activate or deactivate a configuration through `config.state`.
    ///
    /// # Errors
    ///
    /// Returns error if `config.client_id` is missing, or on network or API
    /// errors.
    pub async fn whitelist(
        &self,
        config: &BootstrapConfig,
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        let client_id = require_id(config.client_id.as_deref(), "client")?;
        let url = endpoint(
            &self.bootstrap_url,
            &[domain_id, "clients", "state", client_id],
        );
        self.transport
            .put(url, Auth::Bearer(token))
            .json(&json!({ "state": config.state }))
            .ack("Bootstrap configuration state updated successfully")
            .await
    }

    /// Update name and content of a configuration.
    ///
    /// # Errors
    ///
    /// Returns error if `config.client_id` is missing, or on network or API
    /// errors.
    pub async fn update(
        &self,
        config: &BootstrapConfig,
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        let client_id = require_id(config.client_id.as_deref(), "client")?;
        self.transport
            .put(self.configs_url(domain_id, &[client_id]), Auth::Bearer(token))
            .json(config)
            .ack("Bootstrap configuration updated successfully")
            .await
    }

    /// Fetch the configuration of a client.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn view(
        &self,
        client_id: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<BootstrapConfig> {
        self.transport
            .get(self.configs_url(domain_id, &[client_id]), Auth::Bearer(token))
            .send()
            .await
    }

    /// Replace the certificates of a configuration.
    ///
    /// # Errors
    ///
    /// Returns error if `config.client_id` is missing, or on network or API
    /// errors.
    pub async fn update_certs(
        &self,
        config: &BootstrapConfig,
        domain_id: &str,
        token: &str,
    ) -> Result<BootstrapConfig> {
        let client_id = require_id(config.client_id.as_deref(), "client")?;
        let body = CertsUpdate {
            client_cert: config.client_cert.as_deref(),
            client_key: config.client_key.as_deref(),
            ca_cert: config.ca_cert.as_deref(),
        };
        self.transport
            .patch(
                self.configs_url(domain_id, &["certs", client_id]),
                Auth::Bearer(token),
            )
            .json(&body)
            .send()
            .await
    }

    /// Delete the configuration of a client.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete(&self, client_id: &str, domain_id: &str, token: &str) -> Result<Response> {
        self.transport
            .delete(self.configs_url(domain_id, &[client_id]), Auth::Bearer(token))
            .ack("Bootstrap configuration deleted")
            .await
    }

    /// Fetch a configuration as the device would.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn bootstrap(&self, external_id: &str, external_key: &str) -> Result<BootstrapConfig> {
        let url = endpoint(&self.bootstrap_url, &["clients", "bootstrap", external_id]);
        self.transport
            .get(url, Auth::Client(external_key))
            .send()
            .await
    }

    /// List configurations of a domain.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn bootstraps(
        &self,
        pm: &PageMetadata,
        domain_id: &str,
        token: &str,
    ) -> Result<BootstrapPage> {
        self.transport
            .get(self.configs_url(domain_id, &[]), Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Replace the channels a configuration connects its client to.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn update_connections(
        &self,
        client_id: &str,
        channels: &[String],
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        self.transport
            .put(
                self.configs_url(domain_id, &["connections", client_id]),
                Auth::Bearer(token),
            )
            .json(&json!({ "channels": channels }))
            .ack("Bootstrap connection successful")
            .await
    }

    /// Fetch a configuration over the encrypted channel.
    ///
    /// The external key is encrypted with `crypto_key` before it is sent and
    /// the hex response is decrypted with the same key.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors, or if the response cannot be
    /// decrypted into a configuration.
    pub async fn secure_bootstrap(
        &self,
        external_id: &str,
        external_key: &str,
        crypto_key: &str,
    ) -> Result<BootstrapConfig> {
        let encrypted_key = cipher::encrypt(external_key, crypto_key)?;
        let url = endpoint(
            &self.bootstrap_url,
            &["clients", "bootstrap", "secure", external_id],
        );
        let encrypted = self
            .transport
            .get(url, Auth::Client(&encrypted_key))
            .text()
            .await?;
        tracing::debug!(external_id, "Decrypting secure bootstrap response");
        Ok(cipher::decrypt_json(encrypted.trim().trim_matches('"'), crypto_key)?)
    }
}
