//! Clients service: devices and applications inside a domain.

use crate::client::{roles_flag, Auth, Transport};
use crate::encoding::{endpoint, require_id};
use crate::error::Result;
use crate::roles::Roles;
use magistrala_core::{Client, ClientsPage, PageMetadata, Response};
use serde_json::json;

const CLIENTS: &str = "clients";

/// Client for the clients service.
#[derive(Debug, Clone)]
pub struct Clients {
    transport: Transport,
    clients_url: String,
}

impl Clients {
    /// Create a clients client for `clients_url`.
    #[must_use]
    pub fn new(transport: Transport, clients_url: impl Into<String>) -> Self {
        Self {
            transport,
            clients_url: clients_url.into(),
        }
    }

    fn url(&self, domain_id: &str, tail: &[&str]) -> String {
        let mut segments = vec![domain_id, CLIENTS];
        segments.extend_from_slice(tail);
        endpoint(&self.clients_url, &segments)
    }

    /// Role operations on the clients of `domain_id`.
    #[must_use]
    pub fn roles(&self, domain_id: &str) -> Roles {
        Roles::new(
            self.transport.clone(),
            self.clients_url.clone(),
            &[domain_id, CLIENTS],
        )
    }

    /// Create a client. The server assigns id and secret unless given.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn create(&self, client: &Client, domain_id: &str, token: &str) -> Result<Client> {
        self.transport
            .post(self.url(domain_id, &[]), Auth::Bearer(token))
            .json(client)
            .send()
            .await
    }

    /// Create several clients in one request.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn create_bulk(
        &self,
        clients: &[Client],
        domain_id: &str,
        token: &str,
    ) -> Result<ClientsPage> {
        self.transport
            .post(self.url(domain_id, &["bulk"]), Auth::Bearer(token))
            .json(clients)
            .send()
            .await
    }

    /// Enable a client.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn enable(&self, client_id: &str, domain_id: &str, token: &str) -> Result<Client> {
        self.transport
            .post(self.url(domain_id, &[client_id, "enable"]), Auth::Bearer(token))
            .send()
            .await
    }

    /// Disable a client.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn disable(&self, client_id: &str, domain_id: &str, token: &str) -> Result<Client> {
        self.transport
            .post(self.url(domain_id, &[client_id, "disable"]), Auth::Bearer(token))
            .send()
            .await
    }

    /// Update name and metadata of `client`.
    ///
    /// # Errors
    ///
    /// Returns error if `client.id` is missing, or on network or API errors.
    pub async fn update(&self, client: &Client, domain_id: &str, token: &str) -> Result<Client> {
        let id = require_id(client.id.as_deref(), "client")?;
        self.transport
            .patch(self.url(domain_id, &[id]), Auth::Bearer(token))
            .json(client)
            .send()
            .await
    }

    /// Replace the secret of `client`.
    ///
    /// # Errors
    ///
    /// Returns error if `client.id` is missing, or on network or API errors.
    pub async fn update_secret(
        &self,
        client: &Client,
        secret: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<Client> {
        let id = require_id(client.id.as_deref(), "client")?;
        self.transport
            .patch(self.url(domain_id, &[id, "secret"]), Auth::Bearer(token))
            .json(&json!({ "secret": secret }))
            .send()
            .await
    }

    /// Replace the tags of `client`.
    ///
    /// # Errors
    ///
    /// Returns error if `client.id` is missing, or on network or API errors.
    pub async fn update_tags(
        &self,
        client: &Client,
        domain_id: &str,
        token: &str,
    ) -> Result<Client> {
        let id = require_id(client.id.as_deref(), "client")?;
        self.transport
            .patch(self.url(domain_id, &[id, "tags"]), Auth::Bearer(token))
            .json(&json!({ "tags": client.tags }))
            .send()
            .await
    }

    /// Fetch one client, optionally with the caller's roles on it.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn client(
        &self,
        client_id: &str,
        domain_id: &str,
        list_roles: Option<bool>,
        token: &str,
    ) -> Result<Client> {
        self.transport
            .get(self.url(domain_id, &[client_id]), Auth::Bearer(token))
            .pairs(&roles_flag(list_roles))
            .send()
            .await
    }

    /// List the clients of a domain.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn clients(
        &self,
        pm: &PageMetadata,
        domain_id: &str,
        token: &str,
    ) -> Result<ClientsPage> {
        self.transport
            .get(self.url(domain_id, &[]), Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Place a client under a group.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn set_parent_group(
        &self,
        client_id: &str,
        parent_group_id: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        self.transport
            .post(self.url(domain_id, &[client_id, "parent"]), Auth::Bearer(token))
            .json(&json!({ "parent_group_id": parent_group_id }))
            .ack("Client group parent added successfully")
            .await
    }

    /// Detach a client from its group.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn remove_parent_group(
        &self,
        client_id: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        self.transport
            .delete(self.url(domain_id, &[client_id, "parent"]), Auth::Bearer(token))
            .ack("Client group parent deleted successfully")
            .await
    }

    /// Delete a client.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete(&self, client_id: &str, domain_id: &str, token: &str) -> Result<Response> {
        self.transport
            .delete(self.url(domain_id, &[client_id]), Auth::Bearer(token))
            .ack("Client deleted successfully")
            .await
    }
}
