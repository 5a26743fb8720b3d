//! Channels service: message channels and client connections.

use crate::client::{roles_flag, Auth, Transport};
use crate::encoding::{endpoint, require_id};
use crate::error::Result;
use crate::roles::Roles;
use magistrala_core::{Channel, ChannelsPage, ConnectionType, PageMetadata, Response};
use serde::Serialize;
use serde_json::json;

const CHANNELS: &str = "channels";

#[derive(Serialize)]
struct ConnectOne<'a> {
    client_ids: &'a [String],
    channel_id: &'a str,
    types: &'a [ConnectionType],
}

#[derive(Serialize)]
struct ConnectMany<'a> {
    client_ids: &'a [String],
    channel_ids: &'a [String],
    types: &'a [ConnectionType],
}

/// Client for the channels service.
#[derive(Debug, Clone)]
pub struct Channels {
    transport: Transport,
    channels_url: String,
}

impl Channels {
    /// Create a channels client for `channels_url`.
    #[must_use]
    pub fn new(transport: Transport, channels_url: impl Into<String>) -> Self {
        Self {
            transport,
            channels_url: channels_url.into(),
        }
    }

    fn url(&self, domain_id: &str, tail: &[&str]) -> String {
        let mut segments = vec![domain_id, CHANNELS];
        segments.extend_from_slice(tail);
        endpoint(&self.channels_url, &segments)
    }

    /// Role operations on the channels of `domain_id`.
    #[must_use]
    pub fn roles(&self, domain_id: &str) -> Roles {
        Roles::new(
            self.transport.clone(),
            self.channels_url.clone(),
            &[domain_id, CHANNELS],
        )
    }

    /// Create a channel.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn create(&self, channel: &Channel, domain_id: &str, token: &str) -> Result<Channel> {
        self.transport
            .post(self.url(domain_id, &[]), Auth::Bearer(token))
            .json(channel)
            .send()
            .await
    }

    /// Create several channels in one request.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn create_bulk(
        &self,
        channels: &[Channel],
        domain_id: &str,
        token: &str,
    ) -> Result<ChannelsPage> {
        self.transport
            .post(self.url(domain_id, &["bulk"]), Auth::Bearer(token))
            .json(channels)
            .send()
            .await
    }

    /// Fetch one channel, optionally with the caller's roles on it.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn channel(
        &self,
        channel_id: &str,
        domain_id: &str,
        list_roles: Option<bool>,
        token: &str,
    ) -> Result<Channel> {
        self.transport
            .get(self.url(domain_id, &[channel_id]), Auth::Bearer(token))
            .pairs(&roles_flag(list_roles))
            .send()
            .await
    }

    /// List the channels of a domain.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn channels(
        &self,
        pm: &PageMetadata,
        domain_id: &str,
        token: &str,
    ) -> Result<ChannelsPage> {
        self.transport
            .get(self.url(domain_id, &[]), Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Update name and metadata of `channel`.
    ///
    /// # Errors
    ///
    /// Returns error if `channel.id` is missing, or on network or API errors.
    pub async fn update(&self, channel: &Channel, domain_id: &str, token: &str) -> Result<Channel> {
        let id = require_id(channel.id.as_deref(), "channel")?;
        self.transport
            .patch(self.url(domain_id, &[id]), Auth::Bearer(token))
            .json(channel)
            .send()
            .await
    }

    /// Replace the tags of `channel`.
    ///
    /// # Errors
    ///
    /// Returns error if `channel.id` is missing, or on network or API errors.
    pub async fn update_tags(
        &self,
        channel: &Channel,
        domain_id: &str,
        token: &str,
    ) -> Result<Channel> {
        let id = require_id(channel.id.as_deref(), "channel")?;
        self.transport
            .patch(self.url(domain_id, &[id, "tags"]), Auth::Bearer(token))
            .json(&json!({ "tags": channel.tags }))
            .send()
            .await
    }

    /// Enable a channel.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn enable(&self, channel_id: &str, domain_id: &str, token: &str) -> Result<Channel> {
        self.transport
            .post(self.url(domain_id, &[channel_id, "enable"]), Auth::Bearer(token))
            .send()
            .await
    }

    /// Disable a channel.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn disable(&self, channel_id: &str, domain_id: &str, token: &str) -> Result<Channel> {
        self.transport
            .post(self.url(domain_id, &[channel_id, "disable"]), Auth::Bearer(token))
            .send()
            .await
    }

    /// Delete a channel.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete(&self, channel_id: &str, domain_id: &str, token: &str) -> Result<Response> {
        self.transport
            .delete(self.url(domain_id, &[channel_id]), Auth::Bearer(token))
            .ack("Channel deleted successfully")
            .await
    }

    /// Connect clients to one channel.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn connect_clients(
        &self,
        channel_id: &str,
        client_ids: &[String],
        types: &[ConnectionType],
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        let body = ConnectOne {
            client_ids,
            channel_id,
            types,
        };
        self.transport
            .post(self.url(domain_id, &[channel_id, "connect"]), Auth::Bearer(token))
            .json(&body)
            .ack("Clients connected successfully")
            .await
    }

    /// Connect every client to every channel.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn connect(
        &self,
        client_ids: &[String],
        channel_ids: &[String],
        types: &[ConnectionType],
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        let body = ConnectMany {
            client_ids,
            channel_ids,
            types,
        };
        self.transport
            .post(self.url(domain_id, &["connect"]), Auth::Bearer(token))
            .json(&body)
            .ack("Clients connected successfully")
            .await
    }

    /// Disconnect every client from every channel.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn disconnect(
        &self,
        client_ids: &[String],
        channel_ids: &[String],
        types: &[ConnectionType],
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        let body = ConnectMany {
            client_ids,
            channel_ids,
            types,
        };
        self.transport
            .post(self.url(domain_id, &["disconnect"]), Auth::Bearer(token))
            .json(&body)
            .ack("Clients disconnected successfully")
            .await
    }

    /// Disconnect clients from one channel.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn disconnect_clients(
        &self,
        channel_id: &str,
        client_ids: &[String],
        types: &[ConnectionType],
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        let body = ConnectOne {
            client_ids,
            channel_id,
            types,
        };
        self.transport
            .post(
                self.url(domain_id, &[channel_id, "disconnect"]),
                Auth::Bearer(token),
            )
            .json(&body)
            .ack("Clients disconnected successfully")
            .await
    }

    /// Place a channel under a group.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn set_parent_group(
        &self,
        channel_id: &str,
        parent_group_id: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        self.transport
            .post(self.url(domain_id, &[channel_id, "parent"]), Auth::Bearer(token))
            .json(&json!({ "parent_group_id": parent_group_id }))
            .ack("Channel group parent added successfully")
            .await
    }

    /// Detach a channel from its group.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn remove_parent_group(
        &self,
        channel_id: &str,
        domain_id: &str,
        token: &str,
    ) -> Result<Response> {
        self.transport
            .delete(self.url(domain_id, &[channel_id, "parent"]), Auth::Bearer(token))
            .ack("Channel group parent deleted successfully")
            .await
    }
}
