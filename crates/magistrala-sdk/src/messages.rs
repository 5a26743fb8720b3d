//! Publishing through the HTTP adapter and reading stored messages.
//!
//! Topics are dotted: `channel.sub.topic`. On publish the subtopic becomes
//! path segments after the channel; on read it becomes the `subtopic` filter.

use crate::client::{Auth, Transport};
use crate::encoding::endpoint;
use crate::error::Result;
use magistrala_core::{MessagesPage, MessagesPageMetadata, Response};
use magistrala_proto::{SenMLRecord, Topic};

/// Client for the HTTP adapter and the message readers.
#[derive(Debug, Clone)]
pub struct Messages {
    transport: Transport,
    readers_url: String,
    http_adapter_url: String,
}

impl Messages {
    /// Create a messages client.
    #[must_use]
    pub fn new(
        transport: Transport,
        readers_url: impl Into<String>,
        http_adapter_url: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            readers_url: readers_url.into(),
            http_adapter_url: http_adapter_url.into(),
        }
    }

    fn publish_url(&self, domain_id: &str, topic: &Topic) -> String {
        endpoint(&self.http_adapter_url, &topic.adapter_segments(domain_id))
    }

    /// Publish a raw payload on `topic` as the client owning `secret`.
    ///
    /// # Errors
    ///
    /// Returns error if the topic is malformed, or on network or API errors.
    pub async fn send(
        &self,
        domain_id: &str,
        topic: &str,
        payload: impl Into<String>,
        secret: &str,
    ) -> Result<Response> {
        let topic = Topic::parse(topic)?;
        self.transport
            .post(self.publish_url(domain_id, &topic), Auth::Client(secret))
            .body(payload.into())
            .ack("Message sent successfully")
            .await
    }

    /// Publish a SenML pack.
    ///
    /// # Errors
    ///
    /// Returns error if the topic is malformed, or on network or API errors.
    pub async fn send_senml(
        &self,
        domain_id: &str,
        topic: &str,
        records: &[SenMLRecord],
        secret: &str,
    ) -> Result<Response> {
        let payload = SenMLRecord::pack(records)?;
        self.send(domain_id, topic, payload, secret).await
    }

    /// Read messages stored for a channel. A dotted `channel` narrows the
    /// read to its subtopic unless `pm.subtopic` is already set.
    ///
    /// # Errors
    ///
    /// Returns error if the channel is malformed, or on network or API errors.
    pub async fn read(
        &self,
        channel: &str,
        pm: &MessagesPageMetadata,
        domain_id: &str,
        token: &str,
    ) -> Result<MessagesPage> {
        let topic = Topic::parse(channel)?;
        let url = endpoint(
            &self.readers_url,
            &[domain_id, "channels", &topic.channel, "messages"],
        );
        let call = self.transport.get(url, Auth::Bearer(token));
        let call = match topic.subtopic() {
            Some(subtopic) if pm.subtopic.is_none() => {
                let mut pm = pm.clone();
                pm.subtopic = Some(subtopic);
                call.query(&pm)?
            }
            _ => call.query(pm)?,
        };
        call.send().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn messages() -> Messages {
        Messages::new(
            Transport::with_timeout(Duration::from_secs(1)).unwrap(),
            "http://readers:9011",
            "http://adapter:8008",
        )
    }

    #[test]
    fn publish_url_splits_subtopic() {
        let topic = Topic::parse("ch1.room.temp").unwrap();
        assert_eq!(
            messages().publish_url("d1", &topic),
            "http://adapter:8008/m/d1/c/ch1/room/temp"
        );
    }

    #[test]
    fn publish_url_without_subtopic() {
        let topic = Topic::parse("ch1").unwrap();
        assert_eq!(
            messages().publish_url("d1", &topic),
            "http://adapter:8008/m/d1/c/ch1"
        );
    }
}
