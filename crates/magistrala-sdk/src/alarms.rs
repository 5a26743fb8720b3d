//! Alarms raised by rules.

use crate::client::{Auth, Transport};
use crate::encoding::{endpoint, require_id};
use crate::error::Result;
use magistrala_core::{Alarm, AlarmPageMeta, AlarmsPage, Response};

/// Client for the alarms service.
#[derive(Debug, Clone)]
pub struct Alarms {
    transport: Transport,
    alarms_url: String,
}

impl Alarms {
    /// Create an alarms client for `alarms_url`.
    #[must_use]
    pub fn new(transport: Transport, alarms_url: impl Into<String>) -> Self {
        Self {
            transport,
            alarms_url: alarms_url.into(),
        }
    }

    /// List alarms.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn list(&self, pm: &AlarmPageMeta, domain_id: &str, token: &str) -> Result<AlarmsPage> {
        let url = endpoint(&self.alarms_url, &[domain_id, "alarms"]);
        self.transport
            .get(url, Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Fetch one alarm.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn view(&self, alarm_id: &str, domain_id: &str, token: &str) -> Result<Alarm> {
        let url = endpoint(&self.alarms_url, &[domain_id, "alarms", alarm_id]);
        self.transport.get(url, Auth::Bearer(token)).send().await
    }

    /// Update an alarm, e.g. to assign or acknowledge it.
    ///
    /// # Errors
    ///
    /// Returns error if `alarm.id` is missing, or on network or API errors.
    pub async fn update(&self, alarm: &Alarm, domain_id: &str, token: &str) -> Result<Alarm> {
        let id = require_id(alarm.id.as_deref(), "alarm")?;
        let url = endpoint(&self.alarms_url, &[domain_id, "alarms", id]);
        self.transport
            .put(url, Auth::Bearer(token))
            .json(alarm)
            .send()
            .await
    }

    /// Delete an alarm.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete(&self, alarm_id: &str, domain_id: &str, token: &str) -> Result<Response> {
        let url = endpoint(&self.alarms_url, &[domain_id, "alarms", alarm_id]);
        self.transport
            .delete(url, Auth::Bearer(token))
            .ack("Alarm deleted successfully")
            .await
    }
}
