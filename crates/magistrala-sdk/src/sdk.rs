//! Facade bundling every resource client over one transport.

use crate::alarms::Alarms;
use crate::bootstrap::Bootstrap;
use crate::certs::Certs;
use crate::channels::Channels;
use crate::client::Transport;
use crate::clients::Clients;
use crate::config::SdkConfig;
use crate::domains::Domains;
use crate::error::Result;
use crate::groups::Groups;
use crate::health::Health;
use crate::journals::Journals;
use crate::messages::Messages;
use crate::pats::Pats;
use crate::reports::Reports;
use crate::rules::Rules;
use crate::users::Users;

/// Entry point of the SDK.
///
/// ```no_run
/// use magistrala_sdk::{Login, Sdk, SdkConfig};
///
/// # async fn run() -> magistrala_sdk::Result<()> {
/// let sdk = Sdk::new(SdkConfig::with_base_url("http://localhost"))?;
/// let login = Login::new("admin@example.com", "12345678");
/// let token = sdk.users.create_token(&login).await?;
/// # let _ = token;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Sdk {
    /// Users, tokens and passwords
    pub users: Users,
    /// Domains and invitations
    pub domains: Domains,
    /// Clients (devices and applications)
    pub clients: Clients,
    /// Channels and connections
    pub channels: Channels,
    /// Groups and their hierarchy
    pub groups: Groups,
    /// Client certificates
    pub certs: Certs,
    /// Bootstrap configurations
    pub bootstrap: Bootstrap,
    /// Rules engine
    pub rules: Rules,
    /// Reports
    pub reports: Reports,
    /// Alarms
    pub alarms: Alarms,
    /// Personal access tokens
    pub pats: Pats,
    /// Audit journals
    pub journals: Journals,
    /// Publishing and reading messages
    pub messages: Messages,
    /// Health checks
    pub health: Health,
}

impl Sdk {
    /// Validate `config` and build every resource client.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(mut config: SdkConfig) -> Result<Self> {
        config.validate()?;
        let transport = Transport::new(&config)?;
        tracing::debug!(timeout = ?config.timeout, "SDK initialized");

        Ok(Self {
            users: Users::new(transport.clone(), config.users_url.as_str()),
            domains: Domains::new(transport.clone(), config.domains_url.as_str()),
            clients: Clients::new(transport.clone(), config.clients_url.as_str()),
            channels: Channels::new(transport.clone(), config.channels_url.as_str()),
            groups: Groups::new(transport.clone(), config.groups_url.as_str()),
            certs: Certs::new(transport.clone(), config.certs_url.as_str()),
            bootstrap: Bootstrap::new(transport.clone(), config.bootstrap_url.as_str()),
            rules: Rules::new(transport.clone(), config.rules_url.as_str()),
            reports: Reports::new(transport.clone(), config.reports_url.as_str()),
            alarms: Alarms::new(transport.clone(), config.alarms_url.as_str()),
            pats: Pats::new(transport.clone(), config.auth_url.as_str()),
            journals: Journals::new(transport.clone(), config.journal_url.as_str()),
            messages: Messages::new(
                transport.clone(),
                config.readers_url.as_str(),
                config.http_adapter_url.as_str(),
            ),
            health: Health::new(transport, &config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn rejects_invalid_config() {
        let config = SdkConfig::with_base_url("ftp://localhost");
        assert!(matches!(Sdk::new(config), Err(Error::Config(_))));
    }

    #[test]
    fn builds_from_defaults() {
        assert!(Sdk::new(SdkConfig::default()).is_ok());
    }
}
