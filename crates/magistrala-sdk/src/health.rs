//! Service health checks.

use crate::client::{Auth, Transport};
use crate::config::SdkConfig;
use crate::encoding::endpoint;
use crate::error::{Error, Result};
use magistrala_core::HealthInfo;
use std::fmt;
use std::str::FromStr;

/// A platform service exposing `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Service {
    Users,
    Clients,
    Channels,
    Domains,
    Groups,
    Certs,
    Bootstrap,
    Reader,
    HttpAdapter,
    Journal,
    /// Served by the domains service
    Invitations,
    /// Served by the auth service
    Pats,
    Rules,
    Reports,
    Alarms,
}

impl Service {
    /// Every known service.
    pub const ALL: [Service; 15] = [
        Service::Users,
        Service::Clients,
        Service::Channels,
        Service::Domains,
        Service::Groups,
        Service::Certs,
        Service::Bootstrap,
        Service::Reader,
        Service::HttpAdapter,
        Service::Journal,
        Service::Invitations,
        Service::Pats,
        Service::Rules,
        Service::Reports,
        Service::Alarms,
    ];

    /// Name accepted by [`Service::from_str`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Service::Users => "users",
            Service::Clients => "clients",
            Service::Channels => "channels",
            Service::Domains => "domains",
            Service::Groups => "groups",
            Service::Certs => "certs",
            Service::Bootstrap => "bootstrap",
            Service::Reader => "reader",
            Service::HttpAdapter => "http-adapter",
            Service::Journal => "journal",
            Service::Invitations => "invitations",
            Service::Pats => "pats",
            Service::Rules => "rules",
            Service::Reports => "reports",
            Service::Alarms => "alarms",
        }
    }

    fn base_url(self, config: &SdkConfig) -> &str {
        match self {
            Service::Users => &config.users_url,
            Service::Clients => &config.clients_url,
            Service::Channels => &config.channels_url,
            Service::Domains | Service::Invitations => &config.domains_url,
            Service::Groups => &config.groups_url,
            Service::Certs => &config.certs_url,
            Service::Bootstrap => &config.bootstrap_url,
            Service::Reader => &config.readers_url,
            Service::HttpAdapter => &config.http_adapter_url,
            Service::Journal => &config.journal_url,
            Service::Pats => &config.auth_url,
            Service::Rules => &config.rules_url,
            Service::Reports => &config.reports_url,
            Service::Alarms => &config.alarms_url,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Service::ALL
            .into_iter()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| Error::UnknownService(s.to_string()))
    }
}

/// Client for service health checks.
#[derive(Debug, Clone)]
pub struct Health {
    transport: Transport,
    config: SdkConfig,
}

impl Health {
    /// Create a health client resolving service URLs from `config`.
    #[must_use]
    pub fn new(transport: Transport, config: &SdkConfig) -> Self {
        Self {
            transport,
            config: config.clone(),
        }
    }

    fn url(&self, service: Service) -> String {
        endpoint(service.base_url(&self.config), &["health"])
    }

    /// Fetch the health report of `service`.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn health(&self, service: Service) -> Result<HealthInfo> {
        self.transport
            .get(self.url(service), Auth::None)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn parses_service_names() {
        assert_eq!("http-adapter".parse::<Service>().unwrap(), Service::HttpAdapter);
        assert_eq!("reader".parse::<Service>().unwrap(), Service::Reader);
        for service in Service::ALL {
            assert_eq!(service.as_str().parse::<Service>().unwrap(), service);
        }
    }

    #[test]
    fn rejects_unknown_service() {
        let err = "dashboards".parse::<Service>().unwrap_err();
        assert!(matches!(err, Error::UnknownService(name) if name == "dashboards"));
    }

    #[test]
    fn shared_services_resolve_to_owner_url() {
        let config = SdkConfig {
            domains_url: "http://domains:9003".to_string(),
            auth_url: "http://auth:9001".to_string(),
            ..SdkConfig::default()
        };
        let health = Health::new(
            Transport::with_timeout(Duration::from_secs(1)).unwrap(),
            &config,
        );
        assert_eq!(
            health.url(Service::Invitations),
            "http://domains:9003/health"
        );
        assert_eq!(health.url(Service::Pats), "http://auth:9001/health");
    }

    #[test]
    fn every_service_resolves_a_health_url() {
        let health = Health::new(
            Transport::with_timeout(Duration::from_secs(1)).unwrap(),
            &SdkConfig::with_base_url("http://localhost:8080/"),
        );
        for service in Service::ALL {
            assert_eq!(health.url(service), "http://localhost:8080/health");
        }
    }
}
