//! SDK configuration.

use crate::error::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Default base URL of every service.
pub const DEFAULT_URL: &str = "http://localhost";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Base URLs of the platform services and transport settings.
#[derive(Debug, Clone)]
pub struct SdkConfig {
    /// Users service
    pub users_url: String,
    /// Channels service
    pub channels_url: String,
    /// Domains service, also serving invitations
    pub domains_url: String,
    /// Clients service
    pub clients_url: String,
    /// Groups service
    pub groups_url: String,
    /// Certs service
    pub certs_url: String,
    /// Message readers
    pub readers_url: String,
    /// HTTP adapter
    pub http_adapter_url: String,
    /// Bootstrap service
    pub bootstrap_url: String,
    /// Journal service
    pub journal_url: String,
    /// Rules engine
    pub rules_url: String,
    /// Reports service
    pub reports_url: String,
    /// Auth service, serving personal access tokens
    pub auth_url: String,
    /// Alarms service
    pub alarms_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// TLS settings for `https` services
    pub tls: TlsConfig,
}

/// Optional TLS material.
#[derive(Debug, Clone, Default)]
pub struct TlsConfig {
    /// Custom CA certificate for self-signed server certs (PEM format)
    pub ca_cert_path: Option<PathBuf>,
    /// Client certificate for mTLS (PEM format)
    pub client_cert_path: Option<PathBuf>,
    /// Client private key for mTLS (PEM format)
    pub client_key_path: Option<PathBuf>,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            users_url: DEFAULT_URL.to_string(),
            channels_url: DEFAULT_URL.to_string(),
            domains_url: DEFAULT_URL.to_string(),
            clients_url: DEFAULT_URL.to_string(),
            groups_url: DEFAULT_URL.to_string(),
            certs_url: DEFAULT_URL.to_string(),
            readers_url: DEFAULT_URL.to_string(),
            http_adapter_url: DEFAULT_URL.to_string(),
            bootstrap_url: DEFAULT_URL.to_string(),
            journal_url: DEFAULT_URL.to_string(),
            rules_url: DEFAULT_URL.to_string(),
            reports_url: DEFAULT_URL.to_string(),
            auth_url: DEFAULT_URL.to_string(),
            alarms_url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            tls: TlsConfig::default(),
        }
    }
}

impl SdkConfig {
    /// Point every service at the same base URL.
    #[must_use]
    pub fn with_base_url(url: &str) -> Self {
        let mut config = Self::default();
        for (_, field) in config.urls_mut() {
            *field = url.to_string();
        }
        config
    }

    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MG_USERS_URL`, `MG_CHANNELS_URL`, `MG_DOMAINS_URL`, `MG_CLIENTS_URL`,
    ///   `MG_GROUPS_URL`, `MG_CERTS_URL`, `MG_READERS_URL`,
    ///   `MG_HTTP_ADAPTER_URL`, `MG_BOOTSTRAP_URL`, `MG_JOURNAL_URL`,
    ///   `MG_RULES_URL`, `MG_REPORTS_URL`, `MG_AUTH_URL`, `MG_ALARMS_URL`:
    ///   service base URLs
    /// - `MG_TIMEOUT_SECS`: request timeout in seconds
    /// - `MG_CA_CERT`, `MG_CLIENT_CERT`, `MG_CLIENT_KEY`: TLS material
    ///
    /// # Errors
    ///
    /// Returns error if `MG_TIMEOUT_SECS` is not a number.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns error if the timeout is not a number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        for (var, field) in config.urls_mut() {
            if let Some(url) = lookup(var) {
                *field = url;
            }
        }

        if let Some(secs) = lookup("MG_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|e| Error::Config(format!("invalid MG_TIMEOUT_SECS {secs:?}: {e}")))?;
            config.timeout = Duration::from_secs(secs);
        }

        config.tls.ca_cert_path = lookup("MG_CA_CERT").map(PathBuf::from);
        config.tls.client_cert_path = lookup("MG_CLIENT_CERT").map(PathBuf::from);
        config.tls.client_key_path = lookup("MG_CLIENT_KEY").map(PathBuf::from);

        Ok(config)
    }

    /// Check every URL and strip trailing slashes.
    ///
    /// # Errors
    ///
    /// Returns error if a URL does not parse or is not `http`/`https`.
    pub fn validate(&mut self) -> Result<()> {
        for (var, field) in self.urls_mut() {
            let url = Url::parse(field)
                .map_err(|e| Error::Config(format!("{var}: invalid URL {field:?}: {e}")))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(Error::Config(format!(
                    "{var}: unsupported scheme {:?}",
                    url.scheme()
                )));
            }
            let trimmed = field.trim_end_matches('/').len();
            field.truncate(trimmed);
        }

        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be positive".to_string()));
        }

        Ok(())
    }

    /// Whether any service is reached over TLS.
    #[must_use]
    pub fn uses_tls(&self) -> bool {
        self.urls().iter().any(|url| url.starts_with("https://"))
    }

    fn urls(&self) -> [&str; 14] {
        [
            &self.users_url,
            &self.channels_url,
            &self.domains_url,
            &self.clients_url,
            &self.groups_url,
            &self.certs_url,
            &self.readers_url,
            &self.http_adapter_url,
            &self.bootstrap_url,
            &self.journal_url,
            &self.rules_url,
            &self.reports_url,
            &self.auth_url,
            &self.alarms_url,
        ]
    }

    fn urls_mut(&mut self) -> [(&'static str, &mut String); 14] {
        [
            ("MG_USERS_URL", &mut self.users_url),
            ("MG_CHANNELS_URL", &mut self.channels_url),
            ("MG_DOMAINS_URL", &mut self.domains_url),
            ("MG_CLIENTS_URL", &mut self.clients_url),
            ("MG_GROUPS_URL", &mut self.groups_url),
            ("MG_CERTS_URL", &mut self.certs_url),
            ("MG_READERS_URL", &mut self.readers_url),
            ("MG_HTTP_ADAPTER_URL", &mut self.http_adapter_url),
            ("MG_BOOTSTRAP_URL", &mut self.bootstrap_url),
            ("MG_JOURNAL_URL", &mut self.journal_url),
            ("MG_RULES_URL", &mut self.rules_url),
            ("MG_REPORTS_URL", &mut self.reports_url),
            ("MG_AUTH_URL", &mut self.auth_url),
            ("MG_ALARMS_URL", &mut self.alarms_url),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn config_default() {
        let config = SdkConfig::default();
        assert_eq!(config.users_url, "http://localhost");
        assert_eq!(config.alarms_url, "http://localhost");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.tls.ca_cert_path.is_none());
        assert!(!config.uses_tls());
    }

    #[test]
    fn lookup_overrides_defaults() {
        let vars: HashMap<&str, &str> = [
            ("MG_USERS_URL", "http://users:9002"),
            ("MG_HTTP_ADAPTER_URL", "http://adapter:8008"),
            ("MG_TIMEOUT_SECS", "5"),
            ("MG_CA_CERT", "/etc/ssl/ca.pem"),
        ]
        .into_iter()
        .collect();

        let config =
            SdkConfig::from_lookup(|key| vars.get(key).map(ToString::to_string)).unwrap();
        assert_eq!(config.users_url, "http://users:9002");
        assert_eq!(config.http_adapter_url, "http://adapter:8008");
        assert_eq!(config.clients_url, "http://localhost");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.tls.ca_cert_path, Some(PathBuf::from("/etc/ssl/ca.pem")));
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let err = SdkConfig::from_lookup(|key| {
            (key == "MG_TIMEOUT_SECS").then(|| "soon".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn validate_strips_trailing_slashes() {
        let mut config = SdkConfig::with_base_url("https://mg.example.com/");
        config.validate().unwrap();
        assert_eq!(config.domains_url, "https://mg.example.com");
        assert!(config.uses_tls());
    }

    #[test]
    fn validate_rejects_bad_urls() {
        let mut config = SdkConfig {
            certs_url: "not a url".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("MG_CERTS_URL"));

        let mut config = SdkConfig {
            readers_url: "ftp://readers".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
