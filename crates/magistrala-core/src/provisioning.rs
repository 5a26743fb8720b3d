//! Certificates and bootstrap configurations.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// An X.509 certificate issued to a client.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cert {
    pub client_id: Option<String>,
    pub cert_serial: Option<String>,
    pub client_key: Option<String>,
    pub client_cert: Option<String>,
    pub expiration: Option<String>,
}

/// Page of certificates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertsPage {
    pub certs: Vec<Cert>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// Provisioning record a device fetches with its external id and key.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    pub channels: Option<Vec<String>>,
    pub external_id: Option<String>,
    pub external_key: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub name: Option<String>,
    pub client_cert: Option<String>,
    pub client_key: Option<String>,
    pub ca_cert: Option<String>,
    pub content: Option<String>,
    /// `0` inactive, `1` active
    pub state: Option<i32>,
}

/// Page of bootstrap configurations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapPage {
    pub configs: Vec<BootstrapConfig>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cert_uses_single_wire_names() {
        let cert: Cert = serde_json::from_str(
            r#"{"client_id":"c1","cert_serial":"1a:2b","client_cert":"PEM","expiration":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(cert.cert_serial.as_deref(), Some("1a:2b"));
        assert_eq!(cert.client_cert.as_deref(), Some("PEM"));

        let json = serde_json::to_value(&cert).unwrap();
        assert_eq!(json["cert_serial"], "1a:2b");
        assert_eq!(json["client_cert"], "PEM");
        assert!(json.get("serial_number").is_none());
        assert!(json.get("certificate").is_none());
    }

    #[test]
    fn bootstrap_config_omits_unset_fields() {
        let config = BootstrapConfig {
            external_id: Some("ext-1".to_string()),
            state: Some(1),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&config).unwrap(),
            r#"{"external_id":"ext-1","state":1}"#
        );
    }
}
