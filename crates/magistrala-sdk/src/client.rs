//! HTTP transport shared by every resource client.
//!
//! Each SDK operation issues exactly one request through a [`Call`]:
//! authentication header, `application/json` content type, optional query
//! pairs and body. Non-2xx responses become [`Error::Api`].

use crate::config::SdkConfig;
use crate::error::{handle_error, Error, Result};
use magistrala_core::{QueryParams, Response};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;

/// Content type sent with every request.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Credentials attached to a request.
#[derive(Debug, Clone, Copy)]
pub enum Auth<'a> {
    /// No `Authorization` header
    None,
    /// `Authorization: Bearer <token>`
    Bearer(&'a str),
    /// `Authorization: Client <secret>`
    Client(&'a str),
}

impl Auth<'_> {
    fn header(self) -> Option<String> {
        match self {
            Auth::None => None,
            Auth::Bearer(token) => Some(format!("Bearer {token}")),
            Auth::Client(secret) => Some(format!("Client {secret}")),
        }
    }
}

/// Pooled HTTP client with a fixed per-request timeout.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
}

impl Transport {
    /// Build the transport from the SDK configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created, or if TLS
    /// certificate files cannot be read or parsed.
    pub fn new(config: &SdkConfig) -> Result<Self> {
        let mut builder = Client::builder().timeout(config.timeout);

        if config.uses_tls() {
            builder = builder.use_rustls_tls();

            if let Some(ca_path) = &config.tls.ca_cert_path {
                let ca_cert = fs::read(ca_path).map_err(|e| {
                    Error::Init(format!(
                        "failed to read CA certificate {}: {e}",
                        ca_path.display()
                    ))
                })?;
                let cert = reqwest::Certificate::from_pem(&ca_cert)
                    .map_err(|e| Error::Init(format!("failed to parse CA certificate: {e}")))?;
                builder = builder.add_root_certificate(cert);
                tracing::debug!(ca_path = %ca_path.display(), "Loaded custom CA certificate");
            }

            if let (Some(cert_path), Some(key_path)) =
                (&config.tls.client_cert_path, &config.tls.client_key_path)
            {
                let cert_pem = fs::read(cert_path).map_err(|e| {
                    Error::Init(format!(
                        "failed to read client certificate {}: {e}",
                        cert_path.display()
                    ))
                })?;
                let key_pem = fs::read(key_path).map_err(|e| {
                    Error::Init(format!(
                        "failed to read client key {}: {e}",
                        key_path.display()
                    ))
                })?;

                let mut identity_pem = cert_pem;
                identity_pem.extend_from_slice(&key_pem);

                let identity = reqwest::Identity::from_pem(&identity_pem)
                    .map_err(|e| Error::Init(format!("failed to create client identity: {e}")))?;
                builder = builder.identity(identity);
                tracing::debug!(
                    cert_path = %cert_path.display(),
                    key_path = %key_path.display(),
                    "Loaded client certificate for mTLS"
                );
            }
        }

        let client = builder.build().map_err(|e| Error::Init(e.to_string()))?;

        Ok(Self { client })
    }

    /// Transport with only a timeout, for standalone resource clients.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::new(&SdkConfig {
            timeout,
            ..SdkConfig::default()
        })
    }

    /// Start a request.
    #[must_use]
    pub fn request(&self, method: Method, url: String, auth: Auth<'_>) -> Call {
        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON);
        if let Some(value) = auth.header() {
            builder = builder.header(AUTHORIZATION, value);
        }
        Call {
            method,
            url,
            builder,
        }
    }

    pub(crate) fn get(&self, url: String, auth: Auth<'_>) -> Call {
        self.request(Method::GET, url, auth)
    }

    pub(crate) fn post(&self, url: String, auth: Auth<'_>) -> Call {
        self.request(Method::POST, url, auth)
    }

    pub(crate) fn put(&self, url: String, auth: Auth<'_>) -> Call {
        self.request(Method::PUT, url, auth)
    }

    pub(crate) fn patch(&self, url: String, auth: Auth<'_>) -> Call {
        self.request(Method::PATCH, url, auth)
    }

    pub(crate) fn delete(&self, url: String, auth: Auth<'_>) -> Call {
        self.request(Method::DELETE, url, auth)
    }
}

/// A single prepared request.
#[derive(Debug)]
pub struct Call {
    method: Method,
    url: String,
    builder: RequestBuilder,
}

impl Call {
    /// Attach query parameters. Unset fields are omitted.
    ///
    /// # Errors
    ///
    /// Returns error if the parameters cannot be rendered.
    pub fn query<Q: QueryParams + ?Sized>(mut self, params: &Q) -> Result<Self> {
        let pairs = params.to_query()?;
        if !pairs.is_empty() {
            self.builder = self.builder.query(&pairs);
        }
        Ok(self)
    }

    /// Attach raw query pairs.
    #[must_use]
    pub fn pairs(mut self, pairs: &[(&str, String)]) -> Self {
        if !pairs.is_empty() {
            self.builder = self.builder.query(pairs);
        }
        self
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.builder = self.builder.json(body);
        self
    }

    /// Attach a raw body.
    #[must_use]
    pub fn body(mut self, body: impl Into<reqwest::Body>) -> Self {
        self.builder = self.builder.body(body);
        self
    }

    /// Attach an extra header.
    #[must_use]
    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    /// Send and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns error on network failure, non-2xx status or an unexpected
    /// response body.
    pub async fn send<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.execute().await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send and acknowledge with `message`, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Returns error on network failure or non-2xx status.
    pub async fn ack(self, message: &str) -> Result<Response> {
        let response = self.execute().await?;
        Ok(Response::new(response.status().as_u16(), message))
    }

    /// Send and return the raw response text.
    ///
    /// # Errors
    ///
    /// Returns error on network failure or non-2xx status.
    pub async fn text(self) -> Result<String> {
        let response = self.execute().await?;
        Ok(response.text().await?)
    }

    async fn execute(self) -> Result<reqwest::Response> {
        let Call {
            method,
            url,
            builder,
        } = self;

        tracing::debug!(%method, url, "HTTP request");

        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = api_error(status, &body);
        if let Error::Api { message, .. } = &err {
            tracing::warn!(%method, url, status = status.as_u16(), reason = message.as_str(), "API error");
        }
        Err(err)
    }
}

/// The `roles=true|false` flag of entity views.
pub(crate) fn roles_flag(list_roles: Option<bool>) -> Vec<(&'static str, String)> {
    list_roles
        .map(|flag| ("roles", flag.to_string()))
        .into_iter()
        .collect()
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Map a non-2xx response to [`Error::Api`].
///
/// The message is the body's `message` field, falling back to the raw body
/// text and then to the canonical reason phrase.
pub(crate) fn api_error(status: StatusCode, body: &str) -> Error {
    let fallback = || {
        let text = body.trim();
        if text.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        } else {
            text.to_string()
        }
    };

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
            error,
        }) => handle_error(message, status.as_u16(), error),
        Ok(ErrorBody {
            message: None,
            error,
        }) => handle_error(fallback(), status.as_u16(), error),
        Err(_) => handle_error(fallback(), status.as_u16(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn auth_headers() {
        assert_eq!(Auth::None.header(), None);
        assert_eq!(Auth::Bearer("tok").header().as_deref(), Some("Bearer tok"));
        assert_eq!(Auth::Client("sec").header().as_deref(), Some("Client sec"));
    }

    #[test]
    fn roles_flag_is_optional() {
        assert!(roles_flag(None).is_empty());
        assert_eq!(roles_flag(Some(false)), vec![("roles", "false".to_string())]);
    }

    #[test]
    fn transport_creation() {
        assert!(Transport::new(&SdkConfig::default()).is_ok());
        assert!(Transport::with_timeout(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn transport_creation_with_invalid_ca_fails() {
        let mut config = SdkConfig::with_base_url("https://localhost:8443");
        config.tls.ca_cert_path = Some(PathBuf::from("/nonexistent/ca.pem"));

        let err = Transport::new(&config).unwrap_err();
        assert!(err.to_string().contains("client init error"));
    }

    #[test]
    fn transport_creation_with_missing_client_key_fails() {
        let cert = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(cert.path(), "-----BEGIN CERTIFICATE-----\n").unwrap();

        let mut config = SdkConfig::with_base_url("https://localhost:8443");
        config.tls.client_cert_path = Some(cert.path().to_path_buf());
        config.tls.client_key_path = Some(PathBuf::from("/nonexistent/client.key"));

        let err = Transport::new(&config).unwrap_err();
        assert!(err.to_string().contains("failed to read client key"));
    }

    #[test]
    fn api_error_uses_json_message() {
        let err = api_error(
            StatusCode::CONFLICT,
            r#"{"message":"entity already exists","error":"duplicate key"}"#,
        );
        match err {
            Error::Api {
                status,
                message,
                detail,
            } => {
                assert_eq!(status, 409);
                assert_eq!(message, "entity already exists");
                assert_eq!(detail.as_deref(), Some("duplicate key"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn api_error_falls_back_to_text_then_reason() {
        let err = api_error(StatusCode::BAD_GATEWAY, "upstream unavailable\n");
        assert!(matches!(err, Error::Api { ref message, .. } if message == "upstream unavailable"));

        let err = api_error(StatusCode::NOT_FOUND, "");
        assert!(matches!(err, Error::Api { status: 404, ref message, .. } if message == "Not Found"));

        let err = api_error(StatusCode::UNAUTHORIZED, r#"{"error":"missing token"}"#);
        match err {
            Error::Api { message, detail, .. } => {
                assert_eq!(message, r#"{"error":"missing token"}"#);
                assert_eq!(detail.as_deref(), Some("missing token"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
