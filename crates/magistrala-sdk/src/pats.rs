//! Personal access tokens issued by the auth service.

use crate::client::{Auth, Transport};
use crate::encoding::endpoint;
use crate::error::Result;
use magistrala_core::{PatPageMeta, PATsPage, Response, Scope, ScopesPage, ScopesPageMeta, PAT};
use serde::Serialize;
use serde_json::json;

const PATS: &str = "pats";

#[derive(Serialize)]
struct NewPat<'a> {
    name: &'a str,
    description: Option<&'a str>,
    duration: &'a str,
}

/// Client for personal access tokens.
#[derive(Debug, Clone)]
pub struct Pats {
    transport: Transport,
    auth_url: String,
}

impl Pats {
    /// Create a PAT client for `auth_url`.
    #[must_use]
    pub fn new(transport: Transport, auth_url: impl Into<String>) -> Self {
        Self {
            transport,
            auth_url: auth_url.into(),
        }
    }

    fn url(&self, tail: &[&str]) -> String {
        let mut segments = vec![PATS];
        segments.extend_from_slice(tail);
        endpoint(&self.auth_url, &segments)
    }

    /// Create a token valid for `duration` (e.g. `24h`). The secret is only
    /// returned here and by [`Pats::reset_secret`].
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn create(
        &self,
        name: &str,
        duration: &str,
        description: Option<&str>,
        token: &str,
    ) -> Result<PAT> {
        let body = NewPat {
            name,
            description,
            duration,
        };
        self.transport
            .post(self.url(&[]), Auth::Bearer(token))
            .json(&body)
            .send()
            .await
    }

    /// List the caller's tokens.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn list(&self, pm: &PatPageMeta, token: &str) -> Result<PATsPage> {
        self.transport
            .get(self.url(&[]), Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Fetch one token.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn view(&self, pat_id: &str, token: &str) -> Result<PAT> {
        self.transport
            .get(self.url(&[pat_id]), Auth::Bearer(token))
            .send()
            .await
    }

    /// Delete every token of the caller.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_all(&self, token: &str) -> Result<Response> {
        self.transport
            .delete(self.url(&[]), Auth::Bearer(token))
            .ack("PATs deleted successfully")
            .await
    }

    /// Rename a token.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn update_name(&self, pat_id: &str, name: &str, token: &str) -> Result<PAT> {
        self.transport
            .patch(self.url(&[pat_id, "name"]), Auth::Bearer(token))
            .json(&json!({ "name": name }))
            .send()
            .await
    }

    /// Change the description of a token.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn update_description(
        &self,
        pat_id: &str,
        description: &str,
        token: &str,
    ) -> Result<PAT> {
        self.transport
            .patch(self.url(&[pat_id, "description"]), Auth::Bearer(token))
            .json(&json!({ "description": description }))
            .send()
            .await
    }

    /// Delete one token.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete(&self, pat_id: &str, token: &str) -> Result<Response> {
        self.transport
            .delete(self.url(&[pat_id]), Auth::Bearer(token))
            .ack("PAT deleted successfully")
            .await
    }

    /// Issue a new secret valid for `duration`.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn reset_secret(&self, pat_id: &str, duration: &str, token: &str) -> Result<PAT> {
        self.transport
            .patch(self.url(&[pat_id, "secret", "reset"]), Auth::Bearer(token))
            .json(&json!({ "duration": duration }))
            .send()
            .await
    }

    /// Revoke the secret of a token.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn revoke(&self, pat_id: &str, token: &str) -> Result<Response> {
        self.transport
            .patch(self.url(&[pat_id, "secret", "revoke"]), Auth::Bearer(token))
            .ack("PAT revoked successfully")
            .await
    }

    /// Grant additional scopes.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn add_scopes(&self, pat_id: &str, scopes: &[Scope], token: &str) -> Result<Response> {
        self.transport
            .patch(self.url(&[pat_id, "scope", "add"]), Auth::Bearer(token))
            .json(&json!({ "scopes": scopes }))
            .ack("Scope added successfully")
            .await
    }

    /// List the scopes of a token.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn list_scopes(
        &self,
        pat_id: &str,
        pm: &ScopesPageMeta,
        token: &str,
    ) -> Result<ScopesPage> {
        self.transport
            .get(self.url(&[pat_id, "scope"]), Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Remove scopes by id.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_scopes(
        &self,
        pat_id: &str,
        scope_ids: &[String],
        token: &str,
    ) -> Result<Response> {
        self.transport
            .patch(self.url(&[pat_id, "scope", "remove"]), Auth::Bearer(token))
            .json(&json!({ "scopes_id": scope_ids }))
            .ack("Scopes removed successfully")
            .await
    }

    /// Remove every scope of a token.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_all_scopes(&self, pat_id: &str, token: &str) -> Result<Response> {
        self.transport
            .delete(self.url(&[pat_id, "scope"]), Auth::Bearer(token))
            .ack("All scopes deleted successfully")
            .await
    }
}
