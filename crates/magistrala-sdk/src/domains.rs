//! Domains service: tenants, their roles and invitations.

use crate::client::{roles_flag, Auth, Transport};
use crate::encoding::{endpoint, require_id};
use crate::error::Result;
use crate::roles::Roles;
use magistrala_core::{
    Domain, DomainsPage, Invitation, InvitationPageMeta, InvitationsPage, PageMetadata, Response,
};
use serde::Serialize;
use serde_json::json;

const DOMAINS: &str = "domains";
const INVITATIONS: &str = "invitations";

#[derive(Serialize)]
struct InvitationRequest<'a> {
    invitee_user_id: &'a str,
    role_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    resend: Option<bool>,
}

/// Client for the domains service.
#[derive(Debug, Clone)]
pub struct Domains {
    transport: Transport,
    domains_url: String,
}

impl Domains {
    /// Create a domains client for `domains_url`.
    #[must_use]
    pub fn new(transport: Transport, domains_url: impl Into<String>) -> Self {
        Self {
            transport,
            domains_url: domains_url.into(),
        }
    }

    fn url(&self, segments: &[&str]) -> String {
        endpoint(&self.domains_url, segments)
    }

    /// Role operations on domains, addressed as `domains/{domain_id}/roles`.
    #[must_use]
    pub fn roles(&self) -> Roles {
        Roles::new(self.transport.clone(), self.domains_url.clone(), &[DOMAINS])
    }

    /// Create a domain.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn create(&self, domain: &Domain, token: &str) -> Result<Domain> {
        self.transport
            .post(self.url(&[DOMAINS]), Auth::Bearer(token))
            .json(domain)
            .send()
            .await
    }

    /// Update name, tags and metadata of `domain`.
    ///
    /// # Errors
    ///
    /// Returns error if `domain.id` is missing, or on network or API errors.
    pub async fn update(&self, domain: &Domain, token: &str) -> Result<Domain> {
        let id = require_id(domain.id.as_deref(), "domain")?;
        self.transport
            .patch(self.url(&[DOMAINS, id]), Auth::Bearer(token))
            .json(domain)
            .send()
            .await
    }

    /// Fetch one domain, optionally with the caller's roles on it.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn domain(
        &self,
        domain_id: &str,
        list_roles: Option<bool>,
        token: &str,
    ) -> Result<Domain> {
        self.transport
            .get(self.url(&[DOMAINS, domain_id]), Auth::Bearer(token))
            .pairs(&roles_flag(list_roles))
            .send()
            .await
    }

    /// List domains.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn domains(&self, pm: &PageMetadata, token: &str) -> Result<DomainsPage> {
        self.transport
            .get(self.url(&[DOMAINS]), Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// List the domains a user belongs to.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn list_user_domains(
        &self,
        user_id: &str,
        pm: &PageMetadata,
        token: &str,
    ) -> Result<DomainsPage> {
        self.transport
            .get(self.url(&["users", user_id, DOMAINS]), Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Enable a domain.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn enable(&self, domain_id: &str, token: &str) -> Result<Response> {
        self.transport
            .post(self.url(&[DOMAINS, domain_id, "enable"]), Auth::Bearer(token))
            .ack("Domain enabled successfully")
            .await
    }

    /// Disable a domain.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn disable(&self, domain_id: &str, token: &str) -> Result<Response> {
        self.transport
            .post(self.url(&[DOMAINS, domain_id, "disable"]), Auth::Bearer(token))
            .ack("Domain disabled successfully")
            .await
    }

    /// Freeze a domain. Only platform admins may do this.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn freeze(&self, domain_id: &str, token: &str) -> Result<Response> {
        self.transport
            .post(self.url(&[DOMAINS, domain_id, "freeze"]), Auth::Bearer(token))
            .ack("Domain frozen successfully")
            .await
    }

    /// Invite a user into a domain with a role.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn send_invitation(
        &self,
        domain_id: &str,
        invitee_user_id: &str,
        role_id: &str,
        resend: Option<bool>,
        token: &str,
    ) -> Result<Response> {
        let body = InvitationRequest {
            invitee_user_id,
            role_id,
            resend,
        };
        self.transport
            .post(self.url(&[DOMAINS, domain_id, INVITATIONS]), Auth::Bearer(token))
            .json(&body)
            .ack("Invitation sent successfully")
            .await
    }

    /// View the invitation of a user to a domain.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn view_invitation(
        &self,
        domain_id: &str,
        user_id: &str,
        token: &str,
    ) -> Result<Invitation> {
        self.transport
            .get(
                self.url(&[DOMAINS, domain_id, INVITATIONS, user_id]),
                Auth::Bearer(token),
            )
            .send()
            .await
    }

    /// Invitations issued by a domain.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn list_domain_invitations(
        &self,
        domain_id: &str,
        pm: &InvitationPageMeta,
        token: &str,
    ) -> Result<InvitationsPage> {
        self.transport
            .get(self.url(&[DOMAINS, domain_id, INVITATIONS]), Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Invitations addressed to the token's owner.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn list_user_invitations(
        &self,
        pm: &InvitationPageMeta,
        token: &str,
    ) -> Result<InvitationsPage> {
        self.transport
            .get(self.url(&[INVITATIONS]), Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Accept the invitation to `domain_id`.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn accept_invitation(&self, domain_id: &str, token: &str) -> Result<Response> {
        self.transport
            .post(self.url(&[INVITATIONS, "accept"]), Auth::Bearer(token))
            .json(&json!({ "domain_id": domain_id }))
            .ack("Invitation accepted successfully")
            .await
    }

    /// Reject the invitation to `domain_id`.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn reject_invitation(&self, domain_id: &str, token: &str) -> Result<Response> {
        self.transport
            .post(self.url(&[INVITATIONS, "reject"]), Auth::Bearer(token))
            .json(&json!({ "domain_id": domain_id }))
            .ack("Invitation rejected successfully")
            .await
    }

    /// Withdraw the invitation of a user.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_invitation(
        &self,
        domain_id: &str,
        user_id: &str,
        token: &str,
    ) -> Result<Response> {
        self.transport
            .delete(
                self.url(&[DOMAINS, domain_id, INVITATIONS, user_id]),
                Auth::Bearer(token),
            )
            .ack("Invitation deleted successfully")
            .await
    }
}
