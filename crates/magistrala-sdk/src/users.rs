//! Users service: accounts, sessions and password management.

use crate::client::{Auth, Transport};
use crate::encoding::{endpoint, require_id};
use crate::error::Result;
use magistrala_core::{
    ChannelsPage, ClientsPage, GroupsPage, Login, PageMetadata, Response, Token, User, UsersPage,
};
use serde_json::json;

const USERS: &str = "users";

/// Client for the users service.
#[derive(Debug, Clone)]
pub struct Users {
    transport: Transport,
    users_url: String,
}

impl Users {
    /// Create a users client for `users_url`.
    #[must_use]
    pub fn new(transport: Transport, users_url: impl Into<String>) -> Self {
        Self {
            transport,
            users_url: users_url.into(),
        }
    }

    fn url(&self, segments: &[&str]) -> String {
        endpoint(&self.users_url, segments)
    }

    /// Register a user. Self-registration needs no token.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn create(&self, user: &User, token: Option<&str>) -> Result<User> {
        let auth = token.map_or(Auth::None, Auth::Bearer);
        self.transport
            .post(self.url(&[USERS]), auth)
            .json(user)
            .send()
            .await
    }

    /// Issue an access/refresh token pair.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors, e.g. wrong credentials.
    pub async fn create_token(&self, login: &Login) -> Result<Token> {
        self.transport
            .post(self.url(&[USERS, "tokens", "issue"]), Auth::None)
            .json(login)
            .send()
            .await
    }

    /// Exchange a refresh token for a new token pair.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<Token> {
        self.transport
            .post(
                self.url(&[USERS, "tokens", "refresh"]),
                Auth::Bearer(refresh_token),
            )
            .send()
            .await
    }

    /// Update name and metadata of `user`.
    ///
    /// # Errors
    ///
    /// Returns error if `user.id` is missing, or on network or API errors.
    pub async fn update(&self, user: &User, token: &str) -> Result<User> {
        let id = require_id(user.id.as_deref(), "user")?;
        self.transport
            .patch(self.url(&[USERS, id]), Auth::Bearer(token))
            .json(user)
            .send()
            .await
    }

    /// Change the email of `user`.
    ///
    /// # Errors
    ///
    /// Returns error if `user.id` is missing, or on network or API errors.
    pub async fn update_email(&self, user: &User, token: &str) -> Result<User> {
        let id = require_id(user.id.as_deref(), "user")?;
        self.transport
            .patch(self.url(&[USERS, id, "email"]), Auth::Bearer(token))
            .json(&json!({ "email": user.email }))
            .send()
            .await
    }

    /// Change the username held in `user.credentials`.
    ///
    /// # Errors
    ///
    /// Returns error if `user.id` is missing, or on network or API errors.
    pub async fn update_username(&self, user: &User, token: &str) -> Result<User> {
        let id = require_id(user.id.as_deref(), "user")?;
        let username = user.credentials.as_ref().and_then(|c| c.username.as_deref());
        self.transport
            .patch(self.url(&[USERS, id, "username"]), Auth::Bearer(token))
            .json(&json!({ "username": username }))
            .send()
            .await
    }

    /// Change the profile picture URL of `user`.
    ///
    /// # Errors
    ///
    /// Returns error if `user.id` is missing, or on network or API errors.
    pub async fn update_profile_picture(&self, user: &User, token: &str) -> Result<User> {
        let id = require_id(user.id.as_deref(), "user")?;
        self.transport
            .patch(self.url(&[USERS, id, "picture"]), Auth::Bearer(token))
            .json(&json!({ "profile_picture": user.profile_picture }))
            .send()
            .await
    }

    /// Replace the tags of `user`.
    ///
    /// # Errors
    ///
    /// Returns error if `user.id` is missing, or on network or API errors.
    pub async fn update_tags(&self, user: &User, token: &str) -> Result<User> {
        let id = require_id(user.id.as_deref(), "user")?;
        self.transport
            .patch(self.url(&[USERS, id, "tags"]), Auth::Bearer(token))
            .json(&json!({ "tags": user.tags }))
            .send()
            .await
    }

    /// Change the password of the token's owner.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn update_password(
        &self,
        old_secret: &str,
        new_secret: &str,
        token: &str,
    ) -> Result<User> {
        self.transport
            .patch(self.url(&[USERS, "secret"]), Auth::Bearer(token))
            .json(&json!({ "old_secret": old_secret, "new_secret": new_secret }))
            .send()
            .await
    }

    /// Change the platform role of `user`.
    ///
    /// # Errors
    ///
    /// Returns error if `user.id` is missing, or on network or API errors.
    pub async fn update_role(&self, user: &User, token: &str) -> Result<User> {
        let id = require_id(user.id.as_deref(), "user")?;
        self.transport
            .patch(self.url(&[USERS, id, "role"]), Auth::Bearer(token))
            .json(&json!({ "role": user.role }))
            .send()
            .await
    }

    /// Fetch one user.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn user(&self, user_id: &str, token: &str) -> Result<User> {
        self.transport
            .get(self.url(&[USERS, user_id]), Auth::Bearer(token))
            .send()
            .await
    }

    /// Fetch the token owner's profile.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn profile(&self, token: &str) -> Result<User> {
        self.transport
            .get(self.url(&[USERS, "profile"]), Auth::Bearer(token))
            .send()
            .await
    }

    /// List users.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn users(&self, pm: &PageMetadata, token: &str) -> Result<UsersPage> {
        self.transport
            .get(self.url(&[USERS]), Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Search users by name, username or id.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn search(&self, pm: &PageMetadata, token: &str) -> Result<UsersPage> {
        self.transport
            .get(self.url(&[USERS, "search"]), Auth::Bearer(token))
            .query(pm)?
            .send()
            .await
    }

    /// Enable a user.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn enable(&self, user_id: &str, token: &str) -> Result<User> {
        self.transport
            .post(self.url(&[USERS, user_id, "enable"]), Auth::Bearer(token))
            .send()
            .await
    }

    /// Disable a user.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn disable(&self, user_id: &str, token: &str) -> Result<User> {
        self.transport
            .post(self.url(&[USERS, user_id, "disable"]), Auth::Bearer(token))
            .send()
            .await
    }

    /// Groups a user has access to in a domain.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn list_user_groups(
        &self,
        domain_id: &str,
        user_id: &str,
        pm: &PageMetadata,
        token: &str,
    ) -> Result<GroupsPage> {
        self.transport
            .get(
                self.url(&[domain_id, USERS, user_id, "groups"]),
                Auth::Bearer(token),
            )
            .query(pm)?
            .send()
            .await
    }

    /// Clients a user has access to in a domain.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn list_user_clients(
        &self,
        domain_id: &str,
        user_id: &str,
        pm: &PageMetadata,
        token: &str,
    ) -> Result<ClientsPage> {
        self.transport
            .get(
                self.url(&[domain_id, USERS, user_id, "clients"]),
                Auth::Bearer(token),
            )
            .query(pm)?
            .send()
            .await
    }

    /// Channels a user has access to in a domain.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn list_user_channels(
        &self,
        domain_id: &str,
        user_id: &str,
        pm: &PageMetadata,
        token: &str,
    ) -> Result<ChannelsPage> {
        self.transport
            .get(
                self.url(&[domain_id, USERS, user_id, "channels"]),
                Auth::Bearer(token),
            )
            .query(pm)?
            .send()
            .await
    }

    /// Ask for a password reset email. `host_url` is sent as `Referer` and
    /// used by the server to build the reset link.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn reset_password_request(&self, email: &str, host_url: &str) -> Result<Response> {
        self.transport
            .post(self.url(&["password", "reset-request"]), Auth::None)
            .header("Referer", host_url)
            .json(&json!({ "email": email }))
            .ack("Email with reset link sent successfully")
            .await
    }

    /// Set a new password using the token from the reset email.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn reset_password(
        &self,
        password: &str,
        confirm_password: &str,
        token: &str,
    ) -> Result<Response> {
        self.transport
            .put(self.url(&["password", "reset"]), Auth::Bearer(token))
            .json(&json!({ "password": password, "confirm_password": confirm_password }))
            .ack("Password reset successfully")
            .await
    }

    /// Delete a user.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete(&self, user_id: &str, token: &str) -> Result<Response> {
        self.transport
            .delete(self.url(&[USERS, user_id]), Auth::Bearer(token))
            .ack("User deleted successfully")
            .await
    }
}
