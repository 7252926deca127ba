use crate::{RealmRole, RoleError, RoleErrorResult, ServiceToken};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Connection settings for the role service
#[derive(Debug, Clone)]
pub struct RoleServiceSettings {
    /// Server root, e.g. "https://sso.example.com"
    pub base_url: String,
    pub realm: String,
    pub client_id: String,
    pub client_secret: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct UserRepresentation {
    id: String,
    #[serde(default)]
    username: Option<String>,
}

/// HTTP client for the role service's admin API
pub struct RoleServiceClient {
    pub base_url: String,
    pub realm: String,
    client_id: String,
    client_secret: Option<String>,
    client: ReqwestClient,
}

impl RoleServiceClient {
    #[track_caller]
    pub fn new(settings: RoleServiceSettings) -> RoleErrorResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            realm: settings.realm,
            client_id: settings.client_id,
            client_secret: settings.client_secret,
            client,
        })
    }

    fn token_url(&self) -> String {
        format!(
            "{}/realms/{}/protocol/openid-connect/token",
            self.base_url, self.realm
        )
    }

    fn admin_url(&self, path: &str) -> String {
        format!("{}/admin/realms/{}{}", self.base_url, self.realm, path)
    }

    /// Send a request and decode a successful JSON body
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> RoleErrorResult<T> {
        let response = req.send().await?;
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn check_status(response: Response) -> RoleErrorResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Keycloak reports failures as {"error": .., "error_description": ..}
        // on the token endpoint and {"errorMessage": ..} on the admin API
        let body: serde_json::Value = response.json().await.unwrap_or_default();
        let message = ["error_description", "errorMessage", "error"]
            .iter()
            .find_map(|key| body.get(key).and_then(|v| v.as_str()))
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error"))
            .to_string();

        Err(RoleError::Api {
            status: status.as_u16(),
            message,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Log the service account in with the client-credentials grant
    pub async fn authenticate_service_account(&self) -> RoleErrorResult<ServiceToken> {
        debug!(
            "Requesting service account token for client '{}' in realm '{}'",
            self.client_id, self.realm
        );

        let mut form = vec![
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
        ];
        if let Some(ref secret) = self.client_secret {
            form.push(("client_secret", secret.as_str()));
        }

        let req = self.client.post(self.token_url()).form(&form);
        self.execute(req).await
    }

    /// Realm-level role mappings for `username`.
    ///
    /// Two calls: resolve the username to the service's user id, then read
    /// that user's realm role mappings.
    pub async fn get_realm_roles(
        &self,
        token: &ServiceToken,
        username: &str,
    ) -> RoleErrorResult<Vec<RealmRole>> {
        let user_id = self.find_user_id(token, username).await?;

        debug!("Fetching realm roles for '{}' ({})", username, user_id);

        let req = self
            .client
            .get(self.admin_url(&format!("/users/{}/role-mappings/realm", user_id)))
            .bearer_auth(token.bearer());
        self.execute(req).await
    }

    async fn find_user_id(&self, token: &ServiceToken, username: &str) -> RoleErrorResult<String> {
        let req = self
            .client
            .get(self.admin_url("/users"))
            .query(&[("username", username), ("exact", "true")])
            .bearer_auth(token.bearer());
        let users: Vec<UserRepresentation> = self.execute(req).await?;

        users
            .into_iter()
            .find(|user| {
                user.username
                    .as_deref()
                    .is_none_or(|name| name.eq_ignore_ascii_case(username))
            })
            .map(|user| user.id)
            .ok_or_else(|| RoleError::SubjectNotFound {
                username: username.to_string(),
                realm: self.realm.clone(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
