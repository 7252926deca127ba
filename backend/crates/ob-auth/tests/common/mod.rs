use ob_auth::{AuthenticationBackend, Hooks, IdentityReconciler, ReconcilerSettings};
use ob_core::IdentityClaims;
use ob_db::UserRepository;
use ob_roles::{RoleServiceClient, RoleServiceSettings};

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const REALM: &str = "boss";

pub async fn create_test_repository() -> UserRepository {
    let pool = ob_db::connect_in_memory()
        .await
        .expect("Failed to create in-memory database");
    UserRepository::new(pool)
}

pub fn role_client_for(server: &MockServer) -> RoleServiceClient {
    RoleServiceClient::new(RoleServiceSettings {
        base_url: server.uri(),
        realm: REALM.to_string(),
        client_id: "oidc-bridge".to_string(),
        client_secret: Some("s3cret".to_string()),
        timeout: Duration::from_secs(5),
    })
    .expect("Failed to build role service client")
}

/// Token endpoint plus user lookup and role mappings for one username
pub async fn mount_roles(server: &MockServer, username: &str, roles: &[&str]) {
    Mock::given(method("POST"))
        .and(path(format!("/realms/{}/protocol/openid-connect/token", REALM)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "admin-token",
            "expires_in": 300
        })))
        .mount(server)
        .await;

    let user_id = format!("kc-{}", username);
    Mock::given(method("GET"))
        .and(path(format!("/admin/realms/{}/users", REALM)))
        .and(query_param("username", username))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "id": user_id, "username": username }])),
        )
        .mount(server)
        .await;

    let mappings: Vec<_> = roles
        .iter()
        .map(|name| json!({ "id": format!("role-{}", name), "name": name, "composite": false }))
        .collect();
    Mock::given(method("GET"))
        .and(path(format!(
            "/admin/realms/{}/users/{}/role-mappings/realm",
            REALM, user_id
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(mappings))
        .mount(server)
        .await;
}

pub fn backend(
    repo: &UserRepository,
    server: &MockServer,
    create_unknown_user: bool,
) -> AuthenticationBackend {
    AuthenticationBackend::new(IdentityReconciler::new(
        Arc::new(repo.clone()),
        Arc::new(role_client_for(server)),
        ReconcilerSettings {
            create_unknown_user,
        },
        Hooks::default(),
    ))
}

pub fn claims_for(username: &str) -> IdentityClaims {
    IdentityClaims::default()
        .with("sub", format!("sub-{}", username))
        .with("preferred_username", username)
}
