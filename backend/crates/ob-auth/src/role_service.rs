use ob_roles::{RealmRole, RoleErrorResult, RoleServiceClient, ServiceToken};

use async_trait::async_trait;

/// Source of realm roles for a username
#[async_trait]
pub trait RoleService: Send + Sync {
    async fn authenticate_service_account(&self) -> RoleErrorResult<ServiceToken>;

    async fn get_realm_roles(
        &self,
        token: &ServiceToken,
        username: &str,
    ) -> RoleErrorResult<Vec<RealmRole>>;
}

#[async_trait]
impl RoleService for RoleServiceClient {
    async fn authenticate_service_account(&self) -> RoleErrorResult<ServiceToken> {
        RoleServiceClient::authenticate_service_account(self).await
    }

    async fn get_realm_roles(
        &self,
        token: &ServiceToken,
        username: &str,
    ) -> RoleErrorResult<Vec<RealmRole>> {
        RoleServiceClient::get_realm_roles(self, token, username).await
    }
}
