use ob_core::{LocalUser, ProfileUpdate};
use ob_db::{Result as DbErrorResult, UserRepository};

use async_trait::async_trait;

/// Persistence port used by the reconciler.
///
/// `update_or_create` must be atomic per username: concurrent callers for the
/// same username end up sharing one row.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn update_or_create(
        &self,
        username: &str,
        profile: &ProfileUpdate,
    ) -> DbErrorResult<(LocalUser, bool)>;

    async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<LocalUser>>;

    async fn save(&self, user: &LocalUser) -> DbErrorResult<()>;
}

#[async_trait]
impl UserStore for UserRepository {
    async fn update_or_create(
        &self,
        username: &str,
        profile: &ProfileUpdate,
    ) -> DbErrorResult<(LocalUser, bool)> {
        UserRepository::update_or_create(self, username, profile).await
    }

    async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<LocalUser>> {
        UserRepository::find_by_username(self, username).await
    }

    async fn save(&self, user: &LocalUser) -> DbErrorResult<()> {
        UserRepository::save(self, user).await
    }
}
