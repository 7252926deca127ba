use crate::{IdentityReconciler, Result as AuthErrorResult};

use ob_core::{IdentityClaims, LocalUser};

use log::debug;

/// Entry point called by the OIDC validation layer with verified claims
#[derive(Clone)]
pub struct AuthenticationBackend {
    reconciler: IdentityReconciler,
}

impl AuthenticationBackend {
    pub fn new(reconciler: IdentityReconciler) -> Self {
        Self { reconciler }
    }

    /// `Ok(None)` when there is nothing to authenticate: no claims at all or
    /// no subject identifier. Everything else goes through the reconciler.
    pub async fn authenticate(
        &self,
        claims: &IdentityClaims,
    ) -> AuthErrorResult<Option<LocalUser>> {
        if claims.is_empty() || !claims.has_subject() {
            debug!("No subject claim, skipping authentication");
            return Ok(None);
        }

        self.reconciler.reconcile(claims).await.map(Some)
    }
}
