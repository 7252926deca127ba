/// Reconciler behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcilerSettings {
    /// Create a local user on first login instead of failing
    pub create_unknown_user: bool,
}

impl Default for ReconcilerSettings {
    fn default() -> Self {
        Self {
            create_unknown_user: true,
        }
    }
}
