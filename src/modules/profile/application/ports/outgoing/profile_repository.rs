use async_trait::async_trait;

use crate::modules::profile::application::domain::{ProfileStats, SiteSettings, StatsPatch};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Singleton row missing after insert: {0}")]
    SingletonMissing(&'static str),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Get-or-create the site settings row with defaults.
    ///
    /// Concurrent callers converge on the same row.
    async fn ensure_site_settings(&self) -> Result<SiteSettings, ProfileRepositoryError>;

    /// Create the stats row with zeros if absent, then apply `patch`,
    /// all in one transaction.
    async fn apply_stats_patch(
        &self,
        patch: StatsPatch,
    ) -> Result<ProfileStats, ProfileRepositoryError>;
}
