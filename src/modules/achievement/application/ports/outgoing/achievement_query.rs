use async_trait::async_trait;

use crate::modules::achievement::application::domain::Achievement;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AchievementQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Results are ordered by date_achieved desc, then featured desc.
#[async_trait]
pub trait AchievementQuery: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Achievement>, AchievementQueryError>;

    /// `None` returns every featured row.
    async fn list_featured(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<Achievement>, AchievementQueryError>;
}
