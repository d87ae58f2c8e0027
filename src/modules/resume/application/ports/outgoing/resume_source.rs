use async_trait::async_trait;

use crate::modules::resume::application::domain::ResumeContent;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResumeSourceError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Read-only snapshot of everything the résumé shows.
#[async_trait]
pub trait ResumeSource: Send + Sync {
    async fn load(&self) -> Result<ResumeContent, ResumeSourceError>;
}
