use async_trait::async_trait;

use crate::modules::career::application::domain::{Certification, Education, Experience};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CareerQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CareerQuery: Send + Sync {
    /// Ongoing study first (end_year desc, nulls first), then start_year desc.
    async fn list_education(&self) -> Result<Vec<Education>, CareerQueryError>;

    async fn current_education(&self) -> Result<Option<Education>, CareerQueryError>;

    /// start_date desc, then end_date desc.
    async fn list_experience(&self) -> Result<Vec<Experience>, CareerQueryError>;

    async fn list_current_experience(
        &self,
        limit: u64,
    ) -> Result<Vec<Experience>, CareerQueryError>;

    /// issue_date desc, then featured desc.
    async fn list_certifications(&self) -> Result<Vec<Certification>, CareerQueryError>;

    /// `None` returns every featured row.
    async fn list_featured_certifications(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<Certification>, CareerQueryError>;
}
