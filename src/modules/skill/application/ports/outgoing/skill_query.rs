use async_trait::async_trait;

use crate::modules::skill::application::domain::Skill;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
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

/// Results come back in listing order: category, display_order, name.
#[async_trait]
pub trait SkillQuery: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Skill>, SkillQueryError>;

    async fn list_featured(&self, limit: u64) -> Result<Vec<Skill>, SkillQueryError>;
}
