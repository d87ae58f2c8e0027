use async_trait::async_trait;

use crate::modules::skill::application::domain::Skill;
use crate::modules::skill::application::ports::outgoing::SkillQueryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<SkillQueryError> for GetSkillsError {
    fn from(err: SkillQueryError) -> Self {
        GetSkillsError::QueryFailed(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Skill>, GetSkillsError>;
}
