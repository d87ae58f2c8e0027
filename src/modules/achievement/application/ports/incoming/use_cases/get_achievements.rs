use async_trait::async_trait;

use crate::modules::achievement::application::domain::Achievement;
use crate::modules::achievement::application::ports::outgoing::AchievementQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAchievementsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<AchievementQueryError> for GetAchievementsError {
    fn from(err: AchievementQueryError) -> Self {
        GetAchievementsError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetAchievementsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Achievement>, GetAchievementsError>;
}
