use async_trait::async_trait;

use crate::modules::achievement::application::domain::Achievement;
use crate::modules::achievement::application::ports::incoming::use_cases::{
    GetAchievementsError, GetAchievementsUseCase,
};
use crate::modules::achievement::application::ports::outgoing::AchievementQuery;

pub struct GetAchievementsService<Q>
where
    Q: AchievementQuery,
{
    query: Q,
}

impl<Q> GetAchievementsService<Q>
where
    Q: AchievementQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAchievementsUseCase for GetAchievementsService<Q>
where
    Q: AchievementQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Achievement>, GetAchievementsError> {
        Ok(self.query.list_all().await?)
    }
}
