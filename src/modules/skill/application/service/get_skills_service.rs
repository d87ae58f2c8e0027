use async_trait::async_trait;

use crate::modules::skill::application::domain::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsError, GetSkillsUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillQuery;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetSkillsService<Q>
where
    Q: SkillQuery,
{
    query: Q,
}

impl<Q> GetSkillsService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSkillsUseCase for GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Skill>, GetSkillsError> {
        self.query.list_all().await.map_err(GetSkillsError::from)
    }
}
