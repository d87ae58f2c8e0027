use async_trait::async_trait;

use crate::modules::skill::application::domain::{Proficiency, SkillGroup};

use super::GetSkillsError;

/// Skills page aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillsByCategory {
    pub groups: Vec<SkillGroup>,
    pub highest_proficiency: Option<Proficiency>,
    pub total_skills: usize,
}

#[async_trait]
pub trait GetSkillsByCategoryUseCase: Send + Sync {
    async fn execute(&self) -> Result<SkillsByCategory, GetSkillsError>;
}
