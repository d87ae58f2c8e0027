use std::sync::Arc;

use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsByCategoryUseCase, GetSkillsUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub get_list: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub get_grouped: Arc<dyn GetSkillsByCategoryUseCase + Send + Sync>,
}
