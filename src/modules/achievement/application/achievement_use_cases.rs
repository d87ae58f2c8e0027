use std::sync::Arc;

use crate::modules::achievement::application::ports::incoming::use_cases::GetAchievementsUseCase;

#[derive(Clone)]
pub struct AchievementUseCases {
    pub get_list: Arc<dyn GetAchievementsUseCase + Send + Sync>,
}
