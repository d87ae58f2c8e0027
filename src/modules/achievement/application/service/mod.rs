mod get_achievements_service;

pub use get_achievements_service::GetAchievementsService;
