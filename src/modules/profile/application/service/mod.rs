mod get_contact_page_service;
mod update_profile_stats_service;

pub use get_contact_page_service::GetContactPageService;
pub use update_profile_stats_service::UpdateProfileStatsService;
