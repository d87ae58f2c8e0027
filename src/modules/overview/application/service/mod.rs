mod get_about_service;
mod get_home_service;
mod sources;

pub use get_about_service::GetAboutService;
pub use get_home_service::GetHomeService;
pub use sources::OverviewSources;
