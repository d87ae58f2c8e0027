mod get_project_detail_service;
mod get_projects_service;

pub use get_project_detail_service::GetProjectDetailService;
pub use get_projects_service::GetProjectsService;
