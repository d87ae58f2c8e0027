mod get_project_detail;
mod get_projects;

pub use get_project_detail::{GetProjectDetailError, GetProjectDetailUseCase};
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
