mod get_project_detail;
mod get_projects;

pub use get_project_detail::*;
pub use get_projects::*;
