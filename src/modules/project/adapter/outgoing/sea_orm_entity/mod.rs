pub mod project_skills;
pub mod projects;
