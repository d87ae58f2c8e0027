mod get_skills_by_category_service;
mod get_skills_service;

pub use get_skills_by_category_service::GetSkillsByCategoryService;
pub use get_skills_service::GetSkillsService;
