mod get_skills;
mod get_skills_by_category;

pub use get_skills::{GetSkillsError, GetSkillsUseCase};
pub use get_skills_by_category::{GetSkillsByCategoryUseCase, SkillsByCategory};
