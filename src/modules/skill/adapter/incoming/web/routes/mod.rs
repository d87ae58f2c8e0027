mod get_skills;
mod get_skills_by_category;

pub use get_skills::*;
pub use get_skills_by_category::*;
