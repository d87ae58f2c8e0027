pub mod entities;
pub mod grouping;

pub use entities::{Proficiency, Skill, SkillCategory, SkillDomainError};
pub use grouping::{group_by_category, highest_proficiency, SkillGroup};
