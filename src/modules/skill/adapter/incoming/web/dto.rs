use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::skill::application::domain::{Skill, SkillCategory, SkillGroup};
use crate::modules::skill::application::ports::incoming::use_cases::SkillsByCategory;

/// Skill as exposed over HTTP.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SkillResponse {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    pub category_label: String,
    pub icon: String,
    /// Integer percentage in `0..=100`.
    #[schema(example = 85)]
    pub proficiency: u8,
    #[schema(example = "85%")]
    pub proficiency_label: String,
    pub featured: bool,
    pub display_order: i32,
}

impl From<&Skill> for SkillResponse {
    fn from(skill: &Skill) -> Self {
        Self {
            id: skill.id,
            name: skill.name.clone(),
            category: skill.category,
            category_label: skill.category.label().to_string(),
            icon: skill.icon.clone(),
            proficiency: skill.proficiency.value(),
            proficiency_label: skill.proficiency.label(),
            featured: skill.featured,
            display_order: skill.display_order,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SkillGroupResponse {
    pub category: SkillCategory,
    pub label: String,
    pub skills: Vec<SkillResponse>,
}

impl From<&SkillGroup> for SkillGroupResponse {
    fn from(group: &SkillGroup) -> Self {
        Self {
            category: group.category,
            label: group.label().to_string(),
            skills: group.skills.iter().map(SkillResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SkillsByCategoryResponse {
    pub groups: Vec<SkillGroupResponse>,
    pub highest_proficiency: Option<u8>,
    pub total_skills: usize,
}

impl From<&SkillsByCategory> for SkillsByCategoryResponse {
    fn from(value: &SkillsByCategory) -> Self {
        Self {
            groups: value.groups.iter().map(SkillGroupResponse::from).collect(),
            highest_proficiency: value.highest_proficiency.map(|p| p.value()),
            total_skills: value.total_skills,
        }
    }
}

pub fn skill_responses(skills: &[Skill]) -> Vec<SkillResponse> {
    skills.iter().map(SkillResponse::from).collect()
}

pub fn group_responses(groups: &[SkillGroup]) -> Vec<SkillGroupResponse> {
    groups.iter().map(SkillGroupResponse::from).collect()
}
