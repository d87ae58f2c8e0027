use std::collections::BTreeMap;

use super::entities::{Proficiency, Skill, SkillCategory};

#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<Skill>,
}

impl SkillGroup {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

/// Partition `skills` by category.
///
/// Groups follow `SkillCategory` declaration order, empty categories are
/// dropped, and skills keep their incoming relative order within a group.
pub fn group_by_category(skills: Vec<Skill>) -> Vec<SkillGroup> {
    let mut buckets: BTreeMap<SkillCategory, Vec<Skill>> = BTreeMap::new();

    for skill in skills {
        buckets.entry(skill.category).or_default().push(skill);
    }

    buckets
        .into_iter()
        .map(|(category, skills)| SkillGroup { category, skills })
        .collect()
}

pub fn highest_proficiency(skills: &[Skill]) -> Option<Proficiency> {
    skills.iter().map(|s| s.proficiency).max()
}
