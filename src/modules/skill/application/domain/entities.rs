use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillDomainError {
    #[error("Unknown skill category: {0}")]
    UnknownCategory(String),

    #[error("Proficiency must be between 0 and 100, got {0}")]
    ProficiencyOutOfRange(i32),
}

//
// ──────────────────────────────────────────────────────────
// Category
// ──────────────────────────────────────────────────────────
//

/// Variant order is the display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Programming,
    Frameworks,
    Tools,
    Databases,
    Cloud,
    Design,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Programming,
        SkillCategory::Frameworks,
        SkillCategory::Tools,
        SkillCategory::Databases,
        SkillCategory::Cloud,
        SkillCategory::Design,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Tools => "tools",
            SkillCategory::Databases => "databases",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Design => "design",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming Languages",
            SkillCategory::Frameworks => "Frameworks & Libraries",
            SkillCategory::Tools => "Tools & IDEs",
            SkillCategory::Databases => "Databases",
            SkillCategory::Cloud => "Cloud Services",
            SkillCategory::Design => "Design Tools",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = SkillDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SkillDomainError::UnknownCategory(s.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Proficiency
// ──────────────────────────────────────────────────────────
//

/// Percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Proficiency(u8);

impl Proficiency {
    pub const MAX: u8 = 100;

    pub fn new(value: i32) -> Result<Self, SkillDomainError> {
        if (0..=Self::MAX as i32).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(SkillDomainError::ProficiencyOutOfRange(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// `"85%"`
    pub fn label(&self) -> String {
        format!("{}%", self.0)
    }
}

impl Default for Proficiency {
    fn default() -> Self {
        Self(80)
    }
}

impl TryFrom<i16> for Proficiency {
    type Error = SkillDomainError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value as i32)
    }
}

//
// ──────────────────────────────────────────────────────────
// Skill
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    pub icon: String,
    pub proficiency: Proficiency,
    pub featured: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_its_storage_value() {
        for category in SkillCategory::ALL {
            assert_eq!(category.as_str().parse::<SkillCategory>(), Ok(category));
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert_eq!(
            "cooking".parse::<SkillCategory>(),
            Err(SkillDomainError::UnknownCategory("cooking".to_string()))
        );
    }

    #[test]
    fn declared_order_is_display_order() {
        let mut shuffled = vec![
            SkillCategory::Design,
            SkillCategory::Programming,
            SkillCategory::Cloud,
            SkillCategory::Tools,
        ];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![
                SkillCategory::Programming,
                SkillCategory::Tools,
                SkillCategory::Cloud,
                SkillCategory::Design,
            ]
        );
    }

    #[test]
    fn labels_match_page_headings() {
        assert_eq!(SkillCategory::Programming.label(), "Programming Languages");
        assert_eq!(SkillCategory::Frameworks.label(), "Frameworks & Libraries");
        assert_eq!(SkillCategory::Tools.label(), "Tools & IDEs");
        assert_eq!(SkillCategory::Cloud.label(), "Cloud Services");
    }

    #[test]
    fn proficiency_bounds() {
        assert_eq!(Proficiency::new(0).unwrap().value(), 0);
        assert_eq!(Proficiency::new(100).unwrap().value(), 100);
        assert_eq!(
            Proficiency::new(101),
            Err(SkillDomainError::ProficiencyOutOfRange(101))
        );
        assert_eq!(
            Proficiency::new(-1),
            Err(SkillDomainError::ProficiencyOutOfRange(-1))
        );
    }

    #[test]
    fn proficiency_label_is_percentage() {
        assert_eq!(Proficiency::new(85).unwrap().label(), "85%");
        assert_eq!(Proficiency::try_from(0i16).unwrap().label(), "0%");
    }

    #[test]
    fn proficiency_serializes_as_plain_integer() {
        let json = serde_json::to_value(Proficiency::new(70).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!(70));
    }
}
