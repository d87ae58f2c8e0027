use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AchievementDomainError {
    #[error("Unknown achievement type: {0}")]
    UnknownType(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AchievementType {
    Award,
    Certification,
    Project,
    Skill,
    Other,
}

impl AchievementType {
    pub const ALL: [AchievementType; 5] = [
        AchievementType::Award,
        AchievementType::Certification,
        AchievementType::Project,
        AchievementType::Skill,
        AchievementType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementType::Award => "award",
            AchievementType::Certification => "certification",
            AchievementType::Project => "project",
            AchievementType::Skill => "skill",
            AchievementType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AchievementType::Award => "Award",
            AchievementType::Certification => "Certification",
            AchievementType::Project => "Project Milestone",
            AchievementType::Skill => "Skill Mastery",
            AchievementType::Other => "Other",
        }
    }
}

impl fmt::Display for AchievementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AchievementType {
    type Err = AchievementDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AchievementType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AchievementDomainError::UnknownType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Achievement {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub achievement_type: AchievementType,
    pub icon: String,
    pub date_achieved: NaiveDate,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_declared_type() {
        for t in AchievementType::ALL {
            assert_eq!(t.as_str().parse::<AchievementType>().unwrap(), t);
        }
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert_eq!(
            "medal".parse::<AchievementType>(),
            Err(AchievementDomainError::UnknownType("medal".to_string()))
        );
    }

    #[test]
    fn labels_follow_display_names() {
        assert_eq!(AchievementType::Project.label(), "Project Milestone");
        assert_eq!(AchievementType::Skill.label(), "Skill Mastery");
    }
}
