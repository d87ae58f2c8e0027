use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectDomainError {
    #[error("Unknown project type: {0}")]
    UnknownProjectType(String),

    #[error("Unknown difficulty level: {0}")]
    UnknownDifficulty(String),
}

//
// ──────────────────────────────────────────────────────────
// Project type
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Android,
    Web,
    Desktop,
    Api,
    Ai,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 6] = [
        ProjectType::Android,
        ProjectType::Web,
        ProjectType::Desktop,
        ProjectType::Api,
        ProjectType::Ai,
        ProjectType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Android => "android",
            ProjectType::Web => "web",
            ProjectType::Desktop => "desktop",
            ProjectType::Api => "api",
            ProjectType::Ai => "ai",
            ProjectType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Android => "Android App",
            ProjectType::Web => "Web Application",
            ProjectType::Desktop => "Desktop Application",
            ProjectType::Api => "API/Backend",
            ProjectType::Ai => "AI/Automation",
            ProjectType::Other => "Other",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = ProjectDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ProjectDomainError::UnknownProjectType(s.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Difficulty
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 4] = [
        DifficultyLevel::Beginner,
        DifficultyLevel::Intermediate,
        DifficultyLevel::Advanced,
        DifficultyLevel::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "beginner",
            DifficultyLevel::Intermediate => "intermediate",
            DifficultyLevel::Advanced => "advanced",
            DifficultyLevel::Expert => "expert",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "Beginner",
            DifficultyLevel::Intermediate => "Intermediate",
            DifficultyLevel::Advanced => "Advanced",
            DifficultyLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyLevel {
    type Err = ProjectDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DifficultyLevel::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ProjectDomainError::UnknownDifficulty(s.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub project_type: ProjectType,
    pub difficulty_level: DifficultyLevel,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub icon: String,
    pub featured: bool,
    pub completion_date: Option<NaiveDate>,
    pub challenges_faced: String,
    pub lessons_learned: String,
    pub impact: String,
    pub downloads_installs: i32,
    pub stars: i32,
    pub forks: i32,
    /// Skill names in link position order.
    pub technologies: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
