use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CareerDomainError {
    #[error("Unknown experience type: {0}")]
    UnknownExperienceType(String),

    #[error("Invalid technologies list: {0}")]
    InvalidTechnologies(String),
}

//
// ──────────────────────────────────────────────────────────
// Education
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Education {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub start_year: i32,
    pub end_year: Option<i32>,
    pub current: bool,
    pub score: Option<String>,
    pub description: String,
}

impl Education {
    /// `2019 – 2023`, or `2021 – Present` while ongoing.
    pub fn period(&self) -> String {
        match (self.current, self.end_year) {
            (false, Some(end)) => format!("{} – {}", self.start_year, end),
            _ => format!("{} – Present", self.start_year),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Experience
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ExperienceType {
    #[serde(rename = "internship")]
    Internship,
    #[serde(rename = "freelance")]
    Freelance,
    #[serde(rename = "part-time")]
    PartTime,
    #[serde(rename = "volunteer")]
    Volunteer,
    #[serde(rename = "full-time")]
    FullTime,
    #[serde(rename = "other")]
    Other,
}

impl ExperienceType {
    pub const ALL: [ExperienceType; 6] = [
        ExperienceType::Internship,
        ExperienceType::Freelance,
        ExperienceType::PartTime,
        ExperienceType::Volunteer,
        ExperienceType::FullTime,
        ExperienceType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceType::Internship => "internship",
            ExperienceType::Freelance => "freelance",
            ExperienceType::PartTime => "part-time",
            ExperienceType::Volunteer => "volunteer",
            ExperienceType::FullTime => "full-time",
            ExperienceType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceType::Internship => "Internship",
            ExperienceType::Freelance => "Freelance",
            ExperienceType::PartTime => "Part-time",
            ExperienceType::Volunteer => "Volunteer",
            ExperienceType::FullTime => "Full-time",
            ExperienceType::Other => "Other",
        }
    }
}

impl fmt::Display for ExperienceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceType {
    type Err = CareerDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExperienceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CareerDomainError::UnknownExperienceType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub experience_type: ExperienceType,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: String,
    pub achievements: String,
    pub technologies_used: Vec<String>,
}

impl Experience {
    /// `June 2023 – Present` or `June 2023 – August 2023`.
    pub fn period(&self) -> String {
        let start = self.start_date.format("%B %Y");
        match (self.current, self.end_date) {
            (false, Some(end)) => format!("{} – {}", start, end.format("%B %Y")),
            _ => format!("{} – Present", start),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Certification
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Certification {
    pub id: Uuid,
    pub name: String,
    pub issuing_organization: String,
    pub credential_id: Option<String>,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub credential_url: Option<String>,
    pub description: String,
    pub featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn education(end_year: Option<i32>, current: bool) -> Education {
        Education {
            id: Uuid::new_v4(),
            degree: "BSc Computer Science".to_string(),
            institution: "State University".to_string(),
            location: None,
            start_year: 2021,
            end_year,
            current,
            score: None,
            description: String::new(),
        }
    }

    #[test]
    fn education_period() {
        assert_eq!(education(Some(2025), false).period(), "2021 – 2025");
        assert_eq!(education(None, false).period(), "2021 – Present");
        assert_eq!(education(Some(2025), true).period(), "2021 – Present");
    }

    #[test]
    fn experience_period_uses_month_names() {
        let exp = Experience {
            id: Uuid::new_v4(),
            title: "Backend Intern".to_string(),
            company: "Acme".to_string(),
            experience_type: ExperienceType::Internship,
            location: None,
            start_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 8, 31),
            current: false,
            description: String::new(),
            achievements: String::new(),
            technologies_used: vec![],
        };

        assert_eq!(exp.period(), "June 2023 – August 2023");
    }

    #[test]
    fn hyphenated_experience_types_parse() {
        assert_eq!(
            "part-time".parse::<ExperienceType>().unwrap(),
            ExperienceType::PartTime
        );
        assert_eq!(
            "full-time".parse::<ExperienceType>().unwrap(),
            ExperienceType::FullTime
        );
        assert!("contract".parse::<ExperienceType>().is_err());
    }
}
