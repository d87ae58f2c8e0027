use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::modules::achievement::application::domain::{Achievement, AchievementType};
use crate::modules::career::application::domain::{
    Certification, Education, Experience, ExperienceType,
};
use crate::modules::overview::application::ports::incoming::use_cases::HomePage;
use crate::modules::profile::application::domain::{ContactInfo, Hobby, Profile, SiteSettings};
use crate::modules::project::application::domain::{DifficultyLevel, Project, ProjectType};
use crate::modules::skill::application::domain::{Proficiency, Skill, SkillCategory};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn slug(text: &str) -> String {
    text.to_lowercase().replace(' ', "-")
}

pub fn sample_profile(name: &str) -> Profile {
    Profile {
        name: name.to_string(),
        tagline: "Backend developer".to_string(),
        about_text: "I build reliable services.".to_string(),
        email: "ada@example.com".to_string(),
        phone: Some("+44 20 7946 0000".to_string()),
        location: Some("London".to_string()),
        resume_url: None,
        picture_url: None,
        updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn sample_contact_info() -> ContactInfo {
    ContactInfo {
        email: "ada@example.com".to_string(),
        github_url: "https://github.com/ada".to_string(),
        linkedin_url: Some("https://linkedin.com/in/ada".to_string()),
        twitter_url: None,
        phone: Some("+44 20 7946 0000".to_string()),
        location: Some("London".to_string()),
    }
}

pub fn sample_hobby(name: &str) -> Hobby {
    Hobby {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: format!("{} on weekends", name),
        icon: "star".to_string(),
        color: "#3B82F6".to_string(),
        display_order: 0,
    }
}

pub fn sample_skill(name: &str, category: SkillCategory, proficiency: i32) -> Skill {
    Skill {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category,
        icon: "code".to_string(),
        proficiency: Proficiency::new(proficiency).unwrap(),
        featured: true,
        display_order: 0,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn sample_project(title: &str, featured: bool) -> Project {
    Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        short_description: format!("{} in a sentence", title),
        description: format!("{} in detail", title),
        project_type: ProjectType::Web,
        difficulty_level: DifficultyLevel::Intermediate,
        github_url: Some(format!("https://github.com/ada/{}", slug(title))),
        live_url: None,
        icon: "globe".to_string(),
        featured,
        completion_date: Some(date(2024, 6, 1)),
        challenges_faced: String::new(),
        lessons_learned: String::new(),
        impact: String::new(),
        downloads_installs: 0,
        stars: 3,
        forks: 1,
        technologies: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    }
}

pub fn sample_achievement(title: &str, achievement_type: AchievementType, featured: bool) -> Achievement {
    Achievement {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{} description", title),
        achievement_type,
        icon: "trophy".to_string(),
        date_achieved: date(2024, 5, 1),
        featured,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
    }
}

pub fn sample_education(degree: &str, current: bool) -> Education {
    Education {
        id: Uuid::new_v4(),
        degree: degree.to_string(),
        institution: "University of London".to_string(),
        location: Some("London".to_string()),
        start_year: 2021,
        end_year: if current { None } else { Some(2025) },
        current,
        score: Some("3.8 GPA".to_string()),
        description: String::new(),
    }
}

/// Ongoing position, so it also shows up as current experience.
pub fn sample_experience(title: &str) -> Experience {
    Experience {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company: "Acme".to_string(),
        experience_type: ExperienceType::Internship,
        location: Some("Remote".to_string()),
        start_date: date(2023, 6, 1),
        end_date: None,
        current: true,
        description: "Built internal APIs.".to_string(),
        achievements: String::new(),
        technologies_used: vec!["Rust".to_string()],
    }
}

pub fn sample_certification(name: &str) -> Certification {
    Certification {
        id: Uuid::new_v4(),
        name: name.to_string(),
        issuing_organization: "Google Cloud".to_string(),
        credential_id: None,
        issue_date: date(2024, 2, 1),
        expiry_date: None,
        credential_url: None,
        description: format!("{} certification", name),
        featured: true,
    }
}

pub fn empty_home_page() -> HomePage {
    HomePage {
        profile: None,
        site_settings: SiteSettings::default(),
        stats: None,
        current_education: None,
        featured_projects: vec![],
        featured_skills: vec![],
        featured_achievements: vec![],
        hobbies: vec![],
        current_experience: vec![],
        featured_certifications: vec![],
    }
}
