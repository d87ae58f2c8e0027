use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::achievement::application::domain::Achievement;
use crate::modules::career::application::domain::{Certification, Education, Experience};
use crate::modules::overview::application::ports::incoming::use_cases::{AboutPage, HomePage};
use crate::modules::profile::application::domain::{Hobby, Profile, ProfileStats, SiteSettings};
use crate::modules::project::application::domain::Project;
use crate::modules::skill::adapter::incoming::web::dto::{
    group_responses, skill_responses, SkillGroupResponse, SkillResponse,
};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HomeResponse {
    pub profile: Option<Profile>,
    pub site_settings: SiteSettings,
    pub stats: Option<ProfileStats>,
    pub current_education: Option<Education>,
    pub featured_projects: Vec<Project>,
    pub featured_skills: Vec<SkillResponse>,
    pub featured_achievements: Vec<Achievement>,
    pub hobbies: Vec<Hobby>,
    pub current_experience: Vec<Experience>,
    pub featured_certifications: Vec<Certification>,
}

impl From<HomePage> for HomeResponse {
    fn from(page: HomePage) -> Self {
        Self {
            featured_skills: skill_responses(&page.featured_skills),
            profile: page.profile,
            site_settings: page.site_settings,
            stats: page.stats,
            current_education: page.current_education,
            featured_projects: page.featured_projects,
            featured_achievements: page.featured_achievements,
            hobbies: page.hobbies,
            current_experience: page.current_experience,
            featured_certifications: page.featured_certifications,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AboutResponse {
    pub profile: Option<Profile>,
    pub education: Vec<Education>,
    pub skill_groups: Vec<SkillGroupResponse>,
    pub achievements: Vec<Achievement>,
    pub experience: Vec<Experience>,
    pub certifications: Vec<Certification>,
    pub hobbies: Vec<Hobby>,
}

impl From<AboutPage> for AboutResponse {
    fn from(page: AboutPage) -> Self {
        Self {
            skill_groups: group_responses(&page.skill_groups),
            profile: page.profile,
            education: page.education,
            achievements: page.achievements,
            experience: page.experience,
            certifications: page.certifications,
            hobbies: page.hobbies,
        }
    }
}
