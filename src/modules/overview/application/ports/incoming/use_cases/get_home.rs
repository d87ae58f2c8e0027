use async_trait::async_trait;

use crate::modules::achievement::application::domain::Achievement;
use crate::modules::career::application::domain::{Certification, Education, Experience};
use crate::modules::overview::application::ports::incoming::use_cases::OverviewError;
use crate::modules::profile::application::domain::{Hobby, Profile, ProfileStats, SiteSettings};
use crate::modules::project::application::domain::Project;
use crate::modules::skill::application::domain::Skill;

/// Everything the landing page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct HomePage {
    pub profile: Option<Profile>,
    pub site_settings: SiteSettings,
    pub stats: Option<ProfileStats>,
    pub current_education: Option<Education>,
    pub featured_projects: Vec<Project>,
    pub featured_skills: Vec<Skill>,
    pub featured_achievements: Vec<Achievement>,
    pub hobbies: Vec<Hobby>,
    pub current_experience: Vec<Experience>,
    pub featured_certifications: Vec<Certification>,
}

#[async_trait]
pub trait GetHomeUseCase: Send + Sync {
    async fn execute(&self) -> Result<HomePage, OverviewError>;
}
