use async_trait::async_trait;

use crate::modules::achievement::application::domain::Achievement;
use crate::modules::career::application::domain::{Certification, Education, Experience};
use crate::modules::overview::application::ports::incoming::use_cases::OverviewError;
use crate::modules::profile::application::domain::{Hobby, Profile};
use crate::modules::skill::application::domain::SkillGroup;

#[derive(Debug, Clone, PartialEq)]
pub struct AboutPage {
    pub profile: Option<Profile>,
    pub education: Vec<Education>,
    pub skill_groups: Vec<SkillGroup>,
    pub achievements: Vec<Achievement>,
    pub experience: Vec<Experience>,
    pub certifications: Vec<Certification>,
    pub hobbies: Vec<Hobby>,
}

#[async_trait]
pub trait GetAboutUseCase: Send + Sync {
    async fn execute(&self) -> Result<AboutPage, OverviewError>;
}
