use std::sync::Arc;

use crate::modules::achievement::application::ports::outgoing::AchievementQuery;
use crate::modules::career::application::ports::outgoing::CareerQuery;
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileRepository};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::modules::skill::application::ports::outgoing::SkillQuery;

/// Read ports shared by the aggregate page services.
#[derive(Clone)]
pub struct OverviewSources {
    pub profile: Arc<dyn ProfileQuery>,
    pub profile_repository: Arc<dyn ProfileRepository>,
    pub projects: Arc<dyn ProjectQuery>,
    pub skills: Arc<dyn SkillQuery>,
    pub achievements: Arc<dyn AchievementQuery>,
    pub career: Arc<dyn CareerQuery>,
}
