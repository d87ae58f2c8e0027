use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::achievement::application::ports::outgoing::{
    AchievementQuery, AchievementQueryError,
};
use crate::modules::career::application::ports::outgoing::{CareerQuery, CareerQueryError};
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};
use crate::modules::project::application::ports::outgoing::{
    ProjectListFilter, ProjectQuery, ProjectQueryError, ProjectSort,
};
use crate::modules::resume::application::domain::ResumeContent;
use crate::modules::resume::application::ports::outgoing::{ResumeSource, ResumeSourceError};
use crate::modules::skill::application::ports::outgoing::{SkillQuery, SkillQueryError};

/// Gathers résumé content from the read ports of the other modules.
#[derive(Clone)]
pub struct ResumeSourceQueries {
    profile: Arc<dyn ProfileQuery>,
    skills: Arc<dyn SkillQuery>,
    projects: Arc<dyn ProjectQuery>,
    achievements: Arc<dyn AchievementQuery>,
    career: Arc<dyn CareerQuery>,
}

impl ResumeSourceQueries {
    pub fn new(
        profile: Arc<dyn ProfileQuery>,
        skills: Arc<dyn SkillQuery>,
        projects: Arc<dyn ProjectQuery>,
        achievements: Arc<dyn AchievementQuery>,
        career: Arc<dyn CareerQuery>,
    ) -> Self {
        Self {
            profile,
            skills,
            projects,
            achievements,
            career,
        }
    }
}

#[async_trait]
impl ResumeSource for ResumeSourceQueries {
    async fn load(&self) -> Result<ResumeContent, ResumeSourceError> {
        let (
            profile,
            contact_info,
            education,
            skills,
            experience,
            projects,
            achievements,
            certifications,
        ) = tokio::try_join!(
            async { Ok::<_, ResumeSourceError>(self.profile.get_profile().await?) },
            async { Ok(self.profile.get_contact_info().await?) },
            async { Ok(self.career.list_education().await?) },
            async { Ok(self.skills.list_all().await?) },
            async { Ok(self.career.list_experience().await?) },
            async {
                Ok(self
                    .projects
                    .list(ProjectListFilter::featured(None), ProjectSort::RecentlyCompleted)
                    .await?)
            },
            async { Ok(self.achievements.list_featured(None).await?) },
            async { Ok(self.career.list_featured_certifications(None).await?) },
        )?;

        Ok(ResumeContent {
            profile,
            contact_info,
            education,
            skills,
            experience,
            projects,
            achievements,
            certifications,
        })
    }
}

// ============================================================================
// Error mapping
// ============================================================================

impl From<ProfileQueryError> for ResumeSourceError {
    fn from(err: ProfileQueryError) -> Self {
        match err {
            ProfileQueryError::DatabaseError(msg) => ResumeSourceError::DatabaseError(msg),
        }
    }
}

impl From<SkillQueryError> for ResumeSourceError {
    fn from(err: SkillQueryError) -> Self {
        match err {
            SkillQueryError::SerializationError(msg) => ResumeSourceError::SerializationError(msg),
            SkillQueryError::DatabaseError(msg) => ResumeSourceError::DatabaseError(msg),
        }
    }
}

impl From<ProjectQueryError> for ResumeSourceError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::SerializationError(msg) => {
                ResumeSourceError::SerializationError(msg)
            }
            other => ResumeSourceError::DatabaseError(other.to_string()),
        }
    }
}

impl From<AchievementQueryError> for ResumeSourceError {
    fn from(err: AchievementQueryError) -> Self {
        match err {
            AchievementQueryError::SerializationError(msg) => {
                ResumeSourceError::SerializationError(msg)
            }
            AchievementQueryError::DatabaseError(msg) => ResumeSourceError::DatabaseError(msg),
        }
    }
}

impl From<CareerQueryError> for ResumeSourceError {
    fn from(err: CareerQueryError) -> Self {
        match err {
            CareerQueryError::SerializationError(msg) => ResumeSourceError::SerializationError(msg),
            CareerQueryError::DatabaseError(msg) => ResumeSourceError::DatabaseError(msg),
        }
    }
}
