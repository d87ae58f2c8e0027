use crate::modules::achievement::application::ports::outgoing::AchievementQueryError;
use crate::modules::career::application::ports::outgoing::CareerQueryError;
use crate::modules::profile::application::ports::outgoing::{
    ProfileQueryError, ProfileRepositoryError,
};
use crate::modules::project::application::ports::outgoing::ProjectQueryError;
use crate::modules::skill::application::ports::outgoing::SkillQueryError;

/// Failure of any source feeding an aggregate page.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OverviewError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProfileQueryError> for OverviewError {
    fn from(err: ProfileQueryError) -> Self {
        OverviewError::QueryFailed(err.to_string())
    }
}

impl From<ProfileRepositoryError> for OverviewError {
    fn from(err: ProfileRepositoryError) -> Self {
        OverviewError::QueryFailed(err.to_string())
    }
}

impl From<ProjectQueryError> for OverviewError {
    fn from(err: ProjectQueryError) -> Self {
        OverviewError::QueryFailed(err.to_string())
    }
}

impl From<SkillQueryError> for OverviewError {
    fn from(err: SkillQueryError) -> Self {
        OverviewError::QueryFailed(err.to_string())
    }
}

impl From<AchievementQueryError> for OverviewError {
    fn from(err: AchievementQueryError) -> Self {
        OverviewError::QueryFailed(err.to_string())
    }
}

impl From<CareerQueryError> for OverviewError {
    fn from(err: CareerQueryError) -> Self {
        OverviewError::QueryFailed(err.to_string())
    }
}
