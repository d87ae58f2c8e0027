use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::outgoing::ProjectQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectDetailError {
    #[error("Project not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetProjectDetailError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::NotFound => GetProjectDetailError::NotFound,
            other => GetProjectDetailError::QueryFailed(other.to_string()),
        }
    }
}

#[async_trait]
pub trait GetProjectDetailUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid) -> Result<Project, GetProjectDetailError>;
}
