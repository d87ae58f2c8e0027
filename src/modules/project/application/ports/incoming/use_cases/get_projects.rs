use async_trait::async_trait;

use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::outgoing::{
    ProjectListFilter, ProjectQueryError,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::DatabaseError(msg) => GetProjectsError::QueryFailed(msg),

            // An empty list is not NotFound; list() never produces it.
            ProjectQueryError::NotFound => GetProjectsError::QueryFailed("Not found".to_string()),

            ProjectQueryError::SerializationError(msg) => GetProjectsError::QueryFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self, filter: ProjectListFilter) -> Result<Vec<Project>, GetProjectsError>;
}
