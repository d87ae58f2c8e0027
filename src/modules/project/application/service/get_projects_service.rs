use async_trait::async_trait;

use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectListFilter, ProjectQuery, ProjectSort,
};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, filter: ProjectListFilter) -> Result<Vec<Project>, GetProjectsError> {
        self.query
            .list(filter, ProjectSort::Showcase)
            .await
            .map_err(GetProjectsError::from)
    }
}
