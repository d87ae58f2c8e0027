use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectDetailError, GetProjectDetailUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;

pub struct GetProjectDetailService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectDetailService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectDetailUseCase for GetProjectDetailService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<Project, GetProjectDetailError> {
        self.query
            .get_by_id(project_id)
            .await
            .map_err(GetProjectDetailError::from)
    }
}
