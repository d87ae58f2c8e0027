use async_trait::async_trait;
use tracing::info;

use crate::modules::profile::application::domain::ProfileStats;
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpdateProfileStatsCommand, UpdateProfileStatsError, UpdateProfileStatsUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileRepository;

#[derive(Debug, Clone)]
pub struct UpdateProfileStatsService<R>
where
    R: ProfileRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateProfileStatsService<R>
where
    R: ProfileRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProfileStatsUseCase for UpdateProfileStatsService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateProfileStatsCommand,
    ) -> Result<ProfileStats, UpdateProfileStatsError> {
        let patch = command.into_patch();

        let stats = self
            .repository
            .apply_stats_patch(patch)
            .await
            .map_err(|e| UpdateProfileStatsError::RepositoryError(e.to_string()))?;

        info!(
            github_followers = stats.github_followers,
            github_stars = stats.github_stars,
            projects_count = stats.projects_count,
            "Profile stats updated"
        );

        Ok(stats)
    }
}
