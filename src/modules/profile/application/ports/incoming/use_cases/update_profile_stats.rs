use async_trait::async_trait;

use crate::modules::profile::application::domain::{ProfileStats, StatsPatch};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProfileStatsCommand {
    patch: StatsPatch,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProfileStatsCommandError {
    #[error("{field} must be a non-negative integer, got {value}")]
    OutOfRange { field: &'static str, value: i64 },
}

impl UpdateProfileStatsCommand {
    pub fn new(
        github_followers: Option<i64>,
        github_stars: Option<i64>,
        projects_count: Option<i64>,
    ) -> Result<Self, UpdateProfileStatsCommandError> {
        Ok(Self {
            patch: StatsPatch {
                github_followers: counter("github_followers", github_followers)?,
                github_stars: counter("github_stars", github_stars)?,
                projects_count: counter("projects_count", projects_count)?,
            },
        })
    }

    pub fn patch(&self) -> &StatsPatch {
        &self.patch
    }

    pub fn into_patch(self) -> StatsPatch {
        self.patch
    }
}

fn counter(
    field: &'static str,
    value: Option<i64>,
) -> Result<Option<i32>, UpdateProfileStatsCommandError> {
    value
        .map(|v| {
            i32::try_from(v)
                .ok()
                .filter(|v| *v >= 0)
                .ok_or(UpdateProfileStatsCommandError::OutOfRange { field, value: v })
        })
        .transpose()
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileStatsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateProfileStatsUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateProfileStatsCommand,
    ) -> Result<ProfileStats, UpdateProfileStatsError>;
}
