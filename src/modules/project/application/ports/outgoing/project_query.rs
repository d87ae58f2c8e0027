// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::{DifficultyLevel, Project, ProjectType};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListFilter {
    pub project_type: Option<ProjectType>,
    pub difficulty: Option<DifficultyLevel>,
    pub featured: Option<bool>,
    pub limit: Option<u64>,
}

impl ProjectListFilter {
    pub fn featured(limit: Option<u64>) -> Self {
        Self {
            featured: Some(true),
            limit,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectSort {
    /// featured desc, completion_date desc (nulls last), created_at desc
    #[default]
    Showcase,
    /// completion_date desc (nulls last), created_at desc
    RecentlyCompleted,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side, joins project_skills)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn list(
        &self,
        filter: ProjectListFilter,
        sort: ProjectSort,
    ) -> Result<Vec<Project>, ProjectQueryError>;

    async fn get_by_id(&self, project_id: Uuid) -> Result<Project, ProjectQueryError>;
}
