// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::project_skills;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{self, Column, Entity};
use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::outgoing::{
    ProjectListFilter, ProjectQuery, ProjectQueryError, ProjectSort,
};
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Skill names per project, in link `position` order.
    async fn technologies_for(
        &self,
        project_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<String>>, ProjectQueryError> {
        if project_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = project_skills::Entity::find()
            .filter(project_skills::Column::ProjectId.is_in(project_ids))
            .order_by_asc(project_skills::Column::Position)
            .order_by_asc(project_skills::Column::SkillId)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if links.is_empty() {
            return Ok(HashMap::new());
        }

        let mut skill_ids: Vec<Uuid> = links.iter().map(|l| l.skill_id).collect();
        skill_ids.sort();
        skill_ids.dedup();

        let names: HashMap<Uuid, String> = skills::Entity::find()
            .filter(skills::Column::Id.is_in(skill_ids))
            .select_only()
            .column(skills::Column::Id)
            .column(skills::Column::Name)
            .into_tuple::<(Uuid, String)>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .collect();

        let mut by_project: HashMap<Uuid, Vec<String>> = HashMap::new();
        for link in links {
            if let Some(name) = names.get(&link.skill_id) {
                by_project
                    .entry(link.project_id)
                    .or_default()
                    .push(name.clone());
            }
        }

        Ok(by_project)
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(
        &self,
        filter: ProjectListFilter,
        sort: ProjectSort,
    ) -> Result<Vec<Project>, ProjectQueryError> {
        // Base query
        let mut query = Entity::find();

        if let Some(project_type) = filter.project_type {
            query = query.filter(Column::ProjectType.eq(project_type.as_str()));
        }

        if let Some(difficulty) = filter.difficulty {
            query = query.filter(Column::DifficultyLevel.eq(difficulty.as_str()));
        }

        if let Some(featured) = filter.featured {
            query = query.filter(Column::Featured.eq(featured));
        }

        // Apply sorting
        if sort == ProjectSort::Showcase {
            query = query.order_by_desc(Column::Featured);
        }
        query = query
            .order_by_with_nulls(Column::CompletionDate, Order::Desc, NullOrdering::Last)
            .order_by_desc(Column::CreatedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        let rows = query.all(&*self.db).await.map_err(map_db_err)?;

        let mut technologies = self
            .technologies_for(rows.iter().map(|p| p.id).collect())
            .await?;

        rows.iter()
            .map(|model| model_to_project(model, technologies.remove(&model.id)))
            .collect()
    }

    async fn get_by_id(&self, project_id: Uuid) -> Result<Project, ProjectQueryError> {
        let project = Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        let mut technologies = self.technologies_for(vec![project.id]).await?;

        model_to_project(&project, technologies.remove(&project.id))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_project(
    model: &projects::Model,
    technologies: Option<Vec<String>>,
) -> Result<Project, ProjectQueryError> {
    model
        .to_domain(technologies.unwrap_or_default())
        .map_err(|e| ProjectQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
