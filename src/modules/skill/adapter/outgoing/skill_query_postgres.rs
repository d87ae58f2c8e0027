use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Select,
};
use std::sync::Arc;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{self, Column, Entity};
use crate::modules::skill::application::domain::Skill;
use crate::modules::skill::application::ports::outgoing::{SkillQuery, SkillQueryError};

#[derive(Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn list_all(&self) -> Result<Vec<Skill>, SkillQueryError> {
        let rows = listing_order(Entity::find())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_domain_list(rows)
    }

    async fn list_featured(&self, limit: u64) -> Result<Vec<Skill>, SkillQueryError> {
        let rows = listing_order(Entity::find().filter(Column::Featured.eq(true)))
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_domain_list(rows)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn listing_order(select: Select<Entity>) -> Select<Entity> {
    select
        .order_by_asc(Column::Category)
        .order_by_asc(Column::DisplayOrder)
        .order_by_asc(Column::Name)
}

fn to_domain_list(rows: Vec<skills::Model>) -> Result<Vec<Skill>, SkillQueryError> {
    rows.iter()
        .map(|m| {
            m.to_domain()
                .map_err(|e| SkillQueryError::SerializationError(e.to_string()))
        })
        .collect()
}

fn map_db_err(e: DbErr) -> SkillQueryError {
    SkillQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    fn row(name: &str, category: &str, proficiency: i16, featured: bool) -> skills::Model {
        skills::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            icon: String::new(),
            proficiency,
            featured,
            display_order: 0,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn list_all_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                row("Rust", "programming", 90, true),
                row("Docker", "tools", 70, false),
            ]])
            .into_connection();

        let query = SkillQueryPostgres::new(Arc::new(db));
        let skills = query.list_all().await.unwrap();

        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].name, "Rust");
        assert_eq!(skills[1].proficiency.label(), "70%");
    }

    #[tokio::test]
    async fn list_all_empty_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<skills::Model>::new()])
            .into_connection();

        let query = SkillQueryPostgres::new(Arc::new(db));

        assert!(query.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_featured_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row("Rust", "programming", 90, true)]])
            .into_connection();

        let query = SkillQueryPostgres::new(Arc::new(db));
        let skills = query.list_featured(12).await.unwrap();

        assert_eq!(skills.len(), 1);
        assert!(skills[0].featured);
    }

    #[tokio::test]
    async fn bad_category_surfaces_serialization_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row("Knitting", "crafts", 50, false)]])
            .into_connection();

        let query = SkillQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.list_all().await,
            Err(SkillQueryError::SerializationError(_))
        ));
    }

    #[tokio::test]
    async fn database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("boom".to_string())])
            .into_connection();

        let query = SkillQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.list_all().await,
            Err(SkillQueryError::DatabaseError(_))
        ));
    }
}
