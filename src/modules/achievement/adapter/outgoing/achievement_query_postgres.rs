use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Select,
};
use std::sync::Arc;

use crate::modules::achievement::adapter::outgoing::sea_orm_entity::achievements::{
    self, Column, Entity,
};
use crate::modules::achievement::application::domain::Achievement;
use crate::modules::achievement::application::ports::outgoing::{
    AchievementQuery, AchievementQueryError,
};

#[derive(Clone)]
pub struct AchievementQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AchievementQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AchievementQuery for AchievementQueryPostgres {
    async fn list_all(&self) -> Result<Vec<Achievement>, AchievementQueryError> {
        let rows = listing_order(Entity::find())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_domain_list(rows)
    }

    async fn list_featured(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<Achievement>, AchievementQueryError> {
        let rows = listing_order(Entity::find().filter(Column::Featured.eq(true)))
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_domain_list(rows)
    }
}

fn listing_order(select: Select<Entity>) -> Select<Entity> {
    select
        .order_by_desc(Column::DateAchieved)
        .order_by_desc(Column::Featured)
}

fn to_domain_list(
    rows: Vec<achievements::Model>,
) -> Result<Vec<Achievement>, AchievementQueryError> {
    rows.iter()
        .map(|m| {
            m.to_domain()
                .map_err(|e| AchievementQueryError::SerializationError(e.to_string()))
        })
        .collect()
}

fn map_db_err(e: DbErr) -> AchievementQueryError {
    AchievementQueryError::DatabaseError(e.to_string())
}
