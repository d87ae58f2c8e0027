use async_trait::async_trait;
use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use std::sync::Arc;

use crate::modules::career::adapter::outgoing::sea_orm_entity::{
    certifications, educations, experiences,
};
use crate::modules::career::application::domain::{Certification, Education, Experience};
use crate::modules::career::application::ports::outgoing::{CareerQuery, CareerQueryError};

#[derive(Clone)]
pub struct CareerQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CareerQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CareerQuery for CareerQueryPostgres {
    async fn list_education(&self) -> Result<Vec<Education>, CareerQueryError> {
        let rows = education_order(educations::Entity::find())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(educations::Model::to_domain).collect())
    }

    async fn current_education(&self) -> Result<Option<Education>, CareerQueryError> {
        let row = education_order(
            educations::Entity::find().filter(educations::Column::Current.eq(true)),
        )
        .one(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(row.as_ref().map(educations::Model::to_domain))
    }

    async fn list_experience(&self) -> Result<Vec<Experience>, CareerQueryError> {
        let rows = experience_order(experiences::Entity::find())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        experiences_to_domain(rows)
    }

    async fn list_current_experience(
        &self,
        limit: u64,
    ) -> Result<Vec<Experience>, CareerQueryError> {
        let rows = experience_order(
            experiences::Entity::find().filter(experiences::Column::Current.eq(true)),
        )
        .limit(limit)
        .all(&*self.db)
        .await
        .map_err(map_db_err)?;

        experiences_to_domain(rows)
    }

    async fn list_certifications(&self) -> Result<Vec<Certification>, CareerQueryError> {
        let rows = certification_order(certifications::Entity::find())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(certifications::Model::to_domain).collect())
    }

    async fn list_featured_certifications(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<Certification>, CareerQueryError> {
        let rows = certification_order(
            certifications::Entity::find().filter(certifications::Column::Featured.eq(true)),
        )
        .limit(limit)
        .all(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(rows.iter().map(certifications::Model::to_domain).collect())
    }
}

// ============================================================================
// Ordering
// ============================================================================

fn education_order(select: Select<educations::Entity>) -> Select<educations::Entity> {
    select
        .order_by_with_nulls(educations::Column::EndYear, Order::Desc, NullOrdering::First)
        .order_by_desc(educations::Column::StartYear)
}

fn experience_order(select: Select<experiences::Entity>) -> Select<experiences::Entity> {
    select
        .order_by_desc(experiences::Column::StartDate)
        .order_by_desc(experiences::Column::EndDate)
}

fn certification_order(
    select: Select<certifications::Entity>,
) -> Select<certifications::Entity> {
    select
        .order_by_desc(certifications::Column::IssueDate)
        .order_by_desc(certifications::Column::Featured)
}

// ============================================================================
// Helper Functions
// ============================================================================

fn experiences_to_domain(
    rows: Vec<experiences::Model>,
) -> Result<Vec<Experience>, CareerQueryError> {
    rows.iter()
        .map(|m| {
            m.to_domain()
                .map_err(|e| CareerQueryError::SerializationError(e.to_string()))
        })
        .collect()
}

fn map_db_err(e: DbErr) -> CareerQueryError {
    CareerQueryError::DatabaseError(e.to_string())
}
