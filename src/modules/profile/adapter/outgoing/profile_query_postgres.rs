use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};
use std::sync::Arc;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::{
    contact_info, hobbies, profile, profile_stats, site_settings, SINGLETON_ID,
};
use crate::modules::profile::application::domain::{
    ContactInfo, Hobby, Profile, ProfileStats, SiteSettings,
};
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};

#[derive(Clone)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn get_profile(&self) -> Result<Option<Profile>, ProfileQueryError> {
        let row = profile::Entity::find_by_id(SINGLETON_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.to_domain()))
    }

    async fn get_contact_info(&self) -> Result<Option<ContactInfo>, ProfileQueryError> {
        let row = contact_info::Entity::find_by_id(SINGLETON_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.to_domain()))
    }

    async fn get_site_settings(&self) -> Result<Option<SiteSettings>, ProfileQueryError> {
        let row = site_settings::Entity::find_by_id(SINGLETON_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.to_domain()))
    }

    async fn get_stats(&self) -> Result<Option<ProfileStats>, ProfileQueryError> {
        let row = profile_stats::Entity::find_by_id(SINGLETON_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.to_domain()))
    }

    async fn list_hobbies(&self, limit: Option<u64>) -> Result<Vec<Hobby>, ProfileQueryError> {
        let mut query = hobbies::Entity::find()
            .order_by_asc(hobbies::Column::DisplayOrder)
            .order_by_asc(hobbies::Column::Name);

        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let rows = query.all(&*self.db).await.map_err(map_db_err)?;

        Ok(rows.iter().map(hobbies::Model::to_domain).collect())
    }
}

fn map_db_err(e: DbErr) -> ProfileQueryError {
    ProfileQueryError::DatabaseError(e.to_string())
}
