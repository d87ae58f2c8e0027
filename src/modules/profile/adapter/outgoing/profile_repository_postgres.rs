use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::{
    profile_stats, site_settings, SINGLETON_ID,
};
use crate::modules::profile::application::domain::{ProfileStats, SiteSettings, StatsPatch};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn ensure_site_settings(&self) -> Result<SiteSettings, ProfileRepositoryError> {
        // INSERT ... ON CONFLICT (id) DO NOTHING, then read whichever row won.
        site_settings::Entity::insert(site_settings::ActiveModel::from_defaults(
            &SiteSettings::default(),
        ))
        .on_conflict(
            OnConflict::column(site_settings::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&*self.db)
        .await
        .map_err(map_db_err)?;

        let row = site_settings::Entity::find_by_id(SINGLETON_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProfileRepositoryError::SingletonMissing("site_settings"))?;

        Ok(row.to_domain())
    }

    async fn apply_stats_patch(
        &self,
        patch: StatsPatch,
    ) -> Result<ProfileStats, ProfileRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        profile_stats::Entity::insert(profile_stats::ActiveModel::zeroed())
            .on_conflict(
                OnConflict::column(profile_stats::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await
            .map_err(map_db_err)?;

        let current = profile_stats::Entity::find_by_id(SINGLETON_ID)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(ProfileRepositoryError::SingletonMissing("profile_stats"))?;

        let updated = if patch.is_empty() {
            current
        } else {
            let mut active: profile_stats::ActiveModel = current.into();

            if let Some(value) = patch.github_followers {
                active.github_followers = Set(value);
            }
            if let Some(value) = patch.github_stars {
                active.github_stars = Set(value);
            }
            if let Some(value) = patch.projects_count {
                active.projects_count = Set(value);
            }

            active.update(&txn).await.map_err(map_db_err)?
        };

        txn.commit().await.map_err(map_db_err)?;

        Ok(updated.to_domain())
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}
