use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use super::SINGLETON_ID;
use crate::modules::profile::application::domain::ProfileStats;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile_stats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    // CHECK (>= 0) on every counter
    pub profile_views: i32,
    pub github_followers: i32,
    pub github_stars: i32,
    pub projects_count: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    pub fn to_domain(&self) -> ProfileStats {
        ProfileStats {
            profile_views: self.profile_views,
            github_followers: self.github_followers,
            github_stars: self.github_stars,
            projects_count: self.projects_count,
        }
    }
}

impl ActiveModel {
    pub fn zeroed() -> Self {
        Self {
            id: Set(SINGLETON_ID),
            profile_views: Set(0),
            github_followers: Set(0),
            github_stars: Set(0),
            projects_count: Set(0),
            ..Default::default()
        }
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    #[allow(unused_mut)]
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
