use chrono::Utc;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::achievement::application::domain::{Achievement, AchievementDomainError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "achievements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    // award | certification | project | skill | other
    pub achievement_type: String,

    pub icon: String,

    pub date_achieved: Date,

    pub featured: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> Result<Achievement, AchievementDomainError> {
        Ok(Achievement {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            achievement_type: self.achievement_type.parse()?,
            icon: self.icon.clone(),
            date_achieved: self.date_achieved,
            featured: self.featured,
            created_at: self.created_at.with_timezone(&Utc),
        })
    }
}
