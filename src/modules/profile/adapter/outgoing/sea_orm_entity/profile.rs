use chrono::Utc;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::profile::application::domain::Profile;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    pub name: String,
    pub tagline: String,

    #[sea_orm(column_type = "Text")]
    pub about_text: String,

    pub email: String,

    #[sea_orm(nullable)]
    pub phone: Option<String>,

    #[sea_orm(nullable)]
    pub location: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub resume_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub picture_url: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    pub fn to_domain(&self) -> Profile {
        Profile {
            name: self.name.clone(),
            tagline: self.tagline.clone(),
            about_text: self.about_text.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
            resume_url: self.resume_url.clone(),
            picture_url: self.picture_url.clone(),
            updated_at: self.updated_at.with_timezone(&Utc),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
