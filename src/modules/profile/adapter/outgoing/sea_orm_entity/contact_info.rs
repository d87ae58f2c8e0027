use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::profile::application::domain::ContactInfo;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    pub email: String,

    #[sea_orm(column_type = "Text")]
    pub github_url: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub linkedin_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub twitter_url: Option<String>,

    #[sea_orm(nullable)]
    pub phone: Option<String>,

    #[sea_orm(nullable)]
    pub location: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    pub fn to_domain(&self) -> ContactInfo {
        ContactInfo {
            email: self.email.clone(),
            github_url: self.github_url.clone(),
            linkedin_url: self.linkedin_url.clone(),
            twitter_url: self.twitter_url.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
