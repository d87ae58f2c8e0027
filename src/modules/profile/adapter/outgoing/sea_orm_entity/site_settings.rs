use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use super::SINGLETON_ID;
use crate::modules::profile::application::domain::SiteSettings;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    pub site_name: String,
    pub hero_title: String,

    #[sea_orm(column_type = "Text")]
    pub hero_subtitle: String,

    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub enable_dark_mode: bool,
    pub enable_animations: bool,
    pub contact_email: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    pub fn to_domain(&self) -> SiteSettings {
        SiteSettings {
            site_name: self.site_name.clone(),
            hero_title: self.hero_title.clone(),
            hero_subtitle: self.hero_subtitle.clone(),
            primary_color: self.primary_color.clone(),
            secondary_color: self.secondary_color.clone(),
            accent_color: self.accent_color.clone(),
            enable_dark_mode: self.enable_dark_mode,
            enable_animations: self.enable_animations,
            contact_email: self.contact_email.clone(),
        }
    }
}

impl ActiveModel {
    /// Insertable singleton row; timestamps come from column defaults.
    pub fn from_defaults(settings: &SiteSettings) -> Self {
        Self {
            id: Set(SINGLETON_ID),
            site_name: Set(settings.site_name.clone()),
            hero_title: Set(settings.hero_title.clone()),
            hero_subtitle: Set(settings.hero_subtitle.clone()),
            primary_color: Set(settings.primary_color.clone()),
            secondary_color: Set(settings.secondary_color.clone()),
            accent_color: Set(settings.accent_color.clone()),
            enable_dark_mode: Set(settings.enable_dark_mode),
            enable_animations: Set(settings.enable_animations),
            contact_email: Set(settings.contact_email.clone()),
            ..Default::default()
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
