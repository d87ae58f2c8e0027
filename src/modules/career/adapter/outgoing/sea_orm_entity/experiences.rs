use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::career::application::domain::{CareerDomainError, Experience};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,
    pub title: String,
    pub company: String,
    // internship | freelance | part-time | volunteer | full-time | other
    pub experience_type: String,
    #[sea_orm(nullable)]
    pub location: Option<String>,
    pub start_date: Date,
    #[sea_orm(nullable)]
    pub end_date: Option<Date>,
    pub current: bool,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub achievements: String,
    // JSON array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub technologies_used: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> Result<Experience, CareerDomainError> {
        let technologies_used: Vec<String> =
            serde_json::from_value(self.technologies_used.clone())
                .map_err(|e| CareerDomainError::InvalidTechnologies(e.to_string()))?;

        Ok(Experience {
            id: self.id,
            title: self.title.clone(),
            company: self.company.clone(),
            experience_type: self.experience_type.parse()?,
            location: self.location.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            current: self.current,
            description: self.description.clone(),
            achievements: self.achievements.clone(),
            technologies_used,
        })
    }
}
