use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::career::application::domain::Education;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "educations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    #[sea_orm(nullable)]
    pub location: Option<String>,
    pub start_year: i32,
    #[sea_orm(nullable)]
    pub end_year: Option<i32>,
    pub current: bool,
    #[sea_orm(nullable)]
    pub score: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> Education {
        Education {
            id: self.id,
            degree: self.degree.clone(),
            institution: self.institution.clone(),
            location: self.location.clone(),
            start_year: self.start_year,
            end_year: self.end_year,
            current: self.current,
            score: self.score.clone(),
            description: self.description.clone(),
        }
    }
}
