use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::career::application::domain::Certification;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "certifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,
    pub name: String,
    pub issuing_organization: String,
    #[sea_orm(nullable)]
    pub credential_id: Option<String>,
    pub issue_date: Date,
    #[sea_orm(nullable)]
    pub expiry_date: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub credential_url: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub featured: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> Certification {
        Certification {
            id: self.id,
            name: self.name.clone(),
            issuing_organization: self.issuing_organization.clone(),
            credential_id: self.credential_id.clone(),
            issue_date: self.issue_date,
            expiry_date: self.expiry_date,
            credential_url: self.credential_url.clone(),
            description: self.description.clone(),
            featured: self.featured,
        }
    }
}
