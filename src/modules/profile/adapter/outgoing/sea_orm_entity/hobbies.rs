use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::profile::application::domain::Hobby;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hobbies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub icon: String,

    // #RRGGBB
    pub color: String,

    pub display_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    pub fn to_domain(&self) -> Hobby {
        Hobby {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            color: self.color.clone(),
            display_order: self.display_order,
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
