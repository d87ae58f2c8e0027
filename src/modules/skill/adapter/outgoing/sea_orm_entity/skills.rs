use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::modules::skill::application::domain::{Proficiency, Skill, SkillDomainError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,

    // programming | frameworks | tools | databases | cloud | design
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub category: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub icon: String,

    // CHECK (proficiency BETWEEN 0 AND 100)
    pub proficiency: i16,

    pub featured: bool,

    pub display_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    pub fn to_domain(&self) -> Result<Skill, SkillDomainError> {
        Ok(Skill {
            id: self.id,
            name: self.name.clone(),
            category: self.category.parse()?,
            icon: self.icon.clone(),
            proficiency: Proficiency::try_from(self.proficiency)?,
            featured: self.featured,
            display_order: self.display_order,
            created_at: self.created_at.with_timezone(&Utc),
        })
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
        }

        if let ActiveValue::Set(proficiency) = &self.proficiency {
            if Proficiency::try_from(*proficiency).is_err() {
                return Err(DbErr::Custom(format!(
                    "proficiency out of range: {}",
                    proficiency
                )));
            }
        }

        Ok(self)
    }
}
