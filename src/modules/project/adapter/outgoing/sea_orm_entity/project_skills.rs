use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ordered project ↔ skill link.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub project_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub skill_id: Uuid,

    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Projects,

    #[sea_orm(
        belongs_to = "crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::Entity",
        from = "Column::SkillId",
        to = "crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    Skills,
}

impl Related<projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skills.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
