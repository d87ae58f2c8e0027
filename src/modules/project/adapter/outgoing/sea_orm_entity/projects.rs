use crate::modules::project::application::domain::{Project, ProjectDomainError};
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub title: String,

    pub short_description: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    // android | web | desktop | api | ai | other
    pub project_type: String,

    // beginner | intermediate | advanced | expert
    pub difficulty_level: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub live_url: Option<String>,

    pub icon: String,

    pub featured: bool,

    #[sea_orm(nullable)]
    pub completion_date: Option<Date>,

    #[sea_orm(column_type = "Text")]
    pub challenges_faced: String,

    #[sea_orm(column_type = "Text")]
    pub lessons_learned: String,

    #[sea_orm(column_type = "Text")]
    pub impact: String,

    pub downloads_installs: i32,
    pub stars: i32,
    pub forks: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::project::adapter::outgoing::sea_orm_entity::project_skills::Entity"
    )]
    ProjectSkills,
}

impl Related<super::project_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectSkills.def()
    }
}

// Many-to-many: projects <-> skills via project_skills
impl Related<skills::Entity> for Entity {
    fn to() -> RelationDef {
        super::project_skills::Relation::Skills.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::project_skills::Relation::Projects.def().rev())
    }
}

impl Model {
    pub fn to_domain(&self, technologies: Vec<String>) -> Result<Project, ProjectDomainError> {
        Ok(Project {
            id: self.id,
            title: self.title.clone(),
            short_description: self.short_description.clone(),
            description: self.description.clone(),
            project_type: self.project_type.parse()?,
            difficulty_level: self.difficulty_level.parse()?,
            github_url: self.github_url.clone(),
            live_url: self.live_url.clone(),
            icon: self.icon.clone(),
            featured: self.featured,
            completion_date: self.completion_date,
            challenges_faced: self.challenges_faced.clone(),
            lessons_learned: self.lessons_learned.clone(),
            impact: self.impact.clone(),
            downloads_installs: self.downloads_installs,
            stars: self.stars,
            forks: self.forks,
            technologies,
            created_at: self.created_at.with_timezone(&Utc),
            updated_at: self.updated_at.with_timezone(&Utc),
        })
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
