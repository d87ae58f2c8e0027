pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_singleton_tables;
mod m20251001_000002_create_table_skills;
mod m20251001_000003_create_table_projects;
mod m20251001_000004_create_table_project_skills;
mod m20251001_000005_create_table_achievements;
mod m20251001_000006_create_career_tables;
mod m20251001_000007_create_table_hobbies;
mod m20251001_000008_create_table_contact_messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_singleton_tables::Migration),
            Box::new(m20251001_000002_create_table_skills::Migration),
            Box::new(m20251001_000003_create_table_projects::Migration),
            Box::new(m20251001_000004_create_table_project_skills::Migration),
            Box::new(m20251001_000005_create_table_achievements::Migration),
            Box::new(m20251001_000006_create_career_tables::Migration),
            Box::new(m20251001_000007_create_table_hobbies::Migration),
            Box::new(m20251001_000008_create_table_contact_messages::Migration),
        ]
    }
}
