mod achievement_query_postgres;
pub mod sea_orm_entity;

pub use achievement_query_postgres::AchievementQueryPostgres;
