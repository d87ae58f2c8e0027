use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Achievements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Achievements::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Achievements::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Achievements::Description).text().not_null())
                    .col(
                        ColumnDef::new(Achievements::AchievementType)
                            .string_len(20)
                            .not_null()
                            .default("other"),
                    )
                    .col(
                        ColumnDef::new(Achievements::Icon)
                            .string_len(50)
                            .not_null()
                            .default("🏆"),
                    )
                    .col(
                        ColumnDef::new(Achievements::DateAchieved)
                            .date()
                            .not_null()
                            .default(Expr::current_date()),
                    )
                    .col(
                        ColumnDef::new(Achievements::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Achievements::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Achievements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Achievements {
    Table,
    Id,
    Title,
    Description,
    AchievementType,
    Icon,
    DateAchieved,
    Featured,
    CreatedAt,
}
