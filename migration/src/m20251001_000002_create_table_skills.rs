use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Skills::Category)
                            .string_len(20)
                            .not_null()
                            .default("programming"),
                    )
                    .col(
                        ColumnDef::new(Skills::Icon)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Skills::Proficiency)
                            .small_integer()
                            .not_null()
                            .default(80)
                            .check(Expr::col(Skills::Proficiency).between(0, 100)),
                    )
                    .col(
                        ColumnDef::new(Skills::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Skills::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Skills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE skills
                ADD CONSTRAINT chk_skills_category
                CHECK (category IN ('programming', 'frameworks', 'tools', 'databases', 'cloud', 'design'));
                "#,
            )
            .await?;

        // Listing order: category, display_order, name
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_skills_listing
                ON skills (category, display_order, name);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_skills_listing;")
            .await?;

        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    Category,
    Icon,
    Proficiency,
    Featured,
    DisplayOrder,
    CreatedAt,
}
