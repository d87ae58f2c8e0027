use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create projects table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Projects::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Projects::ShortDescription)
                            .string_len(300)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(
                        ColumnDef::new(Projects::ProjectType)
                            .string_len(20)
                            .not_null()
                            .default("other"),
                    )
                    .col(
                        ColumnDef::new(Projects::DifficultyLevel)
                            .string_len(20)
                            .not_null()
                            .default("intermediate"),
                    )
                    .col(ColumnDef::new(Projects::GithubUrl).text())
                    .col(ColumnDef::new(Projects::LiveUrl).text())
                    .col(
                        ColumnDef::new(Projects::Icon)
                            .string_len(50)
                            .not_null()
                            .default("fas fa-code"),
                    )
                    .col(
                        ColumnDef::new(Projects::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Projects::CompletionDate).date())
                    .col(
                        ColumnDef::new(Projects::ChallengesFaced)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Projects::LessonsLearned)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Projects::Impact)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(counter(Projects::DownloadsInstalls))
                    .col(counter(Projects::Stars))
                    .col(counter(Projects::Forks))
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Default listing order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_listing
                ON projects (featured DESC, completion_date DESC NULLS LAST, created_at DESC);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_projects_updated_at
                BEFORE UPDATE ON projects
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_projects_updated_at ON projects;
                DROP INDEX IF EXISTS idx_projects_listing;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

fn counter<T: IntoIden + Copy + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .default(0)
        .check(Expr::col(col).gte(0))
        .to_owned()
}

#[derive(DeriveIden, Clone, Copy)]
enum Projects {
    Table,
    Id,
    Title,
    ShortDescription,
    Description,
    ProjectType,
    DifficultyLevel,
    GithubUrl,
    LiveUrl,
    Icon,
    Featured,
    CompletionDate,
    ChallengesFaced,
    LessonsLearned,
    Impact,
    DownloadsInstalls,
    Stars,
    Forks,
    CreatedAt,
    UpdatedAt,
}
