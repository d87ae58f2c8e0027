use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        // =====================================================
        // Singleton tables: the only legal primary key is 1
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(singleton_id(Profile::Id))
                    .col(ColumnDef::new(Profile::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Profile::Tagline).string_len(200).not_null())
                    .col(ColumnDef::new(Profile::AboutText).text().not_null())
                    .col(ColumnDef::new(Profile::Email).string_len(254).not_null())
                    .col(ColumnDef::new(Profile::Phone).string_len(20))
                    .col(ColumnDef::new(Profile::Location).string_len(100))
                    .col(ColumnDef::new(Profile::ResumeUrl).text())
                    .col(ColumnDef::new(Profile::PictureUrl).text())
                    .col(timestamp(Profile::CreatedAt))
                    .col(timestamp(Profile::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ContactInfo::Table)
                    .if_not_exists()
                    .col(singleton_id(ContactInfo::Id))
                    .col(ColumnDef::new(ContactInfo::Email).string_len(254).not_null())
                    .col(ColumnDef::new(ContactInfo::GithubUrl).text().not_null())
                    .col(ColumnDef::new(ContactInfo::LinkedinUrl).text())
                    .col(ColumnDef::new(ContactInfo::TwitterUrl).text())
                    .col(ColumnDef::new(ContactInfo::Phone).string_len(20))
                    .col(ColumnDef::new(ContactInfo::Location).string_len(100))
                    .col(timestamp(ContactInfo::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SiteSettings::Table)
                    .if_not_exists()
                    .col(singleton_id(SiteSettings::Id))
                    .col(
                        ColumnDef::new(SiteSettings::SiteName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::HeroTitle)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SiteSettings::HeroSubtitle).text().not_null())
                    .col(
                        ColumnDef::new(SiteSettings::PrimaryColor)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::SecondaryColor)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::AccentColor)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::EnableDarkMode)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::EnableAnimations)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::ContactEmail)
                            .string_len(254)
                            .not_null(),
                    )
                    .col(timestamp(SiteSettings::CreatedAt))
                    .col(timestamp(SiteSettings::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProfileStats::Table)
                    .if_not_exists()
                    .col(singleton_id(ProfileStats::Id))
                    .col(counter(ProfileStats::ProfileViews))
                    .col(counter(ProfileStats::GithubFollowers))
                    .col(counter(ProfileStats::GithubStars))
                    .col(counter(ProfileStats::ProjectsCount))
                    .col(timestamp(ProfileStats::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // updated_at triggers
        // =====================================================
        for table in ["profile", "contact_info", "site_settings", "profile_stats"] {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    r#"
                    CREATE TRIGGER update_{table}_updated_at
                    BEFORE UPDATE ON {table}
                    FOR EACH ROW
                    EXECUTE FUNCTION update_updated_at_column();
                    "#
                ))
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in ["profile", "contact_info", "site_settings", "profile_stats"] {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    "DROP TRIGGER IF EXISTS update_{table}_updated_at ON {table}"
                ))
                .await?;
        }

        manager
            .drop_table(Table::drop().table(ProfileStats::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SiteSettings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContactInfo::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column")
            .await?;

        Ok(())
    }
}

fn singleton_id<T: IntoIden + Copy + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .primary_key()
        .default(1)
        .check(Expr::col(col).eq(1))
        .to_owned()
}

fn timestamp<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
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
enum Profile {
    Table,
    Id,
    Name,
    Tagline,
    AboutText,
    Email,
    Phone,
    Location,
    ResumeUrl,
    PictureUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum ContactInfo {
    Table,
    Id,
    Email,
    GithubUrl,
    LinkedinUrl,
    TwitterUrl,
    Phone,
    Location,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum SiteSettings {
    Table,
    Id,
    SiteName,
    HeroTitle,
    HeroSubtitle,
    PrimaryColor,
    SecondaryColor,
    AccentColor,
    EnableDarkMode,
    EnableAnimations,
    ContactEmail,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum ProfileStats {
    Table,
    Id,
    ProfileViews,
    GithubFollowers,
    GithubStars,
    ProjectsCount,
    UpdatedAt,
}
