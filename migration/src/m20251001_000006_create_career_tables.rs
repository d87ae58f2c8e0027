use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // educations
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Educations::Table)
                    .if_not_exists()
                    .col(uuid_pk(Educations::Id))
                    .col(ColumnDef::new(Educations::Degree).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Educations::Institution)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Educations::Location).string_len(100))
                    .col(ColumnDef::new(Educations::StartYear).integer().not_null())
                    .col(ColumnDef::new(Educations::EndYear).integer())
                    .col(
                        ColumnDef::new(Educations::Current)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Educations::Score).string_len(50))
                    .col(
                        ColumnDef::new(Educations::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // experiences
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(uuid_pk(Experiences::Id))
                    .col(ColumnDef::new(Experiences::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Experiences::Company)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::ExperienceType)
                            .string_len(20)
                            .not_null()
                            .default("internship"),
                    )
                    .col(ColumnDef::new(Experiences::Location).string_len(100))
                    .col(ColumnDef::new(Experiences::StartDate).date().not_null())
                    .col(ColumnDef::new(Experiences::EndDate).date())
                    .col(
                        ColumnDef::new(Experiences::Current)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Experiences::Description).text().not_null())
                    .col(
                        ColumnDef::new(Experiences::Achievements)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Experiences::TechnologiesUsed)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // certifications
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Certifications::Table)
                    .if_not_exists()
                    .col(uuid_pk(Certifications::Id))
                    .col(
                        ColumnDef::new(Certifications::Name)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Certifications::IssuingOrganization)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Certifications::CredentialId).string_len(100))
                    .col(ColumnDef::new(Certifications::IssueDate).date().not_null())
                    .col(ColumnDef::new(Certifications::ExpiryDate).date())
                    .col(ColumnDef::new(Certifications::CredentialUrl).text())
                    .col(
                        ColumnDef::new(Certifications::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Certifications::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Certifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Educations::Table).to_owned())
            .await
    }
}

fn uuid_pk<T: IntoIden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .uuid()
        .not_null()
        .primary_key()
        .default(Expr::cust("gen_random_uuid()"))
        .to_owned()
}

#[derive(DeriveIden)]
enum Educations {
    Table,
    Id,
    Degree,
    Institution,
    Location,
    StartYear,
    EndYear,
    Current,
    Score,
    Description,
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Title,
    Company,
    ExperienceType,
    Location,
    StartDate,
    EndDate,
    Current,
    Description,
    Achievements,
    TechnologiesUsed,
}

#[derive(DeriveIden)]
enum Certifications {
    Table,
    Id,
    Name,
    IssuingOrganization,
    CredentialId,
    IssueDate,
    ExpiryDate,
    CredentialUrl,
    Description,
    Featured,
}
