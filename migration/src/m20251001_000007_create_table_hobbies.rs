use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hobbies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hobbies::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Hobbies::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Hobbies::Description).text().not_null())
                    .col(
                        ColumnDef::new(Hobbies::Icon)
                            .string_len(50)
                            .not_null()
                            .default("🎯"),
                    )
                    .col(
                        ColumnDef::new(Hobbies::Color)
                            .string_len(7)
                            .not_null()
                            .default("#3B82F6"),
                    )
                    .col(
                        ColumnDef::new(Hobbies::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hobbies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Hobbies {
    Table,
    Id,
    Name,
    Description,
    Icon,
    Color,
    DisplayOrder,
}
