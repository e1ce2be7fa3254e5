use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn timestamp_now(col: impl IntoIden) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resources::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Resources::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Resources::Title).string().not_null())
                    .col(ColumnDef::new(Resources::Description).text())
                    .col(
                        ColumnDef::new(Resources::Category)
                            .string()
                            .not_null()
                            .default("guide"),
                    )
                    .col(ColumnDef::new(Resources::FileUrl).text())
                    .col(ColumnDef::new(Resources::FileName).string())
                    .col(ColumnDef::new(Resources::FileSize).big_integer())
                    .col(ColumnDef::new(Resources::FileType).string())
                    .col(
                        ColumnDef::new(Resources::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Resources::IsPublished)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Resources::CreatedBy).uuid())
                    .col(ColumnDef::new(Resources::UpdatedBy).uuid())
                    .col(timestamp_now(Resources::CreatedAt))
                    .col(timestamp_now(Resources::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Resources::Table, Resources::CreatedBy)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Testimonials::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Testimonials::Title).string().not_null())
                    .col(ColumnDef::new(Testimonials::Content).text().not_null())
                    .col(ColumnDef::new(Testimonials::AuthorName).string())
                    .col(ColumnDef::new(Testimonials::AuthorLocation).string())
                    .col(
                        ColumnDef::new(Testimonials::IsAnonymous)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Testimonials::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Testimonials::IsPublished)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Testimonials::ImageUrl).text())
                    .col(ColumnDef::new(Testimonials::CreatedBy).uuid())
                    .col(ColumnDef::new(Testimonials::UpdatedBy).uuid())
                    .col(timestamp_now(Testimonials::CreatedAt))
                    .col(timestamp_now(Testimonials::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Testimonials::Table, Testimonials::CreatedBy)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BibleStudies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BibleStudies::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(BibleStudies::Title).string().not_null())
                    .col(ColumnDef::new(BibleStudies::Description).text())
                    .col(ColumnDef::new(BibleStudies::Content).text())
                    .col(
                        ColumnDef::new(BibleStudies::ScriptureReferences)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(BibleStudies::LessonNumber).integer())
                    .col(ColumnDef::new(BibleStudies::SeriesName).string())
                    .col(
                        ColumnDef::new(BibleStudies::DifficultyLevel)
                            .string()
                            .not_null()
                            .default("beginner"),
                    )
                    .col(ColumnDef::new(BibleStudies::EstimatedDuration).integer())
                    .col(
                        ColumnDef::new(BibleStudies::IsPublished)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(BibleStudies::CreatedBy).uuid())
                    .col(ColumnDef::new(BibleStudies::UpdatedBy).uuid())
                    .col(timestamp_now(BibleStudies::CreatedAt))
                    .col(timestamp_now(BibleStudies::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(BibleStudies::Table, BibleStudies::CreatedBy)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WebsiteContent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WebsiteContent::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(WebsiteContent::PageSection)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(WebsiteContent::Content).json_binary().not_null())
                    .col(ColumnDef::new(WebsiteContent::UpdatedBy).uuid())
                    .col(timestamp_now(WebsiteContent::CreatedAt))
                    .col(ColumnDef::new(WebsiteContent::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WebsiteContent::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BibleStudies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Resources::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Resources {
    Table,
    Id,
    Title,
    Description,
    Category,
    FileUrl,
    FileName,
    FileSize,
    FileType,
    IsFeatured,
    IsPublished,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Testimonials {
    Table,
    Id,
    Title,
    Content,
    AuthorName,
    AuthorLocation,
    IsAnonymous,
    IsFeatured,
    IsPublished,
    ImageUrl,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum BibleStudies {
    Table,
    Id,
    Title,
    Description,
    Content,
    ScriptureReferences,
    LessonNumber,
    SeriesName,
    DifficultyLevel,
    EstimatedDuration,
    IsPublished,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum WebsiteContent {
    Table,
    Id,
    PageSection,
    Content,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Profiles {
    Table,
    Id,
}
