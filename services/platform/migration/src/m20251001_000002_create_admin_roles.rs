use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminRoles::Table)
                    .if_not_exists()
                    // Grants are inserted by hand in SQL, so the id defaults server-side.
                    .col(
                        ColumnDef::new(AdminRoles::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(AdminRoles::UserId).uuid().not_null())
                    .col(ColumnDef::new(AdminRoles::Role).string().not_null())
                    .col(ColumnDef::new(AdminRoles::GrantedBy).uuid())
                    .col(
                        ColumnDef::new(AdminRoles::GrantedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::col(AdminRoles::Role).is_in([
                        "moderator",
                        "content_admin",
                        "super_admin",
                    ]))
                    .foreign_key(
                        ForeignKey::create()
                            .from(AdminRoles::Table, AdminRoles::UserId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminRoles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AdminRoles {
    Table,
    Id,
    UserId,
    Role,
    GrantedBy,
    GrantedAt,
}

#[derive(Iden)]
enum Profiles {
    Table,
    Id,
}
