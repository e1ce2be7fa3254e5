use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(AdminRoles::Table)
                    .col(AdminRoles::UserId)
                    .name("idx_admin_roles_user_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Posts::Table)
                    .col(Posts::CreatedAt)
                    .name("idx_posts_created_at")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(PostComments::Table)
                    .col(PostComments::PostId)
                    .name("idx_post_comments_post_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Messages::Table)
                    .col(Messages::SenderId)
                    .col(Messages::ReceiverId)
                    .name("idx_messages_sender_receiver")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Messages::Table)
                    .col(Messages::ReceiverId)
                    .name("idx_messages_receiver_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_messages_receiver_id",
            "idx_messages_sender_receiver",
            "idx_post_comments_post_id",
            "idx_posts_created_at",
            "idx_admin_roles_user_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(Iden)]
enum AdminRoles {
    Table,
    UserId,
}

#[derive(Iden)]
enum Posts {
    Table,
    CreatedAt,
}

#[derive(Iden)]
enum PostComments {
    Table,
    PostId,
}

#[derive(Iden)]
enum Messages {
    Table,
    SenderId,
    ReceiverId,
}
