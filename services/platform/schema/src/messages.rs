use sea_orm::entity::prelude::*;

/// Direct message between two members. Append-only.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profiles::Entity",
        from = "Column::SenderId",
        to = "super::profiles::Column::Id"
    )]
    Sender,
    #[sea_orm(
        belongs_to = "super::profiles::Entity",
        from = "Column::ReceiverId",
        to = "super::profiles::Column::Id"
    )]
    Receiver,
}

impl ActiveModelBehavior for ActiveModel {}
