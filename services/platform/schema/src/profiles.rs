use sea_orm::entity::prelude::*;

/// Member profile. The row id equals the auth-service user id; rows are
/// created by the auth service's sign-up hook from the sign-up metadata.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub journey_stage: Option<String>,
    pub is_mentor: bool,
    pub location: Option<String>,
    pub interests: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::posts::Entity")]
    Posts,
    #[sea_orm(has_many = "super::admin_roles::Entity")]
    AdminRoles,
}

impl Related<super::posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl Related<super::admin_roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdminRoles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
