use sea_orm_migration::prelude::*;

mod m20251001_000001_create_profiles;
mod m20251001_000002_create_admin_roles;
mod m20251001_000003_create_content_tables;
mod m20251001_000004_create_community_tables;
mod m20251001_000005_create_messages;
mod m20251001_000006_create_check_user_admin_role;
mod m20251001_000007_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_profiles::Migration),
            Box::new(m20251001_000002_create_admin_roles::Migration),
            Box::new(m20251001_000003_create_content_tables::Migration),
            Box::new(m20251001_000004_create_community_tables::Migration),
            Box::new(m20251001_000005_create_messages::Migration),
            Box::new(m20251001_000006_create_check_user_admin_role::Migration),
            Box::new(m20251001_000007_add_indexes::Migration),
        ]
    }
}
