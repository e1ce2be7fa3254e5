use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// SECURITY DEFINER so the lookup works under row-level security on admin_roles.
const CREATE_FUNCTION: &str = r#"
CREATE OR REPLACE FUNCTION check_user_admin_role(user_id uuid)
RETURNS TABLE (role text, granted_at timestamptz)
LANGUAGE sql
STABLE
SECURITY DEFINER
AS $$
    SELECT ar.role::text, ar.granted_at
    FROM admin_roles ar
    WHERE ar.user_id = check_user_admin_role.user_id
    ORDER BY CASE ar.role
        WHEN 'super_admin' THEN 3
        WHEN 'content_admin' THEN 2
        WHEN 'moderator' THEN 1
        ELSE 0
    END DESC
$$;
"#;

const DROP_FUNCTION: &str = "DROP FUNCTION IF EXISTS check_user_admin_role(uuid);";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(CREATE_FUNCTION)
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(DROP_FUNCTION)
            .await?;
        Ok(())
    }
}
