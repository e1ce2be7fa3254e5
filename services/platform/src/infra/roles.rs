use std::sync::Arc;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryOrder, Statement,
};

use sanctuary_domain::admin_role::AdminRole;
use sanctuary_domain::id::UserId;
use sanctuary_platform_schema::admin_roles;

use crate::domain::repository::{RoleDirectory, RoleLookup};
use crate::domain::types::{RoleGrant, RoleLookupOutcome, StoredGrant};
use crate::error::PlatformError;

/// Row shape of the `check_user_admin_role` database function.
#[derive(Debug, FromQueryResult)]
struct RoleRow {
    role: String,
    granted_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct DbRoleRepository {
    pub db: Arc<DatabaseConnection>,
}

impl RoleLookup for DbRoleRepository {
    async fn lookup(&self, user_id: UserId) -> RoleLookupOutcome {
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            "SELECT role, granted_at FROM check_user_admin_role($1)",
            [user_id.0.into()],
        );
        match RoleRow::find_by_statement(stmt)
            .all(self.db.as_ref())
            .await
            .context("call check_user_admin_role")
        {
            Ok(rows) => highest_grant(user_id, rows),
            Err(e) => RoleLookupOutcome::Failed(e),
        }
    }
}

/// Keep the strongest recognised role. Unrecognised role strings are skipped.
fn highest_grant(user_id: UserId, rows: Vec<RoleRow>) -> RoleLookupOutcome {
    let best = rows
        .into_iter()
        .filter_map(|row| match row.role.parse::<AdminRole>() {
            Ok(role) => Some(RoleGrant {
                role,
                granted_at: row.granted_at,
            }),
            Err(_) => {
                tracing::warn!(%user_id, role = %row.role, "ignoring unrecognised admin role");
                None
            }
        })
        .max_by_key(|grant| grant.role.rank());
    match best {
        Some(grant) => RoleLookupOutcome::Granted(grant),
        None => RoleLookupOutcome::NoGrant,
    }
}

impl RoleDirectory for DbRoleRepository {
    async fn list_grants(&self) -> Result<Vec<StoredGrant>, PlatformError> {
        let models = admin_roles::Entity::find()
            .order_by_asc(admin_roles::Column::GrantedAt)
            .all(self.db.as_ref())
            .await
            .context("list admin roles")?;
        Ok(models
            .into_iter()
            .filter_map(|model| match model.role.parse::<AdminRole>() {
                Ok(role) => Some(StoredGrant {
                    user_id: UserId(model.user_id),
                    role,
                    granted_by: model.granted_by.map(UserId),
                    granted_at: model.granted_at,
                }),
                Err(_) => {
                    tracing::warn!(grant_id = %model.id, role = %model.role, "skipping unrecognised admin role");
                    None
                }
            })
            .collect())
    }
}
