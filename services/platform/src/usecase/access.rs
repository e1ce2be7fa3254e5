use tracing::{error, info};

use sanctuary_auth_types::session::Session;
use sanctuary_domain::admin_role::AdminRole;

use crate::domain::repository::RoleLookup;
use crate::domain::types::{AdminGrant, RoleLookupOutcome};
use crate::error::AccessError;

/// Admits callers by session and administrative role.
///
/// Stateless: every call resolves the role afresh with a single lookup.
/// A lookup failure denies exactly like a missing grant; only the log line
/// tells them apart.
pub struct AccessGate<L: RoleLookup> {
    pub roles: L,
}

impl<L: RoleLookup> AccessGate<L> {
    pub async fn require_access(
        &self,
        session: Option<&Session>,
        minimum: Option<AdminRole>,
    ) -> Result<AdminGrant, AccessError> {
        let session = session.ok_or(AccessError::AuthenticationRequired)?;
        let user_id = session.user_id;

        let grant = match self.roles.lookup(user_id).await {
            RoleLookupOutcome::Granted(grant) => grant,
            RoleLookupOutcome::NoGrant => {
                info!(%user_id, "no admin role grant");
                return Err(AccessError::AdminAccessRequired);
            }
            RoleLookupOutcome::Failed(e) => {
                error!(%user_id, error = %format!("{e:#}"), "role lookup failed, denying admin access");
                return Err(AccessError::AdminAccessRequired);
            }
        };

        if let Some(minimum) = minimum {
            if !grant.role.satisfies(minimum) {
                info!(%user_id, role = %grant.role, required = %minimum, "admin role below required level");
                return Err(AccessError::InsufficientPermissions);
            }
        }

        Ok(AdminGrant {
            user_id,
            role: grant.role,
            granted_at: grant.granted_at,
        })
    }
}
