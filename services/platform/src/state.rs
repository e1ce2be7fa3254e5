use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::infra::backend::BackendClient;
use crate::infra::db::{
    DbBibleStudyRepository, DbCommentRepository, DbLikeRepository, DbMessageRepository,
    DbPostRepository, DbProfileRepository, DbResourceRepository, DbTestimonialRepository,
    DbWebsiteContentRepository,
};
use crate::infra::roles::DbRoleRepository;
use crate::usecase::access::AccessGate;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    /// sea-orm drops `Clone` on the connection when `mock` is enabled.
    pub db: Arc<DatabaseConnection>,
    pub backend: BackendClient,
    pub jwt_secret: String,
    pub cookie_domain: String,
    pub signup_redirect_url: Option<String>,
}

impl AppState {
    pub fn access_gate(&self) -> AccessGate<DbRoleRepository> {
        AccessGate {
            roles: self.role_repo(),
        }
    }

    pub fn role_repo(&self) -> DbRoleRepository {
        DbRoleRepository {
            db: self.db.clone(),
        }
    }

    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn resource_repo(&self) -> DbResourceRepository {
        DbResourceRepository {
            db: self.db.clone(),
        }
    }

    pub fn testimonial_repo(&self) -> DbTestimonialRepository {
        DbTestimonialRepository {
            db: self.db.clone(),
        }
    }

    pub fn bible_study_repo(&self) -> DbBibleStudyRepository {
        DbBibleStudyRepository {
            db: self.db.clone(),
        }
    }

    pub fn website_content_repo(&self) -> DbWebsiteContentRepository {
        DbWebsiteContentRepository {
            db: self.db.clone(),
        }
    }

    pub fn post_repo(&self) -> DbPostRepository {
        DbPostRepository {
            db: self.db.clone(),
        }
    }

    pub fn comment_repo(&self) -> DbCommentRepository {
        DbCommentRepository {
            db: self.db.clone(),
        }
    }

    pub fn like_repo(&self) -> DbLikeRepository {
        DbLikeRepository {
            db: self.db.clone(),
        }
    }

    pub fn message_repo(&self) -> DbMessageRepository {
        DbMessageRepository {
            db: self.db.clone(),
        }
    }
}
