use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use tower::ServiceBuilder;

use sanctuary_core::health::healthz;
use sanctuary_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    account::{sign_in, sign_out, sign_up},
    admin::{
        admin_bible_studies, admin_dashboard, admin_resources, admin_sections,
        admin_testimonials, admin_users,
    },
    community::{add_comment, create_post, feed, post_detail, toggle_like},
    content::{
        submit_bible_study, submit_resource, submit_testimonial, update_section,
        upload_resource_file,
    },
    health::readyz,
    message::{list_conversations, send_message, thread},
    nav::nav,
    profile::{member_dashboard, own_profile, update_profile},
    public::{public_bible_studies, public_resources, public_testimonials},
};
use crate::session::session_middleware;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Navigation
        .route("/nav", get(nav))
        // Accounts
        .route("/auth/sign-up", post(sign_up))
        .route("/auth/login", post(sign_in))
        .route("/auth/sign-out", post(sign_out))
        // Public listings
        .route("/resources", get(public_resources))
        .route("/testimonials", get(public_testimonials))
        .route("/bible-study", get(public_bible_studies))
        // Member pages
        .route("/dashboard", get(member_dashboard))
        .route("/profile", get(own_profile).put(update_profile))
        // Community
        .route("/community", get(feed))
        .route("/community/posts", post(create_post))
        .route("/community/posts/{post_id}", get(post_detail))
        .route("/community/posts/{post_id}/comments", post(add_comment))
        .route("/community/posts/{post_id}/like", post(toggle_like))
        // Messages
        .route("/messages", get(list_conversations))
        .route("/messages/{user_id}", get(thread).post(send_message))
        // Admin pages
        .route("/admin", get(admin_dashboard))
        .route("/admin/resources", get(admin_resources).post(submit_resource))
        .route("/admin/resources/upload", post(upload_resource_file))
        .route(
            "/admin/testimonials",
            get(admin_testimonials).post(submit_testimonial),
        )
        .route(
            "/admin/bible-studies",
            get(admin_bible_studies).post(submit_bible_study),
        )
        .route("/admin/content", get(admin_sections))
        .route("/admin/content/{id}", put(update_section))
        .route("/admin/users", get(admin_users))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
