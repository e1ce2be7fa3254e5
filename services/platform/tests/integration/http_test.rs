//! Router-level tests: the real middleware stack and handlers against a
//! sea-orm `MockDatabase`. The backend client points at an unroutable host, so
//! any case that would reach the hosted auth service is out of scope here.

use std::sync::Arc;

use axum::http::{HeaderValue, StatusCode, header};
use axum_test::{TestResponse, TestServer};
use chrono::{Duration, Utc};
use sea_orm::{
    DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult,
};
use serde_json::{Value, json};
use uuid::Uuid;

use sanctuary_platform::infra::backend::BackendClient;
use sanctuary_platform::router::build_router;
use sanctuary_platform::state::AppState;
use sanctuary_platform_schema::{
    bible_studies, post_likes, posts, profiles, testimonials, website_content,
};
use sanctuary_testing::rows::{count_row, no_rows, role_row};
use sanctuary_testing::session::{MockSession, TEST_JWT_SECRET};

fn server(db: impl Into<Arc<DatabaseConnection>>) -> TestServer {
    let state = AppState {
        db: db.into(),
        backend: BackendClient::new("http://backend.invalid", "anon"),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        cookie_domain: "localhost".to_owned(),
        signup_redirect_url: None,
    };
    TestServer::new(build_router(state)).unwrap()
}

fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

/// Every statement the mock connection has seen so far, debug-formatted.
fn executed(db: &DatabaseConnection) -> String {
    let DatabaseConnection::MockDatabaseConnection(conn) = db else {
        panic!("not a mock connection");
    };
    let log = DatabaseConnection::MockDatabaseConnection(conn.clone()).into_transaction_log();
    format!("{log:?}")
}

fn cookie(session: &MockSession) -> HeaderValue {
    HeaderValue::from_str(&session.cookie_header()).unwrap()
}

fn location(response: &TestResponse) -> String {
    response
        .header(header::LOCATION)
        .to_str()
        .unwrap()
        .to_owned()
}

fn profile_model(id: Uuid, display_name: &str) -> profiles::Model {
    profiles::Model {
        id,
        display_name: Some(display_name.to_owned()),
        bio: None,
        journey_stage: Some("established_faith".to_owned()),
        is_mentor: false,
        location: None,
        interests: None,
        created_at: Utc::now() - Duration::days(30),
        updated_at: Utc::now() - Duration::days(1),
    }
}

// ── health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_healthy() {
    let server = server(empty_db());

    server.get("/healthz").await.assert_status_ok();
    server.get("/readyz").await.assert_status_ok();
}

// ── admin pages ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_redirect_anonymous_admin_visit_to_login() {
    let server = server(empty_db());

    let response = server.get("/admin").await;

    response.assert_status(StatusCode::SEE_OTHER);
    let target = location(&response);
    assert!(target.starts_with("/auth/login?message=Admin"), "{target}");
}

#[tokio::test]
async fn should_redirect_member_without_grant_to_login() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([no_rows()])
        .into_connection();
    let server = server(db);
    let session = MockSession::random();

    let response = server
        .get("/admin/resources")
        .add_header(header::COOKIE, cookie(&session))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/auth/login?message="));
}

#[tokio::test]
async fn should_fail_closed_when_role_lookup_errors() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([sea_orm::DbErr::Custom("connection reset".to_owned())])
        .into_connection();
    let server = server(db);
    let session = MockSession::random();

    let response = server
        .get("/admin")
        .add_header(header::COOKIE, cookie(&session))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/auth/login?message="));
}

#[tokio::test]
async fn should_send_lower_admin_from_users_page_to_admin_home() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![role_row("content_admin", Utc::now())]])
        .into_connection();
    let server = server(db);
    let session = MockSession::random();

    let response = server
        .get("/admin/users")
        .add_header(header::COOKIE, cookie(&session))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");
}

#[tokio::test]
async fn should_render_admin_dashboard_for_moderator() {
    let session = MockSession::random();
    let granted_at = Utc::now() - Duration::days(3);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![role_row("moderator", granted_at)]])
        .append_query_results([vec![profile_model(session.user_id.0, "Ruth")]])
        .append_query_results([
            vec![count_row(4)],
            vec![count_row(2)],
            vec![count_row(7)],
            vec![count_row(31)],
        ])
        .into_connection();
    let server = server(db);

    let response = server
        .get("/admin")
        .add_header(header::COOKIE, cookie(&session))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["display_name"], "Ruth");
    assert_eq!(body["grant"]["role"], "moderator");
    assert_eq!(body["counts"]["resources"], 4);
    assert_eq!(body["counts"]["testimonials"], 2);
    assert_eq!(body["counts"]["bible_studies"], 7);
    assert_eq!(body["counts"]["profiles"], 31);
}

#[tokio::test]
async fn should_send_moderator_from_content_pages_to_admin_home() {
    for path in [
        "/admin/resources",
        "/admin/testimonials",
        "/admin/bible-studies",
        "/admin/content",
    ] {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![role_row("moderator", Utc::now())]])
            .into_connection();
        let server = server(db);
        let session = MockSession::random();

        let response = server
            .get(path)
            .add_header(header::COOKIE, cookie(&session))
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/admin", "{path}");
    }
}

#[tokio::test]
async fn should_list_website_sections_for_content_admin() {
    let section_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![role_row("content_admin", Utc::now())]])
        .append_query_results([vec![website_content::Model {
            id: section_id,
            page_section: "hero".to_owned(),
            content: json!({"headline": "Welcome home"}),
            updated_by: None,
            created_at: Utc::now() - Duration::days(60),
            updated_at: None,
        }]])
        .into_connection();
    let server = server(db);
    let session = MockSession::random();

    let response = server
        .get("/admin/content")
        .add_header(header::COOKIE, cookie(&session))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body[0]["id"], section_id.to_string());
    assert_eq!(body[0]["page_section"], "hero");
    assert_eq!(body[0]["content"]["headline"], "Welcome home");
}

// ── admin writes ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_anonymous_content_write_with_401() {
    let server = server(empty_db());

    let response = server
        .post("/admin/resources")
        .json(&json!({"title": "Prayer guide"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["kind"], "AUTHENTICATION_REQUIRED");
}

#[tokio::test]
async fn should_reject_moderator_content_write_with_403() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![role_row("moderator", Utc::now())]])
        .into_connection();
    let server = server(db);
    let session = MockSession::random();

    let response = server
        .post("/admin/resources")
        .add_header(header::COOKIE, cookie(&session))
        .json(&json!({"title": "Prayer guide"}))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(response.json::<Value>()["kind"], "INSUFFICIENT_PERMISSIONS");
}

#[tokio::test]
async fn should_reject_member_without_grant_with_403() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([no_rows()])
        .into_connection();
    let server = server(db);
    let session = MockSession::random();

    let response = server
        .post("/admin/testimonials")
        .add_header(header::COOKIE, cookie(&session))
        .json(&json!({"title": "Found peace", "content": "..."}))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(response.json::<Value>()["kind"], "ADMIN_ACCESS_REQUIRED");
}

fn stored_bible_study(title: &str, created_by: Uuid) -> bible_studies::Model {
    let now = Utc::now();
    bible_studies::Model {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        description: None,
        content: None,
        scripture_references: json!([]),
        lesson_number: None,
        series_name: None,
        difficulty_level: "beginner".to_owned(),
        estimated_duration: None,
        is_published: true,
        created_by: Some(created_by),
        updated_by: Some(created_by),
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn should_create_bible_study_with_blank_lesson_number_as_null() {
    let session = MockSession::random();
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![role_row("content_admin", Utc::now())]])
            .append_query_results([vec![stored_bible_study("Grace", session.user_id.0)]])
            .into_connection(),
    );
    let server = server(db.clone());

    let response = server
        .post("/admin/bible-studies")
        .add_header(header::COOKIE, cookie(&session))
        .json(&json!({"title": "Grace", "lesson_number": "  "}))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["title"], "Grace");
    assert_eq!(body["lesson_number"], Value::Null);
    assert_eq!(body["is_published"], true);

    // The insert itself carried the defaults: published, both numbers null.
    let sql = executed(&db);
    assert!(sql.contains("INSERT INTO"), "{sql}");
    assert!(sql.contains(r#"String(Some("Grace"))"#), "{sql}");
    assert!(sql.contains("Bool(Some(true))"), "{sql}");
    assert!(sql.contains("Int(None)"), "{sql}");
}

#[tokio::test]
async fn should_reject_non_numeric_lesson_number_with_400() {
    let session = MockSession::random();
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![role_row("content_admin", Utc::now())]])
            .into_connection(),
    );
    let server = server(db.clone());

    let response = server
        .post("/admin/bible-studies")
        .add_header(header::COOKIE, cookie(&session))
        .json(&json!({"title": "Grace", "lesson_number": "three"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_NUMBER");
    assert!(!executed(&db).contains("INSERT INTO"));
}

// ── public listings ──────────────────────────────────────────────────────────

fn stored_testimonial(title: &str, is_anonymous: bool) -> testimonials::Model {
    let now = Utc::now();
    testimonials::Model {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        content: "I found a home here.".to_owned(),
        author_name: Some("Mary".to_owned()),
        author_location: Some("Dayton, OH".to_owned()),
        is_anonymous,
        is_featured: false,
        is_published: true,
        image_url: None,
        created_by: None,
        updated_by: None,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn should_mask_anonymous_testimonial_authors() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            stored_testimonial("Named", false),
            stored_testimonial("Hidden", true),
        ]])
        .into_connection();
    let server = server(db);

    let response = server.get("/testimonials").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body[0]["title"], "Named");
    assert_eq!(body[0]["author_name"], "Mary");
    assert_eq!(body[0]["author_location"], "Dayton, OH");
    assert_eq!(body[1]["title"], "Hidden");
    assert_eq!(body[1]["author_name"], "Anonymous");
    assert_eq!(body[1]["author_location"], Value::Null);
}

// ── member pages ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_redirect_anonymous_member_pages_to_login() {
    let server = server(empty_db());

    for path in ["/dashboard", "/profile", "/community", "/messages"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/auth/login", "{path}");
    }
}

#[tokio::test]
async fn should_treat_expired_token_without_refresh_as_anonymous() {
    let server = server(empty_db());
    let session = MockSession::random();
    let expired = format!(
        "{}={}",
        sanctuary_auth_types::cookie::SANCTUARY_ACCESS_TOKEN,
        session.expired_access_token()
    );

    let response = server
        .get("/dashboard")
        .add_header(header::COOKIE, HeaderValue::from_str(&expired).unwrap())
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/auth/login");
}

#[tokio::test]
async fn should_reject_anonymous_post_creation() {
    let server = server(empty_db());

    let response = server
        .post("/community/posts")
        .json(&json!({"content": "Please pray for my family", "post_type": "prayer_request"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

fn stored_post(author: Uuid) -> (posts::Model, profiles::Model) {
    let now = Utc::now();
    let post = posts::Model {
        id: Uuid::new_v4(),
        author_id: author,
        title: None,
        content: "Grateful for this week".to_owned(),
        post_type: "encouragement".to_owned(),
        is_anonymous: false,
        created_at: now,
        updated_at: now,
    };
    (post, profile_model(author, "Naomi"))
}

#[tokio::test]
async fn should_collapse_concurrent_likes_into_one_row() {
    let session = MockSession::random();
    let (post, author) = stored_post(Uuid::new_v4());
    let post_id = post.id;
    let no_like: Vec<post_likes::Model> = Vec::new();
    // Two toggles that both read "not liked" before either insert lands. The
    // second insert hits the primary key and affects no row.
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![(post.clone(), author.clone())]])
            .append_query_results([no_like.clone()])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results([vec![count_row(1)]])
            .append_query_results([vec![(post, author)]])
            .append_query_results([no_like])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .append_query_results([vec![count_row(1)]])
            .into_connection(),
    );
    let server = server(db.clone());
    let path = format!("/community/posts/{post_id}/like");

    for _ in 0..2 {
        let response = server
            .post(&path)
            .add_header(header::COOKIE, cookie(&session))
            .await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["liked"], true);
        assert_eq!(body["like_count"], 1);
    }

    let sql = executed(&db);
    assert_eq!(sql.matches("ON CONFLICT").count(), 2, "{sql}");
    assert_eq!(sql.matches("DO NOTHING").count(), 2, "{sql}");
}

// ── GET /nav ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_serve_public_nav_without_session() {
    let server = server(empty_db());

    let body = server.get("/nav").await.json::<Value>();

    assert_eq!(body["authenticated"], false);
    assert_eq!(body["home"], "/");
}

#[tokio::test]
async fn should_serve_member_nav_with_session() {
    let server = server(empty_db());
    let session = MockSession::random();

    let body = server
        .get("/nav")
        .add_header(header::COOKIE, cookie(&session))
        .await
        .json::<Value>();

    assert_eq!(body["authenticated"], true);
    assert_eq!(body["home"], "/dashboard");
}
