//! Cookie builders for the session token pair issued by the hosted auth service.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name for the access token.
pub const SANCTUARY_ACCESS_TOKEN: &str = "sanctuary_access_token";

/// Cookie name for the refresh token.
pub const SANCTUARY_REFRESH_TOKEN: &str = "sanctuary_refresh_token";

/// Cookie Max-Age for both tokens in seconds (7 days).
pub const SESSION_COOKIE_MAX_AGE: i64 = 604800;

/// Path scope of the refresh-token cookie. Refresh happens in the session
/// middleware on any path, so the cookie must reach every request.
pub const REFRESH_TOKEN_PATH: &str = "/";

fn session_cookie(
    name: &'static str,
    value: String,
    path: &'static str,
    domain: String,
    max_age: Duration,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .path(path)
        .domain(domain)
        .max_age(max_age)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Set both session cookies on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use sanctuary_auth_types::cookie::{
///     set_session_cookies, SANCTUARY_ACCESS_TOKEN, SANCTUARY_REFRESH_TOKEN,
/// };
///
/// let jar = set_session_cookies(
///     CookieJar::new(),
///     "access".to_string(),
///     "refresh".to_string(),
///     "example.com".to_string(),
/// );
/// let access = jar.get(SANCTUARY_ACCESS_TOKEN).unwrap();
/// assert_eq!(access.value(), "access");
/// assert_eq!(access.path(), Some("/"));
/// assert_eq!(access.domain(), Some("example.com"));
/// assert!(access.http_only().unwrap_or(false));
/// assert!(access.secure().unwrap_or(false));
/// assert_eq!(jar.get(SANCTUARY_REFRESH_TOKEN).unwrap().value(), "refresh");
/// ```
pub fn set_session_cookies(
    jar: CookieJar,
    access_token: String,
    refresh_token: String,
    domain: String,
) -> CookieJar {
    let max_age = Duration::seconds(SESSION_COOKIE_MAX_AGE);
    let access = session_cookie(SANCTUARY_ACCESS_TOKEN, access_token, "/", domain.clone(), max_age);
    let refresh = session_cookie(
        SANCTUARY_REFRESH_TOKEN,
        refresh_token,
        REFRESH_TOKEN_PATH,
        domain,
        max_age,
    );
    jar.add(access).add(refresh)
}

/// Clear both session cookies by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use sanctuary_auth_types::cookie::{
///     clear_session_cookies, SANCTUARY_ACCESS_TOKEN, SANCTUARY_REFRESH_TOKEN,
/// };
///
/// let jar = clear_session_cookies(CookieJar::new(), "example.com".to_string());
/// let access = jar.get(SANCTUARY_ACCESS_TOKEN).unwrap();
/// let refresh = jar.get(SANCTUARY_REFRESH_TOKEN).unwrap();
/// assert_eq!(access.max_age(), Some(time::Duration::ZERO));
/// assert_eq!(refresh.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_session_cookies(jar: CookieJar, domain: String) -> CookieJar {
    let access = session_cookie(
        SANCTUARY_ACCESS_TOKEN,
        String::new(),
        "/",
        domain.clone(),
        Duration::ZERO,
    );
    let refresh = session_cookie(
        SANCTUARY_REFRESH_TOKEN,
        String::new(),
        REFRESH_TOKEN_PATH,
        domain,
        Duration::ZERO,
    );
    jar.add(access).add(refresh)
}
