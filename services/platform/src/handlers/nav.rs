//! Navigation items for the current session context.

use axum::Json;
use serde::Serialize;

use sanctuary_auth_types::session::MaybeSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

const fn item(label: &'static str, href: &'static str) -> NavItem {
    NavItem { label, href }
}

const PUBLIC_LINKS: [NavItem; 5] = [
    item("Home", "/"),
    item("Resources", "/resources"),
    item("Bible Study", "/bible-study"),
    item("Testimonials", "/testimonials"),
    item("Contact", "/contact"),
];

const PUBLIC_ACTIONS: [NavItem; 2] = [
    item("Sign In", "/auth/login"),
    item("Join Community", "/auth/sign-up"),
];

const MEMBER_LINKS: [NavItem; 5] = [
    item("Dashboard", "/dashboard"),
    item("Community", "/community"),
    item("Messages", "/messages"),
    item("Resources", "/resources"),
    item("Bible Study", "/bible-study"),
];

const MEMBER_ACTIONS: [NavItem; 2] = [item("Profile", "/profile"), item("Sign Out", "/auth/sign-out")];

#[derive(Debug, Serialize)]
pub struct NavResponse {
    pub authenticated: bool,
    /// Target of the logo link.
    pub home: &'static str,
    pub links: &'static [NavItem],
    pub actions: &'static [NavItem],
}

pub fn nav_for(authenticated: bool) -> NavResponse {
    if authenticated {
        NavResponse {
            authenticated,
            home: "/dashboard",
            links: &MEMBER_LINKS,
            actions: &MEMBER_ACTIONS,
        }
    } else {
        NavResponse {
            authenticated,
            home: "/",
            links: &PUBLIC_LINKS,
            actions: &PUBLIC_ACTIONS,
        }
    }
}

// ── GET /nav ─────────────────────────────────────────────────────────────────

pub async fn nav(MaybeSession(session): MaybeSession) -> Json<NavResponse> {
    Json(nav_for(session.is_some()))
}
