//! Row builders for sea-orm's `MockDatabase`.
//!
//! Raw-statement and aggregate queries decode from plain column maps rather
//! than entity models; these helpers build those maps.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sea_orm::Value;

pub type MockRow = BTreeMap<&'static str, Value>;

/// One row of `check_user_admin_role(uuid)`.
pub fn role_row(role: &str, granted_at: DateTime<Utc>) -> MockRow {
    BTreeMap::from([("role", Value::from(role)), ("granted_at", Value::from(granted_at))])
}

/// The single row produced by `PaginatorTrait::count`.
pub fn count_row(count: i64) -> MockRow {
    BTreeMap::from([("num_items", Value::from(count))])
}

/// An empty result set.
pub fn no_rows() -> Vec<MockRow> {
    Vec::new()
}
