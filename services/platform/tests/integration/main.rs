mod account_test;
mod admin_test;
mod community_test;
mod helpers;
mod http_test;
mod profile_test;
