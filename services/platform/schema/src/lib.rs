//! sea-orm entities for the platform database.

pub mod admin_roles;
pub mod bible_studies;
pub mod messages;
pub mod post_comments;
pub mod post_likes;
pub mod posts;
pub mod profiles;
pub mod resources;
pub mod testimonials;
pub mod website_content;
