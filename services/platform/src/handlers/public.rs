use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use sanctuary_domain::content::ResourceCategory;

use crate::domain::types::ANONYMOUS;
use crate::error::PlatformError;
use crate::handlers::view::{BibleStudyResponse, ResourceResponse, TestimonialResponse};
use crate::state::AppState;
use crate::usecase::content::{ListPublishedResourcesUseCase, ListPublishedUseCase, optional_text};

// ── GET /resources ───────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct ResourceQuery {
    pub category: Option<String>,
}

pub async fn public_resources(
    State(state): State<AppState>,
    Query(query): Query<ResourceQuery>,
) -> Result<Json<Vec<ResourceResponse>>, PlatformError> {
    let category = optional_text(query.category)
        .map(|c| c.parse::<ResourceCategory>())
        .transpose()?;
    let uc = ListPublishedResourcesUseCase {
        store: state.resource_repo(),
    };
    let resources = uc.execute(category).await?;
    Ok(Json(resources.into_iter().map(Into::into).collect()))
}

// ── GET /testimonials ────────────────────────────────────────────────────────

pub async fn public_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<TestimonialResponse>>, PlatformError> {
    let uc = ListPublishedUseCase {
        store: state.testimonial_repo(),
    };
    let testimonials = uc.execute().await?;
    Ok(Json(
        testimonials
            .into_iter()
            .map(|t| {
                let mut view = TestimonialResponse::from(t);
                if view.is_anonymous {
                    view.author_name = Some(ANONYMOUS.to_owned());
                    view.author_location = None;
                }
                view
            })
            .collect(),
    ))
}

// ── GET /bible-study ─────────────────────────────────────────────────────────

pub async fn public_bible_studies(
    State(state): State<AppState>,
) -> Result<Json<Vec<BibleStudyResponse>>, PlatformError> {
    let uc = ListPublishedUseCase {
        store: state.bible_study_repo(),
    };
    let studies = uc.execute().await?;
    Ok(Json(studies.into_iter().map(Into::into).collect()))
}
