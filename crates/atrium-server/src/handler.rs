//! Request handlers for the content API.
//!
//! Handlers pull from the store, convert absent results to 404, and leave
//! status-code mapping of everything else to [`ApiError`]'s
//! `IntoResponse`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;

use atrium_store::enrich::{attach_categories, attach_category, PostWithCategory};
use atrium_types::{
    Category, ContactMessage, ContactPayload, EntityId, Project, Service, Subscriber,
    SubscribePayload, TeamMember, Testimonial,
};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// All blog posts, newest first, each enriched with its category when
/// resolvable.
pub async fn list_blog_posts(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PostWithCategory>>> {
    let posts = state.store.blog_posts().await?;
    Ok(Json(attach_categories(state.store.as_ref(), posts).await))
}

/// One blog post by slug, enriched.
pub async fn get_blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<PostWithCategory>> {
    let post = state
        .store
        .blog_post_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog post not found".into()))?;
    Ok(Json(attach_category(state.store.as_ref(), post).await))
}

#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub slug: Option<String>,
}

/// All categories, or a single one when `?slug=` is present.
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> ApiResult<Response> {
    match query.slug {
        Some(slug) => {
            let category: Category = state
                .store
                .category_by_slug(&slug)
                .await?
                .ok_or_else(|| ApiError::NotFound("Category not found".into()))?;
            Ok(Json(category).into_response())
        }
        None => Ok(Json(state.store.categories().await?).into_response()),
    }
}

/// All services.
pub async fn list_services(State(state): State<AppState>) -> ApiResult<Json<Vec<Service>>> {
    Ok(Json(state.store.services().await?))
}

/// One service by slug.
pub async fn get_service(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Service>> {
    let service = state
        .store
        .service_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound("Service not found".into()))?;
    Ok(Json(service))
}

/// All team members.
pub async fn list_team_members(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TeamMember>>> {
    Ok(Json(state.store.team_members().await?))
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectQuery {
    pub id: Option<EntityId>,
}

/// All projects, or a single one when `?id=` is present.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> ApiResult<Response> {
    match query.id {
        Some(id) => {
            let project: Project = state
                .store
                .project(id)
                .await?
                .ok_or_else(|| ApiError::NotFound("Project not found".into()))?;
            Ok(Json(project).into_response())
        }
        None => Ok(Json(state.store.projects().await?).into_response()),
    }
}

/// All testimonials.
pub async fn list_testimonials(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Testimonial>>> {
    Ok(Json(state.store.testimonials().await?))
}

/// Accept a contact form submission. 201 with the stored record, or 400
/// listing every failing field.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> ApiResult<(StatusCode, Json<ContactMessage>)> {
    let input = payload.validate()?;
    let message = state.store.create_contact_message(input).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// Subscribe an email to the newsletter. The duplicate check runs before
/// the store create, so a rejected duplicate never touches the counter.
pub async fn subscribe(
    State(state): State<AppState>,
    Json(payload): Json<SubscribePayload>,
) -> ApiResult<(StatusCode, Json<Subscriber>)> {
    let input = payload.validate()?;
    if state
        .store
        .subscriber_by_email(&input.email)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("Email already subscribed".into()));
    }
    let subscriber = state.store.create_subscriber(input).await?;
    Ok((StatusCode::CREATED, Json(subscriber)))
}

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Service name and version.
pub async fn info() -> Json<serde_json::Value> {
    Json(json!({
        "name": "atrium-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
