use axum::routing::{get, post};
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::redirects::redirect_legacy_paths;
use crate::state::AppState;

/// Build the axum router with every content API endpoint.
///
/// CORS is open to all origins (the site front end may be served from a
/// CDN domain); preflight OPTIONS requests short-circuit inside the CORS
/// layer. Unmatched methods on matched paths get axum's 405.
pub fn build_router(state: AppState, enable_redirects: bool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .route("/api/blog-posts", get(handler::list_blog_posts))
        .route("/api/blog-posts/:slug", get(handler::get_blog_post))
        .route("/api/categories", get(handler::list_categories))
        .route("/api/services", get(handler::list_services))
        .route("/api/services/:slug", get(handler::get_service))
        .route("/api/team-members", get(handler::list_team_members))
        .route("/api/projects", get(handler::list_projects))
        .route("/api/testimonials", get(handler::list_testimonials))
        .route("/api/contact", post(handler::submit_contact))
        .route("/api/subscribe", post(handler::subscribe))
        .route("/api/health", get(handler::health))
        .route("/api/info", get(handler::info))
        .with_state(state);

    if enable_redirects {
        app = app.layer(middleware::from_fn(redirect_legacy_paths));
    }

    app.layer(cors).layer(TraceLayer::new_for_http())
}
