//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    agenda_handler, event_details_api_handler, event_details_handler, health_handler,
    home_handler, member_profile_handler, not_found_handler, submit_form_handler,
    submit_form_post_handler, submit_talent_handler, talent_handler,
};
use crate::server::static_files::{serve_asset, serve_image};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// CORS for the JSON endpoints; an empty list allows any origin
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps, allowed_origins: &[String]) -> Router {
    let app_state = AppState {
        deps: Arc::new(deps),
    };

    Router::new()
        // Pages
        .route("/", get(home_handler))
        .route("/talent", get(talent_handler))
        .route("/talent/:id", get(member_profile_handler))
        .route("/agenda", get(agenda_handler))
        .route("/agenda/:id", get(event_details_handler))
        .route("/submit", get(submit_form_handler).post(submit_form_post_handler))
        // JSON API
        .route("/api/submit-talent", post(submit_talent_handler))
        .route("/api/events/:id", get(event_details_api_handler))
        // Static files
        .route("/assets/*path", get(serve_asset))
        .route("/images/*path", get(serve_image))
        // Health check
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

