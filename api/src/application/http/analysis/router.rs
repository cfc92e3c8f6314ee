use super::handlers::{
    analyze_image::{__path_analyze_image, MAX_IMAGE_SIZE, analyze_image},
    analyze_url::{__path_analyze_url, analyze_url},
    get_favorites::{__path_get_favorites, get_favorites},
    get_history::{__path_get_history, get_history},
    get_history_entry::{__path_get_history_entry, get_history_entry},
    toggle_favorite::{__path_toggle_favorite, toggle_favorite},
};
use crate::application::{
    http::server::app_state::AppState,
    rate_limit::{AnalysisRateLimiter, rate_limit_middleware},
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

/// Multipart framing on top of the largest accepted image.
const BODY_LIMIT: usize = MAX_IMAGE_SIZE + 1024 * 1024;

#[derive(OpenApi)]
#[openapi(paths(
    analyze_image,
    analyze_url,
    get_history,
    get_history_entry,
    toggle_favorite,
    get_favorites
))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    let mut analyze = Router::new()
        .route(&format!("{}/analysis/image", root_path), post(analyze_image))
        .route(&format!("{}/analysis/url", root_path), post(analyze_url));

    // Only the provider-bound routes are throttled.
    if let Some(limiter) = AnalysisRateLimiter::per_minute(state.args.server.rate_limit_per_minute)
    {
        analyze = analyze.route_layer(middleware::from_fn_with_state(
            limiter,
            rate_limit_middleware,
        ));
    }

    Router::new()
        .route(
            &format!("{}/analysis/history", root_path),
            get(get_history),
        )
        .route(
            &format!("{}/analysis/history/{{entry_id}}", root_path),
            get(get_history_entry),
        )
        .route(
            &format!("{}/analysis/history/{{entry_id}}/favorite", root_path),
            post(toggle_favorite),
        )
        .route(
            &format!("{}/analysis/favorites", root_path),
            get(get_favorites),
        )
        .merge(analyze)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
}
