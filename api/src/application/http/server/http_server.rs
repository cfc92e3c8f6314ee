use std::sync::Arc;

use axum::{
    Router,
    extract::Request,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE},
    },
    routing::get,
};
use axum_prometheus::PrometheusMetricLayer;
use safecheck_core::{application::create_service, domain::common::SafeCheckConfig};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info_span, warn};
use utoipa::{OpenApi, openapi::OpenApi as OpenApiDocument};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use super::{app_state::AppState, config::get_config, openapi::ApiDoc};
use crate::application::http::{
    analysis::router::analysis_routes, family::router::family_routes,
    health::health_routes, profile::router::profile_routes,
    selection::router::selection_routes,
};
use crate::args::{Args, ServerArgs};

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = SafeCheckConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

/// Full application router: docs, API routes, optional `/metrics`, CORS and
/// request tracing.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let root_path = state.args.server.root_path.clone();

    let mut app = docs_routes(&root_path)
        .route(&format!("{}/config", root_path), get(get_config))
        .merge(profile_routes(state.clone()))
        .merge(family_routes(state.clone()))
        .merge(selection_routes(state.clone()))
        .merge(analysis_routes(state.clone()))
        .merge(health_routes(&root_path));

    // Installs a process-wide metrics recorder.
    if state.args.server.metrics_enabled {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        app = app
            .route(
                &format!("{}/metrics", root_path),
                get(|| async move { metric_handle.render() }),
            )
            .layer(prometheus_layer);
    }

    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri()
        )
    });

    Ok(app
        .layer(trace_layer)
        .layer(cors_layer(&state.args.server))
        .with_state(state))
}

/// OpenAPI document with every path moved under `root_path`.
fn openapi_document(root_path: &str) -> OpenApiDocument {
    let mut openapi = ApiDoc::openapi();
    openapi.paths.paths = std::mem::take(&mut openapi.paths.paths)
        .into_iter()
        .map(|(path, item)| (format!("{}{}", root_path, path), item))
        .collect();
    openapi
}

fn docs_routes(root_path: &str) -> Router<AppState> {
    let openapi = openapi_document(root_path);
    let spec_url = format!("{}/api-docs/openapi.json", root_path);

    Router::new()
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(spec_url.clone(), openapi.clone()),
        )
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(spec_url).path(format!("{}/rapidoc", root_path)))
}

fn cors_layer(server: &ServerArgs) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| warn!(origin = %origin, "Ignoring invalid allowed origin"))
                .ok()
        })
        .collect();
    debug!(?origins, "CORS origins");

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT])
        .allow_credentials(true)
}
