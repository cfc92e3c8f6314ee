use super::handlers::{
    clear_selection::{__path_clear_selection, clear_selection},
    get_context::{__path_get_context, get_context},
    get_selection::{__path_get_selection, get_selection},
    set_selection::{__path_set_selection, set_selection},
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_selection, set_selection, clear_selection, get_context))]
pub struct SelectionApiDoc;

pub fn selection_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/selection", state.args.server.root_path),
            get(get_selection),
        )
        .route(
            &format!("{}/selection", state.args.server.root_path),
            put(set_selection),
        )
        .route(
            &format!("{}/selection", state.args.server.root_path),
            delete(clear_selection),
        )
        .route(
            &format!("{}/selection/context", state.args.server.root_path),
            get(get_context),
        )
}
