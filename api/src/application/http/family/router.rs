use super::handlers::{
    create_family::{__path_create_family, create_family},
    delete_family::{__path_delete_family, delete_family},
    get_families::{__path_get_families, get_families},
    get_family::{__path_get_family, get_family},
    rename_family::{__path_rename_family, rename_family},
    toggle_member::{__path_toggle_member, toggle_member},
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_families,
    get_family,
    create_family,
    rename_family,
    delete_family,
    toggle_member
))]
pub struct FamilyApiDoc;

pub fn family_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/families", state.args.server.root_path),
            get(get_families),
        )
        .route(
            &format!("{}/families", state.args.server.root_path),
            post(create_family),
        )
        .route(
            &format!("{}/families/{{family_id}}", state.args.server.root_path),
            get(get_family),
        )
        .route(
            &format!("{}/families/{{family_id}}", state.args.server.root_path),
            put(rename_family),
        )
        .route(
            &format!("{}/families/{{family_id}}", state.args.server.root_path),
            delete(delete_family),
        )
        .route(
            &format!(
                "{}/families/{{family_id}}/members/{{profile_id}}",
                state.args.server.root_path
            ),
            post(toggle_member),
        )
}
