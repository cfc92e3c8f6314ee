use crate::application::http::{
    analysis::router::AnalysisApiDoc, family::router::FamilyApiDoc, health::__path_health,
    profile::router::ProfileApiDoc, selection::router::SelectionApiDoc,
    server::config::__path_get_config,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SafeCheck API",
        description = "Personalized product safety analysis from product photos."
    ),
    paths(health, get_config),
    nest(
        (path = "/profiles", api = ProfileApiDoc),
        (path = "/families", api = FamilyApiDoc),
        (path = "/selection", api = SelectionApiDoc),
        (path = "/analysis", api = AnalysisApiDoc),
    )
)]
pub struct ApiDoc;
