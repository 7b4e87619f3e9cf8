use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{create_handler, health_handler, list_handler, update_form_handler};
use crate::routes;
use crate::state::AppState;

/// Build the full application router
///
/// Paths without a route fall through to the static asset directory.
pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route(routes::HOME, get(list_handler))
        .route(
            routes::UPDATE_COBJ,
            get(update_form_handler).post(create_handler),
        )
        .route(routes::HEALTH, get(health_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
