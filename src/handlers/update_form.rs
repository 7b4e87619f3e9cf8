use crate::routes;
use crate::views::{self, UPDATE_FORM_TITLE};
use axum::response::Html;

/// GET /update-cobj handler - Render the record creation form
#[utoipa::path(
    get,
    path = routes::UPDATE_COBJ,
    responses(
        (status = 200, description = "HTML form for a new custom object record", content_type = "text/html", body = String)
    ),
    tag = "pages"
)]
pub async fn update_form_handler() -> Html<String> {
    Html(views::render_update_form(UPDATE_FORM_TITLE))
}
