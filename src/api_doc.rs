use utoipa::OpenApi;

use crate::error::HealthResponse;
use crate::handlers;
use crate::models::RecordProperties;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hubspot-cobj-proxy",
        version = "1.0.0",
        description = "Lists and creates HubSpot custom object records through server-rendered pages"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::update_form::update_form_handler,
        handlers::create::create_handler
    ),
    components(
        schemas(
            RecordProperties,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "pages", description = "Custom object pages")
    )
)]
pub struct ApiDoc;
