use axum::Router;
use packhub::kernel::prelude::ApiState;
use packhub::kernel::server::method_not_allowed;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    info(title = "PackHub", description = "Pack-size registry and pack allocation API"),
    tags(
        (name = "System", description = "Service health"),
        (name = "Packing", description = "Pack sizes and allocation plans"),
    )
)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let static_dir = state.config.storage.static_dir.clone();

    // Separate the OpenAPI routes and the API documentation object
    let (api_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(packhub::server::router::system_router())
        .merge(packhub::server::router::packing_router())
        .with_state(state)
        .split_for_parts();

    // Create the Scalar UI routes
    let scalar_routes = Scalar::with_url("/api", api_doc);

    // Everything that is not an API route is a static asset
    Router::new()
        .merge(api_routes)
        .merge(scalar_routes)
        .fallback_service(ServeDir::new(static_dir))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
}
