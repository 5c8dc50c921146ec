//! Route table and boundary middleware.

use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{docs::ApiDoc, handlers::people, middleware, state::AppState};

pub const PEOPLE_BASE_PATH: &str = "/api/people";

/// Person routes only, without middleware. Unmatched paths fall through to
/// axum's default 404.
pub fn people_routes() -> Router<AppState> {
    Router::new()
        .route(
            PEOPLE_BASE_PATH,
            get(people::list_people).post(people::save_person),
        )
        .route(
            "/api/people/{id}",
            get(people::get_person).delete(people::delete_person),
        )
        .route(
            "/api/people/firstByName/{name}",
            get(people::get_first_by_name),
        )
}

/// The full application: routes, optional API docs, and shared layers.
pub fn app(state: AppState) -> Router {
    let api_docs_enabled = state.config.api_docs_enabled;
    let cors_allow_any_origin = state.config.cors_allow_any_origin;

    let mut router = people_routes().with_state(state);

    if api_docs_enabled {
        router = router
            .merge(SwaggerUi::new("/api/docs").url("/api-doc/openapi.json", ApiDoc::openapi()));
    }

    if cors_allow_any_origin {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers(Any)
                .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
        );
    }

    // Outermost first: request id span wraps tracing and request logging.
    router.layer(
        ServiceBuilder::new()
            .layer(axum_middleware::from_fn(middleware::request_id))
            .layer(TraceLayer::new_for_http())
            .layer(axum_middleware::from_fn(middleware::log_requests)),
    )
}
