use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::ubigeo::handlers::{self, legacy_handler};
use crate::features::ubigeo::services::UbigeoService;

/// Create routes for the ubigeo feature
pub fn routes(service: Arc<UbigeoService>) -> Router {
    Router::new()
        .route("/api/ubigeo/all", get(handlers::get_all))
        // State routes
        .route("/api/ubigeo/states", get(handlers::list_states))
        .route("/api/ubigeo/states/{code}", get(handlers::get_state))
        // Municipality routes
        .route(
            "/api/ubigeo/municipalities/{code}",
            get(handlers::get_municipality),
        )
        // Parish routes
        .route("/api/ubigeo/parishes/{code}", get(handlers::get_parish))
        // Name routes (state → municipality → parish)
        .route(
            "/api/ubigeo/by-name/{state}",
            get(handlers::get_state_by_name),
        )
        .route(
            "/api/ubigeo/by-name/{state}/{municipality}",
            get(handlers::get_municipality_by_name),
        )
        .route(
            "/api/ubigeo/by-name/{state}/{municipality}/{parish}",
            get(handlers::get_parish_by_name),
        )
        .with_state(service)
}

/// Routes with the original `/v1` paths and wire format
pub fn legacy_routes(service: Arc<UbigeoService>) -> Router {
    Router::new()
        .route("/v1/all", get(legacy_handler::get_all))
        .route("/v1/states", get(legacy_handler::list_states))
        .route("/v1/states/", get(legacy_handler::list_states))
        .route("/v1/by_id/state/{id}", get(legacy_handler::get_state_by_id))
        .route(
            "/v1/by_id/municipality/{id}",
            get(legacy_handler::get_municipality_by_id),
        )
        .route("/v1/by_id/parish/{id}", get(legacy_handler::get_parish_by_id))
        .route("/v1/by_name/{state}", get(legacy_handler::get_state_by_name))
        .route(
            "/v1/by_name/{state}/{municipality}",
            get(legacy_handler::get_municipality_by_name),
        )
        .route(
            "/v1/by_name/{state}/{municipality}/{parish}",
            get(legacy_handler::get_parish_by_name),
        )
        .with_state(service)
}
