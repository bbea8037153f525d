//! `/v1` handlers kept wire-compatible with the first public version of the API.
//!
//! Bodies use the dataset's own keys and a miss is answered with a literal
//! `false` (status 200) instead of an error envelope.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::core::error::{AppError, Result};
use crate::features::ubigeo::dtos::{LegacyMunicipalityDto, LegacyParishDto};
use crate::features::ubigeo::services::UbigeoService;

fn legacy_json<T: Serialize>(result: Result<T>) -> Response {
    match result {
        Ok(body) => Json(body).into_response(),
        Err(AppError::NotFound(_)) => Json(false).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_all(State(service): State<Arc<UbigeoService>>) -> Response {
    if service.is_degraded() {
        return Json(serde_json::Value::Null).into_response();
    }
    Json(service.all()).into_response()
}

pub async fn list_states(State(service): State<Arc<UbigeoService>>) -> Response {
    Json(service.list_state_names()).into_response()
}

pub async fn get_state_by_id(
    State(service): State<Arc<UbigeoService>>,
    Path(id): Path<String>,
) -> Response {
    legacy_json(service.get_state_by_code(&id))
}

pub async fn get_state_by_name(
    State(service): State<Arc<UbigeoService>>,
    Path(state): Path<String>,
) -> Response {
    legacy_json(service.get_state_by_name(&state))
}

pub async fn get_municipality_by_id(
    State(service): State<Arc<UbigeoService>>,
    Path(id): Path<String>,
) -> Response {
    legacy_json(
        service
            .get_municipality_by_code(&id)
            .map(LegacyMunicipalityDto::from),
    )
}

pub async fn get_municipality_by_name(
    State(service): State<Arc<UbigeoService>>,
    Path((state, municipality)): Path<(String, String)>,
) -> Response {
    legacy_json(
        service
            .get_municipality_by_name(&state, &municipality)
            .map(LegacyMunicipalityDto::from),
    )
}

pub async fn get_parish_by_id(
    State(service): State<Arc<UbigeoService>>,
    Path(id): Path<String>,
) -> Response {
    legacy_json(service.get_parish_by_code(&id).map(LegacyParishDto::from))
}

pub async fn get_parish_by_name(
    State(service): State<Arc<UbigeoService>>,
    Path((state, municipality, parish)): Path<(String, String, String)>,
) -> Response {
    legacy_json(
        service
            .get_parish_by_name(&state, &municipality, &parish)
            .map(LegacyParishDto::from),
    )
}
