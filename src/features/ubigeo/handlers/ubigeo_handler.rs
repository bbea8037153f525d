use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use regex::Regex;

use crate::core::error::{AppError, Result};
use crate::features::ubigeo::dtos::{MunicipalityResponseDto, ParishResponseDto, StateResponseDto};
use crate::features::ubigeo::models::Dataset;
use crate::features::ubigeo::services::UbigeoService;
use crate::shared::types::{ApiResponse, Meta};
use crate::shared::validation::{MUNICIPALITY_CODE_REGEX, PARISH_CODE_REGEX, STATE_CODE_REGEX};

fn check_code(regex: &Regex, level: &str, code: &str) -> Result<()> {
    if regex.is_match(code) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!("Invalid {} code '{}'", level, code)))
    }
}

/// Get the whole dataset as loaded
#[utoipa::path(
    get,
    path = "/api/ubigeo/all",
    responses(
        (status = 200, description = "Raw dataset tree", body = ApiResponse<Dataset>)
    ),
    tag = "ubigeo"
)]
pub async fn get_all(
    State(service): State<Arc<UbigeoService>>,
) -> Result<Json<ApiResponse<Dataset>>> {
    Ok(Json(ApiResponse::success(
        Some(service.all().clone()),
        None,
        None,
    )))
}

// ==================== State Handlers ====================

/// List all state names in dataset order
#[utoipa::path(
    get,
    path = "/api/ubigeo/states",
    responses(
        (status = 200, description = "List of state names", body = ApiResponse<Vec<String>>)
    ),
    tag = "ubigeo"
)]
pub async fn list_states(
    State(service): State<Arc<UbigeoService>>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let names: Vec<String> = service
        .list_state_names()
        .into_iter()
        .map(String::from)
        .collect();
    let total = names.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(names),
        None,
        Some(Meta { total }),
    )))
}

/// Get a state by code
#[utoipa::path(
    get,
    path = "/api/ubigeo/states/{code}",
    params(
        ("code" = String, Path, description = "State code (2 digits)")
    ),
    responses(
        (status = 200, description = "State details", body = ApiResponse<StateResponseDto>),
        (status = 400, description = "Malformed state code"),
        (status = 404, description = "State not found")
    ),
    tag = "ubigeo"
)]
pub async fn get_state(
    State(service): State<Arc<UbigeoService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<StateResponseDto>>> {
    check_code(&STATE_CODE_REGEX, "state", &code)?;
    let state = service.get_state_by_code(&code)?;
    Ok(Json(ApiResponse::success(Some(state.into()), None, None)))
}

/// Get a state by name (case and accent insensitive)
#[utoipa::path(
    get,
    path = "/api/ubigeo/by-name/{state}",
    params(
        ("state" = String, Path, description = "State name")
    ),
    responses(
        (status = 200, description = "State details", body = ApiResponse<StateResponseDto>),
        (status = 404, description = "State not found")
    ),
    tag = "ubigeo"
)]
pub async fn get_state_by_name(
    State(service): State<Arc<UbigeoService>>,
    Path(state): Path<String>,
) -> Result<Json<ApiResponse<StateResponseDto>>> {
    let state = service.get_state_by_name(&state)?;
    Ok(Json(ApiResponse::success(Some(state.into()), None, None)))
}

// ==================== Municipality Handlers ====================

/// Get a municipality by code
#[utoipa::path(
    get,
    path = "/api/ubigeo/municipalities/{code}",
    params(
        ("code" = String, Path, description = "Municipality code (format: XXXX or XXXX00)")
    ),
    responses(
        (status = 200, description = "Municipality details", body = ApiResponse<MunicipalityResponseDto>),
        (status = 400, description = "Malformed municipality code"),
        (status = 404, description = "Municipality not found")
    ),
    tag = "ubigeo"
)]
pub async fn get_municipality(
    State(service): State<Arc<UbigeoService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<MunicipalityResponseDto>>> {
    check_code(&MUNICIPALITY_CODE_REGEX, "municipality", &code)?;
    let municipality = service.get_municipality_by_code(&code)?;
    Ok(Json(ApiResponse::success(
        Some(municipality.into()),
        None,
        None,
    )))
}

/// Get a municipality by state and municipality name
#[utoipa::path(
    get,
    path = "/api/ubigeo/by-name/{state}/{municipality}",
    params(
        ("state" = String, Path, description = "State name"),
        ("municipality" = String, Path, description = "Municipality name or alternate name")
    ),
    responses(
        (status = 200, description = "Municipality details", body = ApiResponse<MunicipalityResponseDto>),
        (status = 404, description = "State or municipality not found")
    ),
    tag = "ubigeo"
)]
pub async fn get_municipality_by_name(
    State(service): State<Arc<UbigeoService>>,
    Path((state, municipality)): Path<(String, String)>,
) -> Result<Json<ApiResponse<MunicipalityResponseDto>>> {
    let municipality = service.get_municipality_by_name(&state, &municipality)?;
    Ok(Json(ApiResponse::success(
        Some(municipality.into()),
        None,
        None,
    )))
}

// ==================== Parish Handlers ====================

/// Get a parish by code
#[utoipa::path(
    get,
    path = "/api/ubigeo/parishes/{code}",
    params(
        ("code" = String, Path, description = "Parish code (6 digits)")
    ),
    responses(
        (status = 200, description = "Parish details", body = ApiResponse<ParishResponseDto>),
        (status = 400, description = "Malformed parish code"),
        (status = 404, description = "Parish not found")
    ),
    tag = "ubigeo"
)]
pub async fn get_parish(
    State(service): State<Arc<UbigeoService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<ParishResponseDto>>> {
    check_code(&PARISH_CODE_REGEX, "parish", &code)?;
    let parish = service.get_parish_by_code(&code)?;
    Ok(Json(ApiResponse::success(Some(parish.into()), None, None)))
}

/// Get a parish by state, municipality and parish name
#[utoipa::path(
    get,
    path = "/api/ubigeo/by-name/{state}/{municipality}/{parish}",
    params(
        ("state" = String, Path, description = "State name"),
        ("municipality" = String, Path, description = "Municipality name or alternate name"),
        ("parish" = String, Path, description = "Parish name or alternate name")
    ),
    responses(
        (status = 200, description = "Parish details", body = ApiResponse<ParishResponseDto>),
        (status = 404, description = "State, municipality or parish not found")
    ),
    tag = "ubigeo"
)]
pub async fn get_parish_by_name(
    State(service): State<Arc<UbigeoService>>,
    Path((state, municipality, parish)): Path<(String, String, String)>,
) -> Result<Json<ApiResponse<ParishResponseDto>>> {
    let parish = service.get_parish_by_name(&state, &municipality, &parish)?;
    Ok(Json(ApiResponse::success(Some(parish.into()), None, None)))
}
