use utoipa::{Modify, OpenApi};

use crate::features::ubigeo::{
    dtos as ubigeo_dtos, handlers as ubigeo_handlers, models as ubigeo_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Ubigeo
        ubigeo_handlers::get_all,
        ubigeo_handlers::list_states,
        ubigeo_handlers::get_state,
        ubigeo_handlers::get_state_by_name,
        ubigeo_handlers::get_municipality,
        ubigeo_handlers::get_municipality_by_name,
        ubigeo_handlers::get_parish,
        ubigeo_handlers::get_parish_by_name,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Ubigeo
            ubigeo_models::Dataset,
            ubigeo_models::State,
            ubigeo_models::Municipality,
            ubigeo_models::Parish,
            ubigeo_dtos::StateResponseDto,
            ubigeo_dtos::MunicipalityResponseDto,
            ubigeo_dtos::ParishResponseDto,
            ApiResponse<ubigeo_models::Dataset>,
            ApiResponse<Vec<String>>,
            ApiResponse<ubigeo_dtos::StateResponseDto>,
            ApiResponse<ubigeo_dtos::MunicipalityResponseDto>,
            ApiResponse<ubigeo_dtos::ParishResponseDto>,
        )
    ),
    tags(
        (name = "ubigeo", description = "Venezuelan administrative entities (states, municipalities, parishes)"),
    ),
    info(
        title = "UbiGeo Venezuela API",
        version = "1.0.0",
        description = "API for Venezuelan administrative entities",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
