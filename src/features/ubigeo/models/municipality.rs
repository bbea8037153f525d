use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::ubigeo::models::Parish;

/// Municipality model representing Venezuelan municipalities (municipios)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Municipality {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "nombres_alternos", default)]
    pub alternate_names: Vec<String>,
    #[serde(rename = "parroquias", default)]
    pub parishes: Vec<Parish>,
}
