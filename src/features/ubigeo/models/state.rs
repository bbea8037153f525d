use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::ubigeo::models::Municipality;

/// State model representing Venezuelan states (estados)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct State {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "municipios", default)]
    pub municipalities: Vec<Municipality>,
}
