use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Parish model representing Venezuelan parishes (parroquias)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Parish {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "nombres_alternos", default)]
    pub alternate_names: Vec<String>,
}
