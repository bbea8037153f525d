use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::ubigeo::models::State;

/// Root of the dataset file (`{"estados": [...]}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Dataset {
    #[serde(rename = "estados", default)]
    pub states: Vec<State>,
}
