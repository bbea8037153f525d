use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::ubigeo::models::{Municipality, Parish, State};
use crate::features::ubigeo::services::{ResolvedMunicipality, ResolvedParish};

/// Response DTO for parish data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParishResponseDto {
    pub code: String,
    pub name: String,
    pub alternate_names: Vec<String>,
    pub municipality_code: String,
    pub state_code: String,
}

impl ParishResponseDto {
    fn new(parish: &Parish, municipality_code: &str, state_code: &str) -> Self {
        Self {
            code: parish.code.clone(),
            name: parish.name.clone(),
            alternate_names: parish.alternate_names.clone(),
            municipality_code: municipality_code.to_string(),
            state_code: state_code.to_string(),
        }
    }
}

impl From<ResolvedParish<'_>> for ParishResponseDto {
    fn from(resolved: ResolvedParish<'_>) -> Self {
        Self::new(
            resolved.parish,
            resolved.municipality_code,
            resolved.state_code,
        )
    }
}

/// Response DTO for municipality data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MunicipalityResponseDto {
    pub code: String,
    pub name: String,
    pub alternate_names: Vec<String>,
    pub state_code: String,
    pub parishes: Vec<ParishResponseDto>,
}

impl MunicipalityResponseDto {
    fn new(municipality: &Municipality, state_code: &str) -> Self {
        Self {
            code: municipality.code.clone(),
            name: municipality.name.clone(),
            alternate_names: municipality.alternate_names.clone(),
            state_code: state_code.to_string(),
            parishes: municipality
                .parishes
                .iter()
                .map(|p| ParishResponseDto::new(p, &municipality.code, state_code))
                .collect(),
        }
    }
}

impl From<ResolvedMunicipality<'_>> for MunicipalityResponseDto {
    fn from(resolved: ResolvedMunicipality<'_>) -> Self {
        Self::new(resolved.municipality, resolved.state_code)
    }
}

/// Response DTO for state data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateResponseDto {
    pub code: String,
    pub name: String,
    pub municipalities: Vec<MunicipalityResponseDto>,
}

impl From<&State> for StateResponseDto {
    fn from(state: &State) -> Self {
        Self {
            code: state.code.clone(),
            name: state.name.clone(),
            municipalities: state
                .municipalities
                .iter()
                .map(|m| MunicipalityResponseDto::new(m, &state.code))
                .collect(),
        }
    }
}

/// Legacy wire shape of a municipality lookup: the raw entity plus `codigo_estado`
#[derive(Debug, Serialize)]
pub struct LegacyMunicipalityDto<'a> {
    #[serde(flatten)]
    pub municipality: &'a Municipality,
    pub codigo_estado: &'a str,
}

impl<'a> From<ResolvedMunicipality<'a>> for LegacyMunicipalityDto<'a> {
    fn from(resolved: ResolvedMunicipality<'a>) -> Self {
        Self {
            municipality: resolved.municipality,
            codigo_estado: resolved.state_code,
        }
    }
}

/// Legacy wire shape of a parish lookup: the raw entity plus both ancestor codes
#[derive(Debug, Serialize)]
pub struct LegacyParishDto<'a> {
    #[serde(flatten)]
    pub parish: &'a Parish,
    pub codigo_municipio: &'a str,
    pub codigo_estado: &'a str,
}

impl<'a> From<ResolvedParish<'a>> for LegacyParishDto<'a> {
    fn from(resolved: ResolvedParish<'a>) -> Self {
        Self {
            parish: resolved.parish,
            codigo_municipio: resolved.municipality_code,
            codigo_estado: resolved.state_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_service;
    use serde_json::json;

    #[test]
    fn test_state_dto_fills_ancestor_codes() {
        let service = sample_service();
        let dto = StateResponseDto::from(service.get_state_by_code("07").unwrap());
        assert_eq!(dto.municipalities.len(), 2);
        assert_eq!(dto.municipalities[0].state_code, "07");
        assert_eq!(dto.municipalities[0].parishes[1].municipality_code, "0701");
        assert_eq!(dto.municipalities[0].parishes[1].state_code, "07");
    }

    #[test]
    fn test_parish_dto_is_camel_case() {
        let service = sample_service();
        let dto = ParishResponseDto::from(service.get_parish_by_code("070101").unwrap());
        let value = serde_json::to_value(dto).unwrap();
        assert_eq!(
            value,
            json!({
                "code": "070101",
                "name": "Cárdenas",
                "alternateNames": [],
                "municipalityCode": "0701",
                "stateCode": "07"
            })
        );
    }

    #[test]
    fn test_legacy_parish_shape() {
        let service = sample_service();
        let dto = LegacyParishDto::from(service.get_parish_by_code("010101").unwrap());
        let value = serde_json::to_value(dto).unwrap();
        assert_eq!(
            value,
            json!({
                "codigo": "010101",
                "nombre": "Altagracia",
                "nombres_alternos": [],
                "codigo_municipio": "010100",
                "codigo_estado": "01"
            })
        );
    }

    #[test]
    fn test_legacy_municipality_shape() {
        let service = sample_service();
        let dto = LegacyMunicipalityDto::from(service.get_municipality_by_code("1701").unwrap());
        let value = serde_json::to_value(dto).unwrap();
        assert_eq!(value["codigo"], "1701");
        assert_eq!(value["codigo_estado"], "17");
        assert_eq!(value["parroquias"][0]["codigo"], "170101");
    }
}
