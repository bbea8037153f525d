use std::sync::Arc;

use crate::features::ubigeo::codes::{municipality_code_for_parish, parent_code, Level};
use crate::features::ubigeo::index::{DatasetIndex, MunicipalityNode, StateNode};
use crate::features::ubigeo::models::{Dataset, Municipality, Parish, State};
use crate::shared::text::normalize_name;

/// Municipality with the code of its owning state attached
#[derive(Debug, Clone, Copy)]
pub struct ResolvedMunicipality<'a> {
    pub municipality: &'a Municipality,
    pub state_code: &'a str,
}

/// Parish with the codes of its owning municipality and state attached
#[derive(Debug, Clone, Copy)]
pub struct ResolvedParish<'a> {
    pub parish: &'a Parish,
    pub municipality_code: &'a str,
    pub state_code: &'a str,
}

/// Walks state → municipality → parish over an immutable index.
///
/// Every operation is a single traversal; `None` means the key did not
/// resolve at some level.
#[derive(Debug, Clone)]
pub struct HierarchyResolver {
    index: Arc<DatasetIndex>,
}

impl HierarchyResolver {
    pub fn new(index: Arc<DatasetIndex>) -> Self {
        Self { index }
    }

    /// The loaded tree, as read from the source
    pub fn dataset(&self) -> &Dataset {
        self.index.dataset()
    }

    /// State names in dataset order
    pub fn list_state_names(&self) -> Vec<&str> {
        self.index
            .states()
            .iter()
            .map(|state| state.name.as_str())
            .collect()
    }

    pub fn get_state_by_code(&self, code: &str) -> Option<&State> {
        self.index.state_by_code(code).map(|node| node.state)
    }

    pub fn get_state_by_name(&self, name: &str) -> Option<&State> {
        self.state_node_by_name(name).map(|node| node.state)
    }

    pub fn get_municipality_by_code(&self, code: &str) -> Option<ResolvedMunicipality<'_>> {
        let (state, municipality) = self.municipality_node_by_code(code)?;
        Some(ResolvedMunicipality {
            municipality: municipality.municipality,
            state_code: &state.state.code,
        })
    }

    pub fn get_municipality_by_name(
        &self,
        state_name: &str,
        municipality_name: &str,
    ) -> Option<ResolvedMunicipality<'_>> {
        let (state, municipality) = self.municipality_node_by_name(state_name, municipality_name)?;
        Some(ResolvedMunicipality {
            municipality: municipality.municipality,
            state_code: &state.state.code,
        })
    }

    /// Resolves through the synthetic "XXXX00" municipality code of the parish
    pub fn get_parish_by_code(&self, code: &str) -> Option<ResolvedParish<'_>> {
        let municipality_code = municipality_code_for_parish(code)?;
        let (state, municipality) = self.municipality_node_by_code(&municipality_code)?;
        let parish = municipality.parish_by_code(code)?;
        Some(ResolvedParish {
            parish,
            municipality_code: &municipality.municipality.code,
            state_code: &state.state.code,
        })
    }

    pub fn get_parish_by_name(
        &self,
        state_name: &str,
        municipality_name: &str,
        parish_name: &str,
    ) -> Option<ResolvedParish<'_>> {
        let (state, municipality) = self.municipality_node_by_name(state_name, municipality_name)?;
        let parish = municipality.parish_by_name(&normalize_name(parish_name))?;
        Some(ResolvedParish {
            parish,
            municipality_code: &municipality.municipality.code,
            state_code: &state.state.code,
        })
    }

    fn state_node_by_name(&self, name: &str) -> Option<StateNode<'_>> {
        self.index.state_by_name(&normalize_name(name))
    }

    fn municipality_node_by_code(
        &self,
        code: &str,
    ) -> Option<(StateNode<'_>, MunicipalityNode<'_>)> {
        let state_code = parent_code(code, Level::State)?;
        let state = self.index.state_by_code(state_code)?;
        let municipality = state.municipality_by_code(code)?;
        Some((state, municipality))
    }

    fn municipality_node_by_name(
        &self,
        state_name: &str,
        municipality_name: &str,
    ) -> Option<(StateNode<'_>, MunicipalityNode<'_>)> {
        let state = self.state_node_by_name(state_name)?;
        let municipality = state.municipality_by_name(&normalize_name(municipality_name))?;
        Some((state, municipality))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{sample_dataset, sample_index};

    fn resolver() -> HierarchyResolver {
        HierarchyResolver::new(sample_index())
    }

    #[test]
    fn test_list_state_names_preserves_dataset_order() {
        let resolver = resolver();
        assert_eq!(
            resolver.list_state_names(),
            vec!["Distrito Capital", "Táchira", "Nueva Esparta"]
        );
    }

    #[test]
    fn test_list_state_names_empty_index() {
        let resolver = HierarchyResolver::new(Arc::new(DatasetIndex::unavailable()));
        assert!(resolver.list_state_names().is_empty());
        assert!(resolver.get_state_by_code("07").is_none());
    }

    #[test]
    fn test_every_state_resolves_by_code_and_name_variants() {
        let resolver = resolver();
        for state in &sample_dataset().states {
            assert_eq!(resolver.get_state_by_code(&state.code), Some(state));
            assert_eq!(resolver.get_state_by_name(&state.name), Some(state));
            assert_eq!(
                resolver.get_state_by_name(&state.name.to_uppercase()),
                Some(state)
            );
            assert_eq!(
                resolver.get_state_by_name(&normalize_name(&state.name)),
                Some(state)
            );
        }
    }

    #[test]
    fn test_every_municipality_carries_its_state_code() {
        let resolver = resolver();
        for state in &sample_dataset().states {
            for municipality in &state.municipalities {
                let resolved = resolver.get_municipality_by_code(&municipality.code).unwrap();
                assert_eq!(resolved.municipality, municipality);
                assert_eq!(resolved.state_code, state.code);
            }
        }
    }

    #[test]
    fn test_every_parish_carries_its_ancestor_codes() {
        let resolver = resolver();
        for state in &sample_dataset().states {
            for municipality in &state.municipalities {
                for parish in &municipality.parishes {
                    let resolved = resolver.get_parish_by_code(&parish.code).unwrap();
                    assert_eq!(resolved.parish, parish);
                    assert_eq!(resolved.municipality_code, municipality.code);
                    assert_eq!(resolved.state_code, state.code);
                }
            }
        }
    }

    #[test]
    fn test_tachira_scenario() {
        let resolver = resolver();

        let by_code = resolver.get_state_by_code("07").unwrap();
        assert_eq!(by_code.name, "Táchira");
        assert_eq!(resolver.get_state_by_name("tachira"), Some(by_code));

        let cardenas = resolver.get_municipality_by_code("0701").unwrap();
        assert_eq!(cardenas.municipality.name, "Cárdenas");
        assert_eq!(cardenas.state_code, "07");

        let by_name = resolver.get_municipality_by_name("Tachira", "cardenas").unwrap();
        let by_alias = resolver
            .get_municipality_by_name("Tachira", "tachira capital")
            .unwrap();
        assert_eq!(by_name.municipality, cardenas.municipality);
        assert_eq!(by_alias.municipality, cardenas.municipality);
        assert_eq!(by_alias.state_code, "07");
    }

    #[test]
    fn test_parish_code_resolves_through_placeholder_municipality() {
        let resolver = resolver();
        let resolved = resolver.get_parish_by_code("070101").unwrap();
        assert_eq!(resolved.parish.name, "Cárdenas");
        assert_eq!(resolved.municipality_code, "0701");
        assert_eq!(resolved.state_code, "07");

        let caracas = resolver.get_parish_by_code("010102").unwrap();
        assert_eq!(caracas.parish.name, "Antímano");
        assert_eq!(caracas.municipality_code, "010100");
        assert_eq!(caracas.state_code, "01");
    }

    #[test]
    fn test_municipality_placeholder_code_resolves() {
        let resolver = resolver();
        let resolved = resolver.get_municipality_by_code("070100").unwrap();
        assert_eq!(resolved.municipality.code, "0701");
        assert_eq!(resolved.state_code, "07");
    }

    #[test]
    fn test_parish_by_name_with_alternates() {
        let resolver = resolver();
        let primary = resolver
            .get_parish_by_name("TÁCHIRA", "Cárdenas", "amenodoro angel lamus")
            .unwrap();
        let alias = resolver
            .get_parish_by_name("táchira", "Tachira Capital", "Amenodoro Rangel Lamus")
            .unwrap();
        assert_eq!(primary.parish.code, "070102");
        assert_eq!(alias.parish, primary.parish);
        assert_eq!(alias.municipality_code, "0701");
        assert_eq!(alias.state_code, "07");

        let capital = resolver
            .get_parish_by_name("distrito capital", "caracas", "antimano")
            .unwrap();
        assert_eq!(capital.parish.code, "010102");
        assert_eq!(capital.municipality_code, "010100");
    }

    #[test]
    fn test_unknown_keys_resolve_to_none() {
        let resolver = resolver();
        assert!(resolver.get_state_by_code("99").is_none());
        assert!(resolver.get_state_by_code("").is_none());
        assert!(resolver.get_state_by_name("Atlántida").is_none());
        assert!(resolver.get_municipality_by_code("0799").is_none());
        assert!(resolver.get_municipality_by_code("9901").is_none());
        assert!(resolver.get_municipality_by_code("0").is_none());
        assert!(resolver.get_municipality_by_code("070101").is_none());
        assert!(resolver.get_municipality_by_name("Táchira", "Libertador").is_none());
        assert!(resolver.get_municipality_by_name("Nowhere", "Cárdenas").is_none());
        assert!(resolver.get_parish_by_code("070199").is_none());
        assert!(resolver.get_parish_by_code("0701").is_none());
        assert!(resolver.get_parish_by_code("ñ70101").is_none());
        assert!(resolver
            .get_parish_by_name("Táchira", "Cárdenas", "Cordero")
            .is_none());
    }

    #[test]
    fn test_parish_lookup_is_scoped_to_its_municipality() {
        let resolver = resolver();
        // Cordero exists, but under Andrés Bello
        assert!(resolver
            .get_parish_by_name("Táchira", "Andrés Bello", "cordero")
            .is_some());
        assert!(resolver
            .get_parish_by_name("Táchira", "Cárdenas", "cordero")
            .is_none());
    }

    #[test]
    fn test_failed_lookups_do_not_mutate_the_index() {
        let resolver = resolver();
        let _ = resolver.get_parish_by_code("999999");
        let _ = resolver.get_municipality_by_name("x", "y");
        assert_eq!(resolver.dataset(), &sample_dataset());
    }
}
