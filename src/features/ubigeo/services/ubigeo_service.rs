use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::ubigeo::index::{DatasetIndex, IndexStats};
use crate::features::ubigeo::models::{Dataset, State};
use crate::features::ubigeo::services::hierarchy_resolver::{
    HierarchyResolver, ResolvedMunicipality, ResolvedParish,
};

/// Service for querying the Venezuelan administrative hierarchy
pub struct UbigeoService {
    resolver: HierarchyResolver,
    stats: IndexStats,
    degraded: bool,
}

impl UbigeoService {
    pub fn new(index: Arc<DatasetIndex>) -> Self {
        let stats = index.stats();
        let degraded = !index.is_available();
        Self {
            resolver: HierarchyResolver::new(index),
            stats,
            degraded,
        }
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }

    /// Whether the service is running without data (degraded mode)
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// The whole loaded tree
    pub fn all(&self) -> &Dataset {
        self.resolver.dataset()
    }

    // ==================== State Methods ====================

    /// List state names in dataset order
    pub fn list_state_names(&self) -> Vec<&str> {
        self.resolver.list_state_names()
    }

    pub fn get_state_by_code(&self, code: &str) -> Result<&State> {
        self.resolver.get_state_by_code(code).ok_or_else(|| {
            tracing::debug!("State code not found: {}", code);
            AppError::NotFound(format!("State with code '{}' not found", code))
        })
    }

    pub fn get_state_by_name(&self, name: &str) -> Result<&State> {
        self.resolver.get_state_by_name(name).ok_or_else(|| {
            tracing::debug!("State name not found: {}", name);
            AppError::NotFound(format!("State named '{}' not found", name))
        })
    }

    // ==================== Municipality Methods ====================

    pub fn get_municipality_by_code(&self, code: &str) -> Result<ResolvedMunicipality<'_>> {
        self.resolver.get_municipality_by_code(code).ok_or_else(|| {
            tracing::debug!("Municipality code not found: {}", code);
            AppError::NotFound(format!("Municipality with code '{}' not found", code))
        })
    }

    pub fn get_municipality_by_name(
        &self,
        state: &str,
        municipality: &str,
    ) -> Result<ResolvedMunicipality<'_>> {
        self.resolver
            .get_municipality_by_name(state, municipality)
            .ok_or_else(|| {
                tracing::debug!("Municipality name not found: {}/{}", state, municipality);
                AppError::NotFound(format!(
                    "Municipality named '{}' not found in state '{}'",
                    municipality, state
                ))
            })
    }

    // ==================== Parish Methods ====================

    pub fn get_parish_by_code(&self, code: &str) -> Result<ResolvedParish<'_>> {
        self.resolver.get_parish_by_code(code).ok_or_else(|| {
            tracing::debug!("Parish code not found: {}", code);
            AppError::NotFound(format!("Parish with code '{}' not found", code))
        })
    }

    pub fn get_parish_by_name(
        &self,
        state: &str,
        municipality: &str,
        parish: &str,
    ) -> Result<ResolvedParish<'_>> {
        self.resolver
            .get_parish_by_name(state, municipality, parish)
            .ok_or_else(|| {
                tracing::debug!(
                    "Parish name not found: {}/{}/{}",
                    state,
                    municipality,
                    parish
                );
                AppError::NotFound(format!(
                    "Parish named '{}' not found in municipality '{}' of state '{}'",
                    parish, municipality, state
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_service;

    #[test]
    fn test_found_results() {
        let service = sample_service();
        assert_eq!(service.get_state_by_code("17").unwrap().name, "Nueva Esparta");
        assert_eq!(
            service
                .get_municipality_by_name("nueva esparta", "ANTOLIN DEL CAMPO")
                .unwrap()
                .state_code,
            "17"
        );
        assert_eq!(
            service
                .get_parish_by_name("Nueva Esparta", "Antolín del Campo", "la plaza de paraguachi")
                .unwrap()
                .parish
                .code,
            "170101"
        );
    }

    #[test]
    fn test_not_found_is_a_typed_error() {
        let service = sample_service();
        assert!(matches!(
            service.get_state_by_code("99"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_state_by_name("Atlántida"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_municipality_by_code("0799"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_municipality_by_name("Táchira", "Nada"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_parish_by_code("070199"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_parish_by_name("Táchira", "Cárdenas", "Nada"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_not_found_message_names_the_key() {
        let service = sample_service();
        let err = service.get_parish_by_code("070199").unwrap_err();
        assert_eq!(err.to_string(), "Not found: Parish with code '070199' not found");
    }

    #[test]
    fn test_degraded_mode() {
        let service = UbigeoService::new(Arc::new(DatasetIndex::unavailable()));
        assert!(service.is_degraded());
        assert!(service.list_state_names().is_empty());
        assert!(service.all().states.is_empty());
        assert!(!sample_service().is_degraded());
    }

    #[test]
    fn test_loaded_empty_dataset_is_not_degraded() {
        let index = DatasetIndex::build(Dataset::default()).unwrap();
        let service = UbigeoService::new(Arc::new(index));
        assert!(!service.is_degraded());
        assert!(service.list_state_names().is_empty());
    }
}
