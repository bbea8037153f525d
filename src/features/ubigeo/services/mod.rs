pub mod dataset_loader;
pub mod hierarchy_resolver;
pub mod ubigeo_service;

pub use dataset_loader::{bootstrap_index, JsonFileDatasetLoader};
pub use hierarchy_resolver::{ResolvedMunicipality, ResolvedParish};
pub use ubigeo_service::UbigeoService;
