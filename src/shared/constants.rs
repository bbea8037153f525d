/// Width of a state code ("07")
pub const STATE_CODE_LEN: usize = 2;

/// Width of a municipality code without the parish placeholder ("0701")
pub const MUNICIPALITY_CODE_LEN: usize = 4;

/// Width of a parish code ("070101")
pub const PARISH_CODE_LEN: usize = 6;

/// Parish suffix reserved for the owning municipality ("0701" -> "070100")
pub const MUNICIPALITY_PLACEHOLDER_SUFFIX: &str = "00";

/// Default location of the dataset file, relative to the working directory.
///
/// The bundled file is a sample (Distrito Capital and La Guaira only); point
/// `DATASET_PATH` at the full national dataset in production.
pub const DEFAULT_DATASET_PATH: &str = "data/ubigeo_ven.json";
