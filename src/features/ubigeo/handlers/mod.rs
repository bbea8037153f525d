pub mod legacy_handler;
pub mod ubigeo_handler;

pub use ubigeo_handler::*;
