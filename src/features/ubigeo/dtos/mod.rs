mod ubigeo_dto;

pub use ubigeo_dto::*;
