pub mod ubigeo;
