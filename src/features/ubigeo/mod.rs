//! Venezuelan administrative hierarchy (ubigeo) feature.
//!
//! Resolves states, municipalities and parishes by hierarchical code or by
//! human-entered name. Names match regardless of case and accents, and
//! municipalities and parishes also answer to their alternate names.
//!
//! ## Data Hierarchy
//!
//! - Level 1: States (Estados) - code `XX`
//! - Level 2: Municipalities (Municipios) - code `XXXX` (or `XXXX00`)
//! - Level 3: Parishes (Parroquias) - code `XXXXXX`
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/ubigeo/all` | Whole dataset |
//! | GET | `/api/ubigeo/states` | List state names |
//! | GET | `/api/ubigeo/states/{code}` | Get state by code |
//! | GET | `/api/ubigeo/municipalities/{code}` | Get municipality by code |
//! | GET | `/api/ubigeo/parishes/{code}` | Get parish by code |
//! | GET | `/api/ubigeo/by-name/{state}` | Get state by name |
//! | GET | `/api/ubigeo/by-name/{state}/{municipality}` | Get municipality by name |
//! | GET | `/api/ubigeo/by-name/{state}/{municipality}/{parish}` | Get parish by name |
//!
//! The same lookups are served under `/v1` with the original wire format.

pub mod codes;
pub mod dtos;
pub mod handlers;
pub mod index;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UbigeoService;
