//! Filter <-> URL path mapping.
//!
//! The only parser for listing routes lives here; the backend and the
//! frontend both go through [`parse_path`] and [`filter_to_path`].

pub mod generate;
pub mod parse;

pub use generate::{filter_to_path, generate_url_from_filters, ALL_FACILITIES_PATH};
pub use parse::{parse_path, parse_segments, RouteResolution};

/// Путь мастера регистрации
pub const REGISTRATION_PATH: &str = "/inregistrare";
