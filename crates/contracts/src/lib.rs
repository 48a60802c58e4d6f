//! Общие типы и правила для backend и frontend:
//! slug tables, the listing URL grammar, SEO copy and registration checks.

pub mod domain;
pub mod enums;
pub mod shared;
