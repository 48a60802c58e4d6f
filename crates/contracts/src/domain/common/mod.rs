//! Common types for all aggregates

pub mod api_response;

// Re-exports
pub use api_response::ApiResponse;
