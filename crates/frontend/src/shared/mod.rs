pub mod api_utils;
pub mod document_meta;
pub mod navigation;
