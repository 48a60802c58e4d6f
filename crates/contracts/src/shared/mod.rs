pub mod seo;
pub mod slug;
pub mod url_filters;
