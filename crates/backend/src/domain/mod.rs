pub mod a001_facility;
pub mod a002_registration;
pub mod a003_catalog;
pub mod a004_seo_page;
