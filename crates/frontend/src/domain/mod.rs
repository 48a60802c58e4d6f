pub mod a001_facility;
pub mod a002_registration;
pub mod a003_catalog;
