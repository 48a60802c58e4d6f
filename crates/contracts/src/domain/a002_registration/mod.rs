pub mod form;
pub mod payload;
