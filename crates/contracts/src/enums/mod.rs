pub mod facility_type;
