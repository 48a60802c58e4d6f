pub mod facility_card;
pub mod filter_bar;
pub mod listing;
