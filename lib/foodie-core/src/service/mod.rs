pub mod error;
pub mod history_place;
pub mod places;
