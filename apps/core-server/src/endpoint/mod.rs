pub mod history_place;
pub mod misc;
pub mod places;
