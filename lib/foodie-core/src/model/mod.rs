pub mod common;
pub mod history_place;
pub mod place;
