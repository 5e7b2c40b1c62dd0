pub mod history_place;
