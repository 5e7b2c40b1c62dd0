mod history_place_id;
mod macros;

pub use history_place_id::HistoryPlaceId;
