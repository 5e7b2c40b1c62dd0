use std::sync::Arc;

use history_place_repository::HistoryPlaceRepository;

pub mod error;
pub mod history_place_repository;

pub trait DataRepository: Send + Sync {
    fn get_history_place_repository(&self) -> Arc<dyn HistoryPlaceRepository>;
}
