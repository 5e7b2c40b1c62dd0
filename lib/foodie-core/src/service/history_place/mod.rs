use std::sync::Arc;

use crate::config::core_config::HistoryConfig;
use crate::repository::history_place_repository::HistoryPlaceRepository;

pub mod dto;
pub mod mapper;
pub mod service;
pub(crate) mod validator;


#[derive(Clone)]
pub struct HistoryPlaceService {
    history_place_repository: Arc<dyn HistoryPlaceRepository>,
    config: Arc<HistoryConfig>,
}

impl HistoryPlaceService {
    pub fn new(
        history_place_repository: Arc<dyn HistoryPlaceRepository>,
        config: Arc<HistoryConfig>,
    ) -> Self {
        Self {
            history_place_repository,
            config,
        }
    }
}
