use std::sync::Arc;

use crate::config::core_config::PlacesConfig;
use crate::provider::places::PlacesProvider;

pub mod aggregator;
pub mod dto;
pub mod mapper;
pub mod service;
pub(crate) mod validator;


pub(crate) const RESTAURANT_TYPE: &str = "restaurant";

#[derive(Clone)]
pub struct PlacesService {
    places_provider: Arc<dyn PlacesProvider>,
    config: Arc<PlacesConfig>,
}

impl PlacesService {
    pub fn new(places_provider: Arc<dyn PlacesProvider>, config: Arc<PlacesConfig>) -> Self {
        Self {
            places_provider,
            config,
        }
    }
}
