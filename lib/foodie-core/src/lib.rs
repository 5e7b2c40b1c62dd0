use std::sync::Arc;

use config::core_config::CoreConfig;
use provider::http_client::reqwest_client::ReqwestClient;
use provider::places::PlacesProvider;
use provider::places::google::GooglePlacesProvider;
use repository::DataRepository;
use service::history_place::HistoryPlaceService;
use service::places::PlacesService;

pub mod config;
pub mod mapper;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;

#[derive(Clone)]
pub struct FoodieCore {
    pub places_service: PlacesService,
    pub history_place_service: HistoryPlaceService,
}

impl FoodieCore {
    /// Wires the services with the Google places directory described by `config.places`.
    pub fn new(
        data_provider: Arc<dyn DataRepository>,
        config: CoreConfig,
    ) -> Result<Self, provider::http_client::Error> {
        let client = ReqwestClient::with_timeout(config.places.request_timeout)?;
        let places_provider = Arc::new(GooglePlacesProvider::new(
            Arc::new(client),
            config.places.base_url.clone(),
            config.places.api_key.clone(),
            config.places.language.clone(),
        ));

        Ok(Self::with_places_provider(
            data_provider,
            config,
            places_provider,
        ))
    }

    pub fn with_places_provider(
        data_provider: Arc<dyn DataRepository>,
        config: CoreConfig,
        places_provider: Arc<dyn PlacesProvider>,
    ) -> Self {
        Self {
            places_service: PlacesService::new(places_provider, Arc::new(config.places)),
            history_place_service: HistoryPlaceService::new(
                data_provider.get_history_place_repository(),
                Arc::new(config.history),
            ),
        }
    }

    pub fn version() -> Version {
        Version {
            name: env!("CARGO_PKG_NAME").to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

pub struct Version {
    pub name: String,
    pub version: String,
}
