use std::path::Path;
use std::time::Duration;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
use figment::providers::{Data, Format};
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};
use strum::Display;

use super::ConfigParsingError;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoCustomConfig;

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppCustomConfigSerdeDTO<Custom> {
    #[serde(default)]
    pub(super) app: Custom,
}

#[derive(Debug)]
pub struct AppConfig<Custom> {
    pub core: CoreConfig,
    pub app: Custom,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    pub places: PlacesConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacesConfig {
    #[serde(deserialize_with = "crate::mapper::secret_string::deserialize")]
    pub api_key: SecretString,
    #[serde(default = "default_places_base_url")]
    pub base_url: String,
    #[serde(default = "default_photo_base_url")]
    pub photo_base_url: String,
    #[serde(default = "default_photo_max_width")]
    pub photo_max_width: u32,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_browse_radius")]
    pub browse_radius: u32,
    #[serde(default = "default_top_restaurants_radius")]
    pub top_restaurants_radius: u32,
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "default_page_cooldown")]
    pub page_cooldown: Duration,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Duration,
    #[serde(default)]
    pub buffer_strategy: BufferStrategy,
    #[serde(default = "default_cities")]
    pub default_cities: Vec<String>,
    #[serde(default = "default_top_cities_count")]
    pub top_cities_count: usize,
    #[serde(default = "default_top_restaurants_per_city")]
    pub top_restaurants_per_city: usize,
}

/// How result batches are combined while following page tokens.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BufferStrategy {
    /// Only the most recently fetched batch is kept.
    #[strum(serialize = "LAST_PAGE")]
    LastPage,
    /// Every fetched batch is appended.
    #[default]
    #[strum(serialize = "ACCUMULATE")]
    Accumulate,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryConfig {
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "default_query_timeout")]
    pub query_timeout: Duration,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            query_timeout: default_query_timeout(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_places_base_url() -> String {
    "https://maps.googleapis.com/maps/api".to_string()
}

fn default_photo_base_url() -> String {
    "https://maps.googleapis.com/maps/api/place/photo".to_string()
}

fn default_photo_max_width() -> u32 {
    400
}

fn default_language() -> String {
    "es".to_string()
}

fn default_browse_radius() -> u32 {
    20_000
}

fn default_top_restaurants_radius() -> u32 {
    5_000
}

fn default_page_cooldown() -> Duration {
    Duration::from_secs(2)
}

fn default_max_iterations() -> u32 {
    10
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_cities() -> Vec<String> {
    [
        "Cartagena, Colombia",
        "Barranquilla, Colombia",
        "Bogotá, Colombia",
        "Medellín, Colombia",
        "Cali, Colombia",
        "Santa Marta, Colombia",
        "Bucaramanga, Colombia",
        "Pereira, Colombia",
    ]
    .into_iter()
    .map(ToString::to_string)
    .collect()
}

fn default_top_cities_count() -> usize {
    5
}

fn default_top_restaurants_per_city() -> usize {
    4
}

fn default_query_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_max_page_size() -> u32 {
    100
}

pub enum InputFormat {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl InputFormat {
    #[cfg(feature = "config_yaml")]
    pub fn yaml_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Yaml(Yaml::file(p))
    }

    #[cfg(feature = "config_yaml")]
    pub fn yaml_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(s.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Json(Json::file(p))
    }

    #[cfg(feature = "config_json")]
    pub fn json_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Json(Json::string(s.as_ref()))
    }
}

impl<Custom> AppConfig<Custom>
where
    Custom: DeserializeOwned + Default,
{
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let mut inputs: Vec<InputFormat> = Vec::with_capacity(files.len());

        for path in files {
            #[cfg(feature = "config_yaml")]
            if path
                .as_ref()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
            {
                inputs.push(InputFormat::yaml_file(path));
                continue;
            }

            #[cfg(feature = "config_json")]
            if path.as_ref().extension() == Some("json".as_ref()) {
                inputs.push(InputFormat::json_file(path));
                continue;
            }

            return Err(ConfigParsingError::GeneralParsingError(format!(
                "Unsupported file or missing file extension: {:?}",
                path.as_ref().to_str()
            )));
        }

        AppConfig::parse(inputs)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        let inputs = configs.into_iter().map(InputFormat::yaml_str);

        AppConfig::parse(inputs)
    }

    pub fn parse(
        inputs: impl IntoIterator<Item = InputFormat>,
    ) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for data in inputs {
            figment = match data {
                #[cfg(feature = "config_yaml")]
                InputFormat::Yaml(content) => figment.merge(content),
                #[cfg(feature = "config_json")]
                InputFormat::Json(content) => figment.merge(content),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed("FOODIE_").split("__").lowercase(false));
        }

        let core = figment
            .extract::<CoreConfig>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;
        let custom = figment
            .extract::<AppCustomConfigSerdeDTO<Custom>>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;

        Ok(Self {
            core,
            app: custom.app,
        })
    }
}
