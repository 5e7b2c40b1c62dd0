use one_dto_mapper::convert_inner;
use secrecy::ExposeSecret;
use url::Url;

use super::dto::{CityResponseDTO, PhotoDTO, ReviewDTO, SearchPage, TopRestaurantDTO};
use crate::config::core_config::PlacesConfig;
use crate::model::place::{PlaceSummary, price_level_label};
use crate::provider::places::{NearbyPlace, PlacePrediction, PlaceReview};
use crate::service::error::ServiceError;

pub(super) fn photo_url(config: &PlacesConfig, reference: &str) -> Result<String, ServiceError> {
    let url = Url::parse_with_params(
        &config.photo_base_url,
        &[
            ("maxwidth", config.photo_max_width.to_string().as_str()),
            ("photoreference", reference),
            ("key", config.api_key.expose_secret()),
        ],
    )
    .map_err(|e| ServiceError::MappingError(format!("invalid photo base url: {e}")))?;

    Ok(url.to_string())
}

fn optional_photo_url(
    config: &PlacesConfig,
    reference: Option<&str>,
) -> Result<Option<String>, ServiceError> {
    reference
        .map(|reference| photo_url(config, reference))
        .transpose()
}

pub(super) fn place_summary_from_nearby(
    config: &PlacesConfig,
    place: NearbyPlace,
) -> Result<PlaceSummary, ServiceError> {
    Ok(PlaceSummary {
        photo: optional_photo_url(config, place.photo_reference.as_deref())?,
        place_id: place.place_id,
        name: place.name,
        address: place.vicinity,
        location: place.location,
        rating: place.rating,
        types: place.types,
    })
}

pub(super) fn search_page_to_summaries(
    config: &PlacesConfig,
    page: SearchPage<NearbyPlace>,
) -> Result<SearchPage<PlaceSummary>, ServiceError> {
    let items = page
        .items
        .into_iter()
        .map(|place| place_summary_from_nearby(config, place))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SearchPage {
        page: page.page,
        page_size: page.page_size,
        items,
        total_results: page.total_results,
        total_pages: page.total_pages,
    })
}

pub(super) fn top_restaurant_from_nearby(
    config: &PlacesConfig,
    rating: f64,
    place: NearbyPlace,
) -> Result<TopRestaurantDTO, ServiceError> {
    Ok(TopRestaurantDTO {
        photo: optional_photo_url(config, place.photo_reference.as_deref())?,
        price_level: price_level_label(place.price_level).to_string(),
        name: place.name,
        rating,
        address: place.vicinity,
        place_id: place.place_id,
    })
}

pub(super) fn photos_from_references(
    config: &PlacesConfig,
    references: Vec<String>,
) -> Result<Vec<PhotoDTO>, ServiceError> {
    references
        .into_iter()
        .map(|photo_reference| {
            Ok(PhotoDTO {
                url: photo_url(config, &photo_reference)?,
                photo_reference,
            })
        })
        .collect()
}

pub(super) fn reviews_from_provider(reviews: Vec<PlaceReview>) -> Vec<ReviewDTO> {
    convert_inner(reviews)
}

impl From<PlacePrediction> for CityResponseDTO {
    fn from(value: PlacePrediction) -> Self {
        Self {
            city_id: value.place_id,
            name: value.main_text,
            country: value.secondary_text,
            full_name: value.description,
        }
    }
}

/// `"Bogotá, Colombia"` -> `"Bogotá"`.
pub(super) fn city_display_name(city: &str) -> String {
    city.split(',').next().unwrap_or(city).trim().to_string()
}
