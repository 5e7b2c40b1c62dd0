use foodie_core::model::place::{Location, PlaceSummary};
use foodie_core::service::places::dto::{
    BrowsePlacesRequestDTO, BrowsePlacesResponseDTO, CityResponseDTO, PhotoDTO,
    PlaceSearchResultDTO, RestaurantDetailDTO, ReviewDTO, TopRestaurantDTO,
};
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Clone, Debug, Deserialize, IntoParams, Validate, Into)]
#[serde(rename_all = "camelCase")]
#[into(BrowsePlacesRequestDTO)]
#[into_params(parameter_in = Query)]
pub(crate) struct BrowsePlacesQueryParams {
    /// City name (e.g. `Bogotá, Colombia`) or coordinates as `@lat@lng`
    #[param(example = "Bogotá, Colombia")]
    #[validate(length(min = 1))]
    pub city: String,
    /// Keyword narrowing the nearby search
    #[param(example = "pizza")]
    pub place: Option<String>,
    #[into(rename = "page")]
    #[param(example = 1)]
    pub page_no: Option<u32>,
    #[param(example = 60)]
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct SearchQueryParams {
    pub search: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, From, Into)]
#[from(Location)]
#[into(Location)]
pub(crate) struct LocationRestDTO {
    #[schema(example = 4.711)]
    pub lat: f64,
    #[schema(example = json!(-74.0721))]
    pub lng: f64,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(PlaceSummary)]
pub(crate) struct PlaceSummaryRestDTO {
    pub place_id: String,
    pub name: String,
    pub address: Option<String>,
    pub location: LocationRestDTO,
    pub rating: Option<f64>,
    pub photo: Option<String>,
    pub types: Vec<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(BrowsePlacesResponseDTO)]
pub(crate) struct BrowsePlacesResponseRestDTO {
    #[from(rename = "page")]
    pub page_no: u32,
    pub page_size: u32,
    #[from(with_fn = convert_inner)]
    pub items: Vec<PlaceSummaryRestDTO>,
    pub total_results: u64,
    pub total_pages: u64,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(CityResponseDTO)]
pub(crate) struct CityResponseRestDTO {
    pub city_id: String,
    #[schema(example = "Bogotá")]
    pub name: Option<String>,
    #[schema(example = "Colombia")]
    pub country: Option<String>,
    #[schema(example = "Bogotá, Colombia")]
    pub full_name: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(PlaceSearchResultDTO)]
pub(crate) struct PlaceSearchResultRestDTO {
    pub place_id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    #[from(with_fn = convert_inner)]
    pub location: Option<LocationRestDTO>,
    pub types: Vec<String>,
    pub rating: Option<f64>,
    pub photo: Option<String>,
    pub full_description: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(TopRestaurantDTO)]
pub(crate) struct TopRestaurantRestDTO {
    pub name: String,
    pub rating: f64,
    pub address: Option<String>,
    pub place_id: String,
    pub photo: Option<String>,
    #[schema(example = "Moderate")]
    pub price_level: String,
}

/// Top restaurants of one city. A city whose lookup failed carries the reason
/// instead of a list.
#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CityTopRestaurantsRestDTO {
    #[schema(example = "Cartagena")]
    pub city: String,
    #[serde(flatten)]
    pub outcome: CityTopRestaurantsOutcomeRestEnum,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum CityTopRestaurantsOutcomeRestEnum {
    Success {
        restaurants: Vec<TopRestaurantRestDTO>,
    },
    Failure {
        reason: String,
    },
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(RestaurantDetailDTO)]
pub(crate) struct RestaurantDetailRestDTO {
    pub place_id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    #[from(with_fn = convert_inner)]
    pub location: Option<LocationRestDTO>,
    pub types: Vec<String>,
    pub rating: Option<f64>,
    pub price_level: String,
    pub total_ratings: Option<u64>,
    pub website: Option<String>,
    pub opening_hours: Option<Vec<String>>,
    #[from(with_fn = convert_inner)]
    pub photos: Vec<PhotoRestDTO>,
    #[from(with_fn = convert_inner)]
    pub reviews: Vec<ReviewRestDTO>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(PhotoDTO)]
pub(crate) struct PhotoRestDTO {
    pub photo_reference: String,
    pub url: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(ReviewDTO)]
pub(crate) struct ReviewRestDTO {
    pub author_name: String,
    pub rating: Option<f64>,
    pub text: Option<String>,
    pub relative_time_description: Option<String>,
    pub profile_photo_url: Option<String>,
}
