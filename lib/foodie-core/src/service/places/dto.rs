use one_dto_mapper::From;

use crate::model::place::{Location, PlaceSummary};
use crate::provider::places::PlaceReview;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrowsePlacesRequestDTO {
    /// Free text city or `@lat@lng`.
    pub city: String,
    pub place: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchPage<T> {
    pub page: u32,
    pub page_size: u32,
    pub items: Vec<T>,
    pub total_results: u64,
    pub total_pages: u64,
}

pub type BrowsePlacesResponseDTO = SearchPage<PlaceSummary>;

#[derive(Clone, Debug, PartialEq)]
pub struct CityResponseDTO {
    pub city_id: String,
    pub name: Option<String>,
    pub country: Option<String>,
    pub full_name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaceSearchResultDTO {
    pub place_id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub location: Option<Location>,
    pub types: Vec<String>,
    pub rating: Option<f64>,
    pub photo: Option<String>,
    pub full_description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TopRestaurantDTO {
    pub name: String,
    pub rating: f64,
    pub address: Option<String>,
    pub place_id: String,
    pub photo: Option<String>,
    pub price_level: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CityTopRestaurantsOutcome {
    Success { restaurants: Vec<TopRestaurantDTO> },
    Failure { reason: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct CityTopRestaurantsDTO {
    pub city: String,
    pub outcome: CityTopRestaurantsOutcome,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RestaurantDetailDTO {
    pub place_id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub location: Option<Location>,
    pub types: Vec<String>,
    pub rating: Option<f64>,
    pub price_level: String,
    pub total_ratings: Option<u64>,
    pub website: Option<String>,
    pub opening_hours: Option<Vec<String>>,
    pub photos: Vec<PhotoDTO>,
    pub reviews: Vec<ReviewDTO>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhotoDTO {
    pub photo_reference: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, From)]
#[from(PlaceReview)]
pub struct ReviewDTO {
    pub author_name: String,
    pub rating: Option<f64>,
    pub text: Option<String>,
    pub relative_time_description: Option<String>,
    pub profile_photo_url: Option<String>,
}
