//! Lookup of cities, places and restaurants in an external places directory.

use strum::Display;

use self::error::PlacesProviderError;
use crate::model::place::Location;

pub mod error;
pub mod google;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutocompleteKind {
    Cities,
    Any,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacePrediction {
    pub place_id: String,
    pub description: String,
    pub main_text: Option<String>,
    pub secondary_text: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum PlaceField {
    PlaceId,
    Name,
    FormattedAddress,
    Geometry,
    Type,
    Types,
    Rating,
    Photo,
    Photos,
    Reviews,
    PriceLevel,
    Website,
    OpeningHours,
    UserRatingsTotal,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaceDetails {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub location: Option<Location>,
    pub types: Vec<String>,
    pub rating: Option<f64>,
    pub photo_references: Vec<String>,
    pub reviews: Vec<PlaceReview>,
    pub price_level: Option<u8>,
    pub website: Option<String>,
    pub opening_hours: Option<Vec<String>>,
    pub user_ratings_total: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaceReview {
    pub author_name: String,
    pub rating: Option<f64>,
    pub text: Option<String>,
    pub relative_time_description: Option<String>,
    pub profile_photo_url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RankBy {
    Prominence,
    Distance,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NearbySearchRequest {
    pub location: Location,
    pub radius: u32,
    pub keyword: Option<String>,
    pub place_type: Option<String>,
    pub rank_by: Option<RankBy>,
    pub page_token: Option<String>,
}

/// One raw nearby-search result.
#[derive(Clone, Debug, PartialEq)]
pub struct NearbyPlace {
    pub place_id: String,
    pub name: String,
    pub vicinity: Option<String>,
    pub location: Location,
    pub rating: Option<f64>,
    pub photo_reference: Option<String>,
    pub types: Vec<String>,
    pub price_level: Option<u8>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NearbySearchPage {
    pub results: Vec<NearbyPlace>,
    pub next_page_token: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaceCandidate {
    pub place_id: String,
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub types: Vec<String>,
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait PlacesProvider: Send + Sync {
    async fn autocomplete(
        &self,
        input: &str,
        kind: AutocompleteKind,
    ) -> Result<Vec<PlacePrediction>, PlacesProviderError>;

    async fn place_details(
        &self,
        place_id: &str,
        fields: &[PlaceField],
    ) -> Result<PlaceDetails, PlacesProviderError>;

    async fn nearby_search(
        &self,
        request: NearbySearchRequest,
    ) -> Result<NearbySearchPage, PlacesProviderError>;

    async fn find_place_from_text(
        &self,
        input: &str,
        fields: &[PlaceField],
    ) -> Result<Vec<PlaceCandidate>, PlacesProviderError>;
}
