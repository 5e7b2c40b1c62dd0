use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub(super) struct GoogleStatusDTO {
    pub status: String,
    pub error_message: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct GoogleAutocompleteResponseDTO {
    #[serde(default)]
    pub predictions: Vec<GooglePredictionDTO>,
    #[serde(flatten)]
    pub status: GoogleStatusDTO,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct GooglePredictionDTO {
    pub place_id: String,
    pub description: String,
    pub structured_formatting: Option<GoogleStructuredFormattingDTO>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct GoogleStructuredFormattingDTO {
    pub main_text: String,
    pub secondary_text: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct GoogleDetailsResponseDTO {
    pub result: Option<GooglePlaceDTO>,
    #[serde(flatten)]
    pub status: GoogleStatusDTO,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct GoogleNearbySearchResponseDTO {
    #[serde(default)]
    pub results: Vec<GooglePlaceDTO>,
    pub next_page_token: Option<String>,
    #[serde(flatten)]
    pub status: GoogleStatusDTO,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct GoogleFindPlaceResponseDTO {
    #[serde(default)]
    pub candidates: Vec<GooglePlaceDTO>,
    #[serde(flatten)]
    pub status: GoogleStatusDTO,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(super) struct GooglePlaceDTO {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub vicinity: Option<String>,
    pub formatted_address: Option<String>,
    pub geometry: Option<GoogleGeometryDTO>,
    #[serde(default)]
    pub types: Vec<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub photos: Vec<GooglePhotoDTO>,
    #[serde(default)]
    pub reviews: Vec<GoogleReviewDTO>,
    pub price_level: Option<u8>,
    pub website: Option<String>,
    pub opening_hours: Option<GoogleOpeningHoursDTO>,
    pub user_ratings_total: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct GoogleGeometryDTO {
    pub location: GoogleLatLngDTO,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub(super) struct GoogleLatLngDTO {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct GooglePhotoDTO {
    pub photo_reference: String,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct GoogleReviewDTO {
    pub author_name: String,
    pub rating: Option<f64>,
    pub text: Option<String>,
    pub relative_time_description: Option<String>,
    pub profile_photo_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct GoogleOpeningHoursDTO {
    #[serde(default)]
    pub weekday_text: Vec<String>,
}
