use super::dto::{
    GoogleLatLngDTO, GooglePlaceDTO, GooglePredictionDTO, GoogleReviewDTO, GoogleStatusDTO,
};
use crate::model::place::Location;
use crate::provider::places::error::PlacesProviderError;
use crate::provider::places::{
    NearbyPlace, PlaceCandidate, PlaceDetails, PlacePrediction, PlaceReview,
};

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

pub(super) fn ensure_ok(status: GoogleStatusDTO) -> Result<(), PlacesProviderError> {
    match status.status.as_str() {
        STATUS_OK | STATUS_ZERO_RESULTS => Ok(()),
        _ => Err(PlacesProviderError::Status {
            status: status.status,
            message: status.error_message,
        }),
    }
}

impl From<GoogleLatLngDTO> for Location {
    fn from(value: GoogleLatLngDTO) -> Self {
        Self {
            lat: value.lat,
            lng: value.lng,
        }
    }
}

impl From<GooglePredictionDTO> for PlacePrediction {
    fn from(value: GooglePredictionDTO) -> Self {
        let (main_text, secondary_text) = match value.structured_formatting {
            Some(formatting) => (Some(formatting.main_text), formatting.secondary_text),
            None => (None, None),
        };

        Self {
            place_id: value.place_id,
            description: value.description,
            main_text,
            secondary_text,
        }
    }
}

impl From<GoogleReviewDTO> for PlaceReview {
    fn from(value: GoogleReviewDTO) -> Self {
        Self {
            author_name: value.author_name,
            rating: value.rating,
            text: value.text,
            relative_time_description: value.relative_time_description,
            profile_photo_url: value.profile_photo_url,
        }
    }
}

impl From<GooglePlaceDTO> for PlaceDetails {
    fn from(value: GooglePlaceDTO) -> Self {
        Self {
            place_id: value.place_id,
            name: value.name,
            formatted_address: value.formatted_address,
            location: value.geometry.map(|geometry| geometry.location.into()),
            types: value.types,
            rating: value.rating,
            photo_references: value
                .photos
                .into_iter()
                .map(|photo| photo.photo_reference)
                .collect(),
            reviews: value.reviews.into_iter().map(Into::into).collect(),
            price_level: value.price_level,
            website: value.website,
            opening_hours: value.opening_hours.map(|hours| hours.weekday_text),
            user_ratings_total: value.user_ratings_total,
        }
    }
}

/// Results without an id, a name or a geometry cannot be shown and are dropped.
pub(super) fn nearby_place_from_dto(value: GooglePlaceDTO) -> Option<NearbyPlace> {
    let place_id = value.place_id?;
    let Some(name) = value.name else {
        tracing::warn!(%place_id, "Skipping nearby result without name");
        return None;
    };
    let Some(geometry) = value.geometry else {
        tracing::warn!(%place_id, "Skipping nearby result without geometry");
        return None;
    };

    Some(NearbyPlace {
        place_id,
        name,
        vicinity: value.vicinity,
        location: geometry.location.into(),
        rating: value.rating,
        photo_reference: value
            .photos
            .into_iter()
            .next()
            .map(|photo| photo.photo_reference),
        types: value.types,
        price_level: value.price_level,
    })
}

pub(super) fn candidate_from_dto(value: GooglePlaceDTO) -> Option<PlaceCandidate> {
    Some(PlaceCandidate {
        place_id: value.place_id?,
        name: value.name,
        formatted_address: value.formatted_address,
        types: value.types,
    })
}
