use foodie_core::model::history_place::{HistoryPlace, UpdateHistoryPlaceRequest};
use foodie_core::model::place::Location;
use foodie_core::repository::error::DataLayerError;
use sea_orm::entity::prelude::Json;
use sea_orm::{Set, Unchanged};

use crate::entity::history_place;

fn types_to_json(types: Vec<String>) -> Json {
    Json::from(types)
}

fn types_from_json(types: Json) -> Result<Vec<String>, DataLayerError> {
    serde_json::from_value(types).map_err(|_| DataLayerError::MappingError)
}

impl From<HistoryPlace> for history_place::ActiveModel {
    fn from(value: HistoryPlace) -> Self {
        Self {
            id: Set(value.id),
            user_id: Set(value.user_id),
            place_id: Set(value.place_id),
            name: Set(value.name),
            address: Set(value.address),
            location_lat: Set(value.location.lat),
            location_lng: Set(value.location.lng),
            rating: Set(value.rating),
            photo: Set(value.photo),
            types: Set(value.types.map(types_to_json)),
            accessed_at: Set(value.accessed_at),
        }
    }
}

impl TryFrom<history_place::Model> for HistoryPlace {
    type Error = DataLayerError;

    fn try_from(value: history_place::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            user_id: value.user_id,
            place_id: value.place_id,
            name: value.name,
            address: value.address,
            location: Location {
                lat: value.location_lat,
                lng: value.location_lng,
            },
            rating: value.rating,
            photo: value.photo,
            types: value.types.map(types_from_json).transpose()?,
            accessed_at: value.accessed_at,
        })
    }
}

impl From<UpdateHistoryPlaceRequest> for history_place::ActiveModel {
    fn from(value: UpdateHistoryPlaceRequest) -> Self {
        let (location_lat, location_lng) = match value.location {
            Some(location) => (Set(location.lat), Set(location.lng)),
            None => Default::default(),
        };

        Self {
            id: Unchanged(value.id),
            place_id: value.place_id.map(Set).unwrap_or_default(),
            name: value.name.map(Set).unwrap_or_default(),
            address: value.address.map(Set).unwrap_or_default(),
            location_lat,
            location_lng,
            rating: value.rating.map(Set).unwrap_or_default(),
            photo: value.photo.map(Set).unwrap_or_default(),
            types: value
                .types
                .map(|types| Set(types.map(types_to_json)))
                .unwrap_or_default(),
            accessed_at: value.accessed_at.map(Set).unwrap_or_default(),
            ..Default::default()
        }
    }
}
