use super::dto::{CreateHistoryPlaceRequestDTO, UpdateHistoryPlaceRequestDTO};
use crate::model::place::Location;
use crate::service::error::ValidationError;

pub(crate) fn validate_user_id(user_id: &str) -> Result<(), ValidationError> {
    if user_id.trim().is_empty() {
        return Err(ValidationError::MissingUserId);
    }
    Ok(())
}

pub(crate) fn validate_create_request(
    request: &CreateHistoryPlaceRequestDTO,
) -> Result<(), ValidationError> {
    validate_not_empty("placeId", &request.place_id)?;
    validate_not_empty("name", &request.name)?;
    validate_location(&request.location)
}

pub(crate) fn validate_update_request(
    request: &UpdateHistoryPlaceRequestDTO,
) -> Result<(), ValidationError> {
    if let Some(place_id) = &request.place_id {
        validate_not_empty("placeId", place_id)?;
    }
    if let Some(name) = &request.name {
        validate_not_empty("name", name)?;
    }
    if let Some(location) = &request.location {
        validate_location(location)?;
    }
    Ok(())
}

fn validate_not_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::InvalidHistoryPlace(format!(
            "`{field}` must not be empty"
        )));
    }
    Ok(())
}

fn validate_location(location: &Location) -> Result<(), ValidationError> {
    if !location.is_valid() {
        return Err(ValidationError::InvalidHistoryPlace(format!(
            "invalid location `{location}`"
        )));
    }
    Ok(())
}
