use crate::model::place::Location;
use crate::service::error::ValidationError;

pub(crate) fn validate_search_term(search: Option<&str>) -> Result<&str, ValidationError> {
    match search.map(str::trim) {
        Some(term) if !term.is_empty() => Ok(term),
        _ => Err(ValidationError::EmptySearch),
    }
}

/// Parses the `@lat@lng` form. Returns `None` for plain city names.
pub(crate) fn parse_coordinates(input: &str) -> Result<Option<Location>, ValidationError> {
    if !input.contains('@') {
        return Ok(None);
    }

    let invalid = || ValidationError::InvalidCoordinates(input.to_string());

    let parts: Vec<&str> = input
        .split('@')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    let [lat, lng] = parts.as_slice() else {
        return Err(invalid());
    };

    let location = Location {
        lat: lat.parse().map_err(|_| invalid())?,
        lng: lng.parse().map_err(|_| invalid())?,
    };

    if !location.is_valid() {
        return Err(invalid());
    }

    Ok(Some(location))
}
