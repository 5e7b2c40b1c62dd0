use shared_types::HistoryPlaceId;
use thiserror::Error;

use crate::provider::places::error::PlacesProviderError;
use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Places provider error: `{0}`")]
    PlacesProvider(#[from] PlacesProviderError),

    #[error(transparent)]
    Repository(#[from] DataLayerError),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("History place `{0}` not found")]
    HistoryPlace(HistoryPlaceId),

    #[error("City `{0}` not found")]
    City(String),

    #[error("No restaurant found for `{0}`")]
    Restaurant(String),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing user id")]
    MissingUserId,

    #[error("Invalid pagination: page `{page}`, page size `{page_size}`")]
    InvalidPagination { page: i64, page_size: i64 },

    #[error("Search term is required")]
    EmptySearch,

    #[error("Invalid coordinates `{0}`")]
    InvalidCoordinates(String),

    #[error("Invalid history place: {0}")]
    InvalidHistoryPlace(String),

    #[error("History place `{0}` belongs to another user")]
    Forbidden(HistoryPlaceId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    BR_0000,
    BR_0001,
    BR_0002,
    BR_0003,
    BR_0004,
    BR_0005,
    BR_0006,
    BR_0007,
    BR_0008,
    BR_0009,
    BR_0010,
    BR_0011,
    BR_0012,
    BR_0013,
    BR_0014,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::BR_0000 => "Unmapped error code",
            ErrorCode::BR_0001 => "History place not found",
            ErrorCode::BR_0002 => "City not found",
            ErrorCode::BR_0003 => "Restaurant not found",
            ErrorCode::BR_0004 => "Missing user id",
            ErrorCode::BR_0005 => "Invalid pagination",
            ErrorCode::BR_0006 => "Search term is required",
            ErrorCode::BR_0007 => "Invalid coordinates",
            ErrorCode::BR_0008 => "Invalid history place",
            ErrorCode::BR_0009 => "History place belongs to another user",
            ErrorCode::BR_0010 => "Places provider error",
            ErrorCode::BR_0011 => "Database error",
            ErrorCode::BR_0012 => "Database query timeout",
            ErrorCode::BR_0013 => "Response mapping error",
            ErrorCode::BR_0014 => "General input validation error",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::Repository(error) => error.error_code(),
            ServiceError::PlacesProvider(_) => ErrorCode::BR_0010,
            ServiceError::MappingError(_) => ErrorCode::BR_0013,
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::HistoryPlace(_) => ErrorCode::BR_0001,
            Self::City(_) => ErrorCode::BR_0002,
            Self::Restaurant(_) => ErrorCode::BR_0003,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingUserId => ErrorCode::BR_0004,
            Self::InvalidPagination { .. } => ErrorCode::BR_0005,
            Self::EmptySearch => ErrorCode::BR_0006,
            Self::InvalidCoordinates(_) => ErrorCode::BR_0007,
            Self::InvalidHistoryPlace(_) => ErrorCode::BR_0008,
            Self::Forbidden(_) => ErrorCode::BR_0009,
        }
    }
}
