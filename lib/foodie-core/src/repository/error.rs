use std::time::Duration;

use thiserror::Error;

use crate::service::error::ErrorCode;

#[derive(Debug, Error)]
pub enum DataLayerError {
    #[error("Already exists")]
    AlreadyExists,

    #[error("Record not updated")]
    RecordNotUpdated,

    #[error("Response could not be mapped")]
    MappingError,

    #[error("Database error: {0}")]
    Db(#[from] anyhow::Error),

    #[error("Query did not finish within {0:?}")]
    Timeout(Duration),
}

impl DataLayerError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Db(_) => ErrorCode::BR_0011,
            Self::Timeout(_) => ErrorCode::BR_0012,
            Self::AlreadyExists | Self::RecordNotUpdated | Self::MappingError => {
                ErrorCode::BR_0000
            }
        }
    }
}
