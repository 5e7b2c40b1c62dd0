use one_dto_mapper::From;
use shared_types::HistoryPlaceId;
use time::OffsetDateTime;

use crate::model::history_place::HistoryPlace;
use crate::model::place::Location;

#[derive(Clone, Debug, PartialEq)]
pub struct CreateHistoryPlaceRequestDTO {
    pub place_id: String,
    pub name: String,
    pub address: Option<String>,
    pub location: Location,
    pub rating: Option<f64>,
    pub photo: Option<String>,
    pub types: Option<Vec<String>>,
}

/// Absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateHistoryPlaceRequestDTO {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub address: Option<Option<String>>,
    pub location: Option<Location>,
    pub rating: Option<Option<f64>>,
    pub photo: Option<Option<String>>,
    pub types: Option<Option<Vec<String>>>,
    pub accessed_at: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, PartialEq, From)]
#[from(HistoryPlace)]
pub struct GetHistoryPlaceResponseDTO {
    pub id: HistoryPlaceId,
    pub user_id: String,
    pub place_id: String,
    pub name: String,
    pub address: Option<String>,
    pub location: Location,
    pub rating: Option<f64>,
    pub photo: Option<String>,
    pub types: Option<Vec<String>>,
    pub accessed_at: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GetHistoryPlaceListResponseDTO {
    pub values: Vec<GetHistoryPlaceResponseDTO>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}
