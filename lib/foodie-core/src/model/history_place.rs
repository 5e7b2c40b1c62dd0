use shared_types::HistoryPlaceId;
use time::OffsetDateTime;

use super::place::Location;

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryPlace {
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

/// Absent fields stay untouched. Nested `Option`s allow clearing a nullable column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateHistoryPlaceRequest {
    pub id: HistoryPlaceId,
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub address: Option<Option<String>>,
    pub location: Option<Location>,
    pub rating: Option<Option<f64>>,
    pub photo: Option<Option<String>>,
    pub types: Option<Option<Vec<String>>>,
    pub accessed_at: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryPlaceFilter {
    pub user_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryPlacePagination {
    pub skip: u64,
    pub limit: u64,
}
