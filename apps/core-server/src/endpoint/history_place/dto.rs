use foodie_core::service::history_place::dto::{
    CreateHistoryPlaceRequestDTO, GetHistoryPlaceListResponseDTO, GetHistoryPlaceResponseDTO,
    UpdateHistoryPlaceRequestDTO,
};
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::HistoryPlaceId;
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::endpoint::places::dto::LocationRestDTO;
use crate::serialize::front_time;

#[derive(Clone, Debug, Deserialize, ToSchema, Validate, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateHistoryPlaceRequestDTO)]
pub(crate) struct CreateHistoryPlaceRequestRestDTO {
    #[validate(length(min = 1))]
    #[schema(example = "ChIJN1t_tDeuEmsRUsoyG83frY4")]
    pub place_id: String,
    #[validate(length(min = 1))]
    #[schema(example = "La Cevichería")]
    pub name: String,
    pub address: Option<String>,
    pub location: LocationRestDTO,
    pub rating: Option<f64>,
    pub photo: Option<String>,
    pub types: Option<Vec<String>>,
}

/// Absent fields are left untouched, `null` clears a nullable field.
#[derive(Clone, Debug, Default, Deserialize, ToSchema, Validate, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(UpdateHistoryPlaceRequestDTO)]
pub(crate) struct UpdateHistoryPlaceRequestRestDTO {
    #[validate(length(min = 1))]
    #[schema(nullable = false)]
    pub place_id: Option<String>,
    #[validate(length(min = 1))]
    #[schema(nullable = false)]
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
    #[into(with_fn = convert_inner)]
    #[schema(nullable = false)]
    pub location: Option<LocationRestDTO>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<f64>)]
    pub rating: Option<Option<f64>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub photo: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<Vec<String>>)]
    pub types: Option<Option<Vec<String>>>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    #[schema(nullable = false, value_type = Option<String>, example = "2024-05-01T10:15:30.000Z")]
    pub accessed_at: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub(crate) struct HistoryPlaceListQueryParams {
    /// Page number, starting at 1
    #[param(example = 1)]
    pub page_no: Option<i64>,
    #[param(example = 10)]
    pub page_size: Option<i64>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(GetHistoryPlaceResponseDTO)]
pub(crate) struct GetHistoryPlaceResponseRestDTO {
    pub id: HistoryPlaceId,
    pub user_id: String,
    pub place_id: String,
    pub name: String,
    pub address: Option<String>,
    pub location: LocationRestDTO,
    pub rating: Option<f64>,
    pub photo: Option<String>,
    pub types: Option<Vec<String>>,
    #[serde(serialize_with = "front_time")]
    #[schema(value_type = String, example = "2024-05-01T10:15:30.000Z")]
    pub accessed_at: OffsetDateTime,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(GetHistoryPlaceListResponseDTO)]
pub(crate) struct GetHistoryPlaceListResponseRestDTO {
    #[from(with_fn = convert_inner)]
    pub values: Vec<GetHistoryPlaceResponseRestDTO>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}
