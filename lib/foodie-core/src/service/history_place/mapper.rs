use one_dto_mapper::convert_inner;
use shared_types::HistoryPlaceId;
use time::OffsetDateTime;

use super::dto::{
    CreateHistoryPlaceRequestDTO, GetHistoryPlaceListResponseDTO, UpdateHistoryPlaceRequestDTO,
};
use crate::model::common::PageRequest;
use crate::model::history_place::{HistoryPlace, UpdateHistoryPlaceRequest};

pub(super) fn history_place_from_create_request(
    user_id: &str,
    request: CreateHistoryPlaceRequestDTO,
    now: OffsetDateTime,
) -> HistoryPlace {
    HistoryPlace {
        id: HistoryPlaceId::new(),
        user_id: user_id.to_string(),
        place_id: request.place_id,
        name: request.name,
        address: request.address,
        location: request.location,
        rating: request.rating,
        photo: request.photo,
        types: request.types,
        accessed_at: now,
    }
}

pub(super) fn update_request_from_dto(
    id: HistoryPlaceId,
    request: UpdateHistoryPlaceRequestDTO,
) -> UpdateHistoryPlaceRequest {
    UpdateHistoryPlaceRequest {
        id,
        place_id: request.place_id,
        name: request.name,
        address: request.address,
        location: request.location,
        rating: request.rating,
        photo: request.photo,
        types: request.types,
        accessed_at: request.accessed_at,
    }
}

pub(super) fn list_response(
    values: Vec<HistoryPlace>,
    total: u64,
    page_request: PageRequest,
) -> GetHistoryPlaceListResponseDTO {
    let total_pages = page_request.total_pages(total);

    GetHistoryPlaceListResponseDTO {
        values: convert_inner(values),
        total,
        page: page_request.page,
        total_pages,
        has_next_page: u64::from(page_request.page) < total_pages,
        has_previous_page: page_request.page > 1,
    }
}
