use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use shared_types::HistoryPlaceId;
use validator::Validate;

use super::dto::{
    CreateHistoryPlaceRequestRestDTO, GetHistoryPlaceListResponseRestDTO,
    GetHistoryPlaceResponseRestDTO, HistoryPlaceListQueryParams, UpdateHistoryPlaceRequestRestDTO,
};
use super::mapper::list_pagination;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{
    CreatedOrErrorResponse, EmptyOrErrorResponse, ErrorResponse, OkOrErrorResponse,
};
use crate::extractor::Qs;
use crate::middleware::Authorized;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/v1/history-places",
    request_body = CreateHistoryPlaceRequestRestDTO,
    responses(CreatedOrErrorResponse<GetHistoryPlaceResponseRestDTO>),
    tag = "history_place_management",
    security(
        ("bearer" = [])
    ),
    summary = "Record viewed place",
    description = "Stores a place in the history of the authenticated user.",
)]
pub(crate) async fn post_history_place(
    state: State<AppState>,
    authorized: Authorized,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateHistoryPlaceRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<GetHistoryPlaceResponseRestDTO> {
    if let Err(error) = request.validate() {
        tracing::warn!(%error, "Invalid history place");
        return ErrorResponse::from(error).into();
    }

    let result = state
        .core
        .history_place_service
        .create_history_place(&authorized.user_id, request.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating history place")
}

#[utoipa::path(
    get,
    path = "/v1/history-places",
    responses(OkOrErrorResponse<GetHistoryPlaceListResponseRestDTO>),
    params(HistoryPlaceListQueryParams),
    tag = "history_place_management",
    security(
        ("bearer" = [])
    ),
    summary = "List viewed places",
    description = "Returns the history of the authenticated user, most recently accessed first.",
)]
pub(crate) async fn get_history_place_list(
    state: State<AppState>,
    authorized: Authorized,
    WithRejection(Qs(query), _): WithRejection<
        Qs<HistoryPlaceListQueryParams>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<GetHistoryPlaceListResponseRestDTO> {
    let result = match list_pagination(&query) {
        Ok((page, page_size)) => {
            state
                .core
                .history_place_service
                .get_history_place_list(&authorized.user_id, page, page_size)
                .await
        }
        Err(error) => Err(error),
    };
    OkOrErrorResponse::from_result(result, state, "listing history places")
}

#[utoipa::path(
    get,
    path = "/v1/history-places/{id}",
    responses(OkOrErrorResponse<GetHistoryPlaceResponseRestDTO>),
    params(
        ("id" = HistoryPlaceId, Path, description = "History place id")
    ),
    tag = "history_place_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve viewed place",
    description = "Returns a single history record owned by the authenticated user. Records of other users are rejected with `403`.",
)]
pub(crate) async fn get_history_place(
    state: State<AppState>,
    authorized: Authorized,
    WithRejection(Path(id), _): WithRejection<Path<HistoryPlaceId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetHistoryPlaceResponseRestDTO> {
    let result = state
        .core
        .history_place_service
        .get_history_place(&authorized.user_id, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting history place")
}

#[utoipa::path(
    put,
    path = "/v1/history-places/{id}",
    request_body = UpdateHistoryPlaceRequestRestDTO,
    responses(OkOrErrorResponse<GetHistoryPlaceResponseRestDTO>),
    params(
        ("id" = HistoryPlaceId, Path, description = "History place id")
    ),
    tag = "history_place_management",
    security(
        ("bearer" = [])
    ),
    summary = "Update viewed place",
    description = indoc::formatdoc! {"
        Updates a history record owned by the authenticated user. Omitted fields are kept,
        `accessedAt` may be set explicitly. Records of other users are rejected with `403`.
    "},
)]
pub(crate) async fn put_history_place(
    state: State<AppState>,
    authorized: Authorized,
    WithRejection(Path(id), _): WithRejection<Path<HistoryPlaceId>, ErrorResponseRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateHistoryPlaceRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<GetHistoryPlaceResponseRestDTO> {
    if let Err(error) = request.validate() {
        tracing::warn!(%error, "Invalid history place update");
        return ErrorResponse::from(error).into();
    }

    let result = state
        .core
        .history_place_service
        .update_history_place(&authorized.user_id, &id, request.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "updating history place")
}

#[utoipa::path(
    delete,
    path = "/v1/history-places/{id}",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = HistoryPlaceId, Path, description = "History place id")
    ),
    tag = "history_place_management",
    security(
        ("bearer" = [])
    ),
    summary = "Delete viewed place",
    description = "Deletes a history record owned by the authenticated user.",
)]
pub(crate) async fn delete_history_place(
    state: State<AppState>,
    authorized: Authorized,
    WithRejection(Path(id), _): WithRejection<Path<HistoryPlaceId>, ErrorResponseRestDTO>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .history_place_service
        .delete_history_place(&authorized.user_id, &id)
        .await;
    EmptyOrErrorResponse::from_result(result, state, "deleting history place")
}
