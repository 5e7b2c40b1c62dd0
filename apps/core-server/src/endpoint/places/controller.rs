use axum::extract::State;
use axum_extra::extract::WithRejection;
use validator::Validate;

use super::dto::{
    BrowsePlacesQueryParams, BrowsePlacesResponseRestDTO, CityResponseRestDTO,
    CityTopRestaurantsRestDTO, PlaceSearchResultRestDTO, RestaurantDetailRestDTO,
    SearchQueryParams,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{ErrorResponse, OkOrErrorResponse, VecResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/v1/places/browser-places",
    responses(OkOrErrorResponse<BrowsePlacesResponseRestDTO>),
    params(BrowsePlacesQueryParams),
    tag = "places",
    summary = "Browse restaurants",
    description = indoc::formatdoc! {"
        Returns a page of restaurants around a city. The city is either a free text name,
        resolved through the places directory, or explicit coordinates written as `@lat@lng`.
        Results are collected by following the directory's continuation tokens and are
        deduplicated by place id.
    "},
)]
pub(crate) async fn browse_places(
    state: State<AppState>,
    WithRejection(Qs(query), _): WithRejection<Qs<BrowsePlacesQueryParams>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<BrowsePlacesResponseRestDTO> {
    if let Err(error) = query.validate() {
        tracing::warn!(%error, "Invalid browse request");
        return ErrorResponse::from(error).into();
    }

    let result = state.core.places_service.browse_places(query.into()).await;
    OkOrErrorResponse::from_result(result, state, "browsing places")
}

#[utoipa::path(
    get,
    path = "/v1/places/search",
    responses(OkOrErrorResponse<VecResponse<CityResponseRestDTO>>),
    params(SearchQueryParams),
    tag = "places",
    summary = "Search cities",
    description = "Returns cities matching the search term, or the default cities when no term is given.",
)]
pub(crate) async fn search_cities(
    state: State<AppState>,
    WithRejection(Qs(query), _): WithRejection<Qs<SearchQueryParams>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<VecResponse<CityResponseRestDTO>> {
    let result = state.core.places_service.search_cities(query.search).await;
    OkOrErrorResponse::from_result(result, state, "searching cities")
}

#[utoipa::path(
    get,
    path = "/v1/places/search-places",
    responses(OkOrErrorResponse<VecResponse<PlaceSearchResultRestDTO>>),
    params(SearchQueryParams),
    tag = "places",
    summary = "Search places",
    description = "Returns places of any kind matching the search term, each with its details.",
)]
pub(crate) async fn search_places(
    state: State<AppState>,
    WithRejection(Qs(query), _): WithRejection<Qs<SearchQueryParams>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<VecResponse<PlaceSearchResultRestDTO>> {
    let result = state.core.places_service.search_places(query.search).await;
    OkOrErrorResponse::from_result(result, state, "searching places")
}

#[utoipa::path(
    get,
    path = "/v1/places/top-restaurants",
    responses(OkOrErrorResponse<VecResponse<CityTopRestaurantsRestDTO>>),
    tag = "places",
    summary = "Top restaurants",
    description = indoc::formatdoc! {"
        Returns the best rated restaurants of the default cities. A city whose lookup
        failed is reported with status `FAILURE` and does not affect the others.
    "},
)]
pub(crate) async fn top_restaurants(
    state: State<AppState>,
) -> OkOrErrorResponse<VecResponse<CityTopRestaurantsRestDTO>> {
    let result = state.core.places_service.top_restaurants().await;
    OkOrErrorResponse::ok(result)
}

#[utoipa::path(
    get,
    path = "/v1/places/search-restaurant",
    responses(OkOrErrorResponse<RestaurantDetailRestDTO>),
    params(SearchQueryParams),
    tag = "places",
    summary = "Restaurant details",
    description = "Returns the details of a restaurant given its place id or its name.",
)]
pub(crate) async fn search_restaurant(
    state: State<AppState>,
    WithRejection(Qs(query), _): WithRejection<Qs<SearchQueryParams>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<RestaurantDetailRestDTO> {
    let result = state
        .core
        .places_service
        .search_restaurant(query.search)
        .await;
    OkOrErrorResponse::from_result(result, state, "searching restaurant")
}
