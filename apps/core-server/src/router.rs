#![cfg_attr(feature = "strict", deny(warnings))]

use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};
use foodie_core::FoodieCore;
use foodie_core::config::core_config::AppConfig;
use sql_data_provider::{DataLayer, DbConn};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::ServerConfig;
use crate::dto::response::ErrorResponse;
use crate::endpoint::{self, history_place, misc, places};
use crate::middleware::get_http_request_context;

pub(crate) struct InternalAppState {
    pub core: FoodieCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(
    listener: TcpListener,
    config: AppConfig<ServerConfig>,
    db_conn: DbConn,
) {
    listener
        .set_nonblocking(true)
        .expect("Failed to set listener non-blocking");

    let core = FoodieCore::new(Arc::new(DataLayer::build(db_conn)), config.core)
        .expect("Failed to initialize core");

    serve(listener, core, config.app).await
}

/// Serves the HTTP API on top of an already wired core.
pub async fn serve(listener: TcpListener, core: FoodieCore, config: ServerConfig) {
    let config = Arc::new(config);
    let state: AppState = Arc::new(InternalAppState {
        core,
        config: config.to_owned(),
    });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    let router = router(state, config);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router.into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(state: AppState, config: Arc<ServerConfig>) -> Router {
    let protected = Router::new()
        .route(
            "/v1/history-places",
            get(history_place::controller::get_history_place_list)
                .post(history_place::controller::post_history_place),
        )
        .route(
            "/v1/history-places/{id}",
            get(history_place::controller::get_history_place)
                .put(history_place::controller::put_history_place)
                .delete(history_place::controller::delete_history_place),
        )
        .layer(middleware::from_fn(crate::middleware::bearer_check));

    let unprotected = Router::new()
        .route(
            "/v1/places/browser-places",
            get(places::controller::browse_places),
        )
        .route("/v1/places/search", get(places::controller::search_cities))
        .route(
            "/v1/places/search-places",
            get(places::controller::search_places),
        )
        .route(
            "/v1/places/top-restaurants",
            get(places::controller::top_restaurants),
        )
        .route(
            "/v1/places/search-restaurant",
            get(places::controller::search_restaurant),
        );

    let mut technical_endpoints = Router::new();
    if config.enable_server_info {
        technical_endpoints = technical_endpoints
            .route("/build-info", get(misc::get_build_info))
            .route("/health", get(misc::health_check));
    }
    if config.enable_metrics {
        technical_endpoints = technical_endpoints.route("/metrics", get(misc::get_metrics));
    }

    let mut router = Router::new()
        .merge(protected)
        .merge(unprotected)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let context = get_http_request_context(request);
                    info_span!(
                        "http_request",
                        method = context.method,
                        path = context.path,
                        service = "foodie-core",
                        RequestId = context.request_id,
                        SessionId = context.session_id,
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {}) // override default on_failure handler
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        );

    if config.enable_open_api {
        router = router.merge(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", gen_openapi_documentation()),
        );
    }

    router
        .layer(middleware::from_fn(crate::middleware::metrics_counter))
        .merge(technical_endpoints)
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(Extension(config))
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic(message).into_response()
}

pub fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::places::controller::browse_places,
            endpoint::places::controller::search_cities,
            endpoint::places::controller::search_places,
            endpoint::places::controller::top_restaurants,
            endpoint::places::controller::search_restaurant,

            endpoint::history_place::controller::post_history_place,
            endpoint::history_place::controller::get_history_place_list,
            endpoint::history_place::controller::get_history_place,
            endpoint::history_place::controller::put_history_place,
            endpoint::history_place::controller::delete_history_place,

            endpoint::misc::get_build_info,
            endpoint::misc::health_check,
            endpoint::misc::get_metrics,
        ),
        components(
            schemas(
                endpoint::places::dto::LocationRestDTO,
                endpoint::places::dto::PlaceSummaryRestDTO,
                endpoint::places::dto::BrowsePlacesResponseRestDTO,
                endpoint::places::dto::CityResponseRestDTO,
                endpoint::places::dto::PlaceSearchResultRestDTO,
                endpoint::places::dto::TopRestaurantRestDTO,
                endpoint::places::dto::CityTopRestaurantsRestDTO,
                endpoint::places::dto::CityTopRestaurantsOutcomeRestEnum,
                endpoint::places::dto::RestaurantDetailRestDTO,
                endpoint::places::dto::PhotoRestDTO,
                endpoint::places::dto::ReviewRestDTO,

                endpoint::history_place::dto::CreateHistoryPlaceRequestRestDTO,
                endpoint::history_place::dto::UpdateHistoryPlaceRequestRestDTO,
                endpoint::history_place::dto::GetHistoryPlaceResponseRestDTO,
                endpoint::history_place::dto::GetHistoryPlaceListResponseRestDTO,

                endpoint::misc::BuildInfoRestDTO,

                crate::dto::error::ErrorResponseRestDTO,
                crate::dto::error::ErrorCode,
                crate::dto::error::Cause,

                shared_types::HistoryPlaceId,
            )
        ),
        tags(
            (name = "other", description = "Other utility endpoints"),
            (name = "places", description = "Places directory lookups"),
            (name = "history_place_management", description = "History of viewed places"),
        ),
        modifiers(&SecurityAddon)
    )]
    struct ApiDoc;

    struct SecurityAddon;

    impl Modify for SecurityAddon {
        fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
            if let Some(components) = openapi.components.as_mut() {
                components.add_security_scheme(
                    "bearer",
                    SecurityScheme::Http(
                        HttpBuilder::new()
                            .scheme(HttpAuthScheme::Bearer)
                            .bearer_format("JWT")
                            .description(Some("HS256 access token, `sub` is the user id"))
                            .build(),
                    ),
                );
            }
        }
    }

    ApiDoc::openapi()
}
