//! Entity routes: /v1/reservations (full CRUD) and /v1/vehicles (read-only).

use crate::handlers::{reservations, vehicles};
use crate::routes::common_routes_with_ready;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

pub fn reservation_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/reservations",
            get(reservations::list)
                .post(reservations::create)
                .put(reservations::update),
        )
        .route(
            "/reservations/:id",
            get(reservations::read).delete(reservations::delete),
        )
        .with_state(state)
}

pub fn vehicle_routes(state: AppState) -> Router {
    Router::new()
        .route("/vehicles", get(vehicles::list))
        .route("/vehicles/:id", get(vehicles::read))
        .with_state(state)
}

/// Full application router: common routes at the root, entities under /v1, with
/// request tracing and a body size limit.
pub fn app(state: AppState, body_limit: usize) -> Router {
    let api = Router::new()
        .merge(reservation_routes(state.clone()))
        .merge(vehicle_routes(state.clone()));
    Router::new()
        .merge(common_routes_with_ready(state))
        .nest("/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(LatencyUnit::Millis),
                        ),
                )
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
}
