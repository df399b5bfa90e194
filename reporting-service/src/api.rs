use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use shared::*;
use tower_http::trace::TraceLayer;
use tracing::warn;
use uuid::Uuid;
use crate::error::ReportingError;
use crate::handlers::ReportingService;

pub const REPORTING_BASE: &str = "/api/v1/admin/reporting";

#[derive(Clone)]
pub struct AppState {
    pub service: ReportingService,
}

#[derive(Debug, Deserialize)]
pub struct DetailsQuery {
    #[serde(rename = "reservationId")]
    pub reservation_id: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(REPORTING_BASE, get(reservation_history))
        .route(&format!("{}/reservations", REPORTING_BASE), post(save_reservation))
        .route(&format!("{}/stats", REPORTING_BASE), get(stats))
        .route(&format!("{}/query", REPORTING_BASE), get(reservation_details))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}

pub async fn save_reservation(
    State(state): State<AppState>,
    payload: Result<Json<ReservationDetails>, JsonRejection>,
) -> Result<(StatusCode, Json<ReservationResponse>), ReportingError> {
    let Json(details) = payload.map_err(|rejection| {
        warn!("Malformed reservation payload: {}", rejection.body_text());
        ReportingError::InvalidPayload(rejection.body_text())
    })?;

    let saved = state.service.save_reservation(details).await?;
    Ok((StatusCode::CREATED, Json(ReservationResponse::from(saved))))
}

pub async fn reservation_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationResponse>>, ReportingError> {
    let history = state.service.reservation_history().await?;
    Ok(Json(history.into_iter().map(ReservationResponse::from).collect()))
}

pub async fn stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationStatsResponse>>, ReportingError> {
    Ok(Json(state.service.stats().await?))
}

pub async fn reservation_details(
    State(state): State<AppState>,
    query: Option<Query<DetailsQuery>>,
) -> Result<Json<ReservationResponse>, ReportingError> {
    let Some(Query(query)) = query else {
        warn!("Reservation details requested without a reservationId");
        return Err(ReportingError::InvalidReservationId);
    };

    let reservation_id = Uuid::parse_str(&query.reservation_id).map_err(|e| {
        warn!("Invalid reservation id {:?}: {}", query.reservation_id, e);
        ReportingError::InvalidReservationId
    })?;

    let details = state.service.reservation_details(reservation_id).await.map_err(|e| {
        if let ReportingError::NotFound(_) = e {
            warn!("Reservation lookup failed: {}", e);
        }
        e
    })?;
    Ok(Json(details))
}

pub async fn health_check() -> &'static str {
    "OK"
}
