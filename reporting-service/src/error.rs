use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ReportingError {
    #[error("Reservation not found with ID: {0}")]
    NotFound(Uuid),

    #[error("Invalid reservation ID format")]
    InvalidReservationId,

    /// Carries the rejection detail for logs; clients get a fixed message.
    #[error("Invalid reservation payload: {0}")]
    InvalidPayload(String),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl ReportingError {
    pub fn status(&self) -> StatusCode {
        match self {
            ReportingError::NotFound(_) => StatusCode::NOT_FOUND,
            ReportingError::InvalidReservationId | ReportingError::InvalidPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            ReportingError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ReportingError {
    fn into_response(self) -> Response {
        let body = match &self {
            ReportingError::NotFound(_) | ReportingError::InvalidReservationId => self.to_string(),
            ReportingError::InvalidPayload(_) => "Invalid reservation payload".to_string(),
            ReportingError::Store(e) => {
                error!("Reservation store failure: {:#}", e);
                "Internal server error".to_string()
            }
        };
        (self.status(), body).into_response()
    }
}
