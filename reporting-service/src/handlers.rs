use shared::stats::apartment_summaries;
use shared::*;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use crate::error::ReportingError;
use crate::store::ReservationStore;

pub type Result<T, E = ReportingError> = std::result::Result<T, E>;

#[derive(Clone)]
pub struct ReportingService {
    store: Arc<dyn ReservationStore>,
}

impl ReportingService {
    pub fn new(store: Arc<dyn ReservationStore>) -> Self {
        Self { store }
    }

    pub async fn save_reservation(&self, details: ReservationDetails) -> Result<ReservationRecord> {
        if let Err(e) = details.validate() {
            warn!("Rejected reservation {}: {}", details.reservation_id, e);
            return Err(ReportingError::InvalidPayload(e.to_string()));
        }

        let saved = self.store.insert(NewReservationRecord::new(details)).await?;
        info!(
            "Recorded reservation {} for {} as {}",
            saved.reservation_id, saved.apartment_label, saved.id
        );
        Ok(saved)
    }

    pub async fn reservation_history(&self) -> Result<Vec<ReservationRecord>> {
        Ok(self.store.list_all().await?)
    }

    pub async fn reservation_details(&self, reservation_id: Uuid) -> Result<ReservationResponse> {
        self.store
            .find_by_reservation_id(reservation_id)
            .await?
            .map(ReservationResponse::from)
            .ok_or(ReportingError::NotFound(reservation_id))
    }

    pub async fn stats(&self) -> Result<Vec<ReservationStatsResponse>> {
        let history = self.reservation_history().await?;
        Ok(apartment_summaries(&history)
            .into_iter()
            .map(ReservationStatsResponse::from)
            .collect())
    }
}
