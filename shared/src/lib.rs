use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod money;
pub mod stats;

pub use stats::{ApartmentSummary, Summary};

/// Inbound reservation payload, as reported by the booking side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDetails {
    pub reservation_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guests: i32,
    /// Trusted as supplied; never recomputed from the dates.
    #[serde(rename = "reservationLength")]
    pub stay_length_days: i64,
    #[serde(with = "money")]
    pub total_price: BigDecimal,
    #[serde(rename = "user")]
    pub guest_user: String,
    #[serde(rename = "apartment")]
    pub apartment_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRecord {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guests: i32,
    pub stay_length_days: i64,
    pub total_price: BigDecimal,
    pub guest_user: String,
    pub apartment_label: String,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

/// A record that has been stamped but not yet given a storage id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReservationRecord {
    pub reservation_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guests: i32,
    pub stay_length_days: i64,
    pub total_price: BigDecimal,
    pub guest_user: String,
    pub apartment_label: String,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guests: i32,
    #[serde(rename = "reservationLength")]
    pub stay_length_days: i64,
    #[serde(with = "money")]
    pub total_price: BigDecimal,
    #[serde(rename = "user")]
    pub guest_user: String,
    #[serde(rename = "apartment")]
    pub apartment_label: String,
}

/// Per-apartment totals as existing consumers expect them: revenue stays a
/// number, day and guest totals are rendered as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationStatsResponse {
    pub apartment: String,
    #[serde(with = "money")]
    pub total_revenue: BigDecimal,
    pub total_booked_days: String,
    pub total_guests_visited: String,
}

impl ReservationDetails {
    /// Guest counts and prices are non-negative by convention; labels and
    /// the stay length are taken as given.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.guests < 0 {
            anyhow::bail!("guests must not be negative, got {}", self.guests);
        }
        if self.total_price < BigDecimal::zero() {
            anyhow::bail!("totalPrice must not be negative, got {}", self.total_price);
        }
        Ok(())
    }
}

impl NewReservationRecord {
    pub fn new(details: ReservationDetails) -> Self {
        Self::stamped(details, Utc::now())
    }

    pub fn stamped(details: ReservationDetails, now: DateTime<Utc>) -> Self {
        Self {
            reservation_id: details.reservation_id,
            check_in_date: details.check_in_date,
            check_out_date: details.check_out_date,
            guests: details.guests,
            stay_length_days: details.stay_length_days,
            total_price: details.total_price,
            guest_user: details.guest_user,
            apartment_label: details.apartment_label,
            created_on: now,
            updated_on: now,
        }
    }

    pub fn with_id(self, id: Uuid) -> ReservationRecord {
        ReservationRecord {
            id,
            reservation_id: self.reservation_id,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            guests: self.guests,
            stay_length_days: self.stay_length_days,
            total_price: self.total_price,
            guest_user: self.guest_user,
            apartment_label: self.apartment_label,
            created_on: self.created_on,
            updated_on: self.updated_on,
        }
    }
}

impl From<ReservationRecord> for ReservationResponse {
    fn from(record: ReservationRecord) -> Self {
        Self {
            reservation_id: record.reservation_id,
            check_in_date: record.check_in_date,
            check_out_date: record.check_out_date,
            guests: record.guests,
            stay_length_days: record.stay_length_days,
            total_price: record.total_price,
            guest_user: record.guest_user,
            apartment_label: record.apartment_label,
        }
    }
}

impl From<ApartmentSummary> for ReservationStatsResponse {
    fn from(summary: ApartmentSummary) -> Self {
        Self {
            apartment: summary.apartment_label,
            total_revenue: summary.totals.total_revenue,
            total_booked_days: summary.totals.total_booked_days.to_string(),
            total_guests_visited: summary.totals.total_guests_visited.to_string(),
        }
    }
}
