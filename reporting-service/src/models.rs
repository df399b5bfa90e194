use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use shared::ReservationRecord;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::reservation_reports)]
pub struct DbReservation {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guests: i32,
    pub reservation_length: i64,
    pub total_price: BigDecimal,
    pub guest_user: String,
    pub apartment: String,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl From<ReservationRecord> for DbReservation {
    fn from(record: ReservationRecord) -> Self {
        Self {
            id: record.id,
            reservation_id: record.reservation_id,
            check_in_date: record.check_in_date,
            check_out_date: record.check_out_date,
            guests: record.guests,
            reservation_length: record.stay_length_days,
            total_price: record.total_price,
            guest_user: record.guest_user,
            apartment: record.apartment_label,
            created_on: record.created_on,
            updated_on: record.updated_on,
        }
    }
}

impl From<DbReservation> for ReservationRecord {
    fn from(row: DbReservation) -> Self {
        Self {
            id: row.id,
            reservation_id: row.reservation_id,
            check_in_date: row.check_in_date,
            check_out_date: row.check_out_date,
            guests: row.guests,
            stay_length_days: row.reservation_length,
            total_price: row.total_price,
            guest_user: row.guest_user,
            apartment_label: row.apartment,
            created_on: row.created_on,
            updated_on: row.updated_on,
        }
    }
}
