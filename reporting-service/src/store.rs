use anyhow::Result;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{
    pooled_connection::AsyncDieselConnectionManager, AsyncPgConnection, RunQueryDsl,
};
use shared::{NewReservationRecord, ReservationRecord};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;
use crate::models::DbReservation;
use crate::schema::reservation_reports;

pub type DbPool = bb8::Pool<AsyncDieselConnectionManager<AsyncPgConnection>>;

/// Durable home of reported reservations. Each call is atomic on its own;
/// callers never need more than one call to stay consistent.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Persists the record under a freshly assigned storage id.
    async fn insert(&self, record: NewReservationRecord) -> Result<ReservationRecord>;

    async fn list_all(&self) -> Result<Vec<ReservationRecord>>;

    /// Looks a record up by its business reservation id. When several rows
    /// share the id, the earliest reported one wins.
    async fn find_by_reservation_id(
        &self,
        reservation_id: Uuid,
    ) -> Result<Option<ReservationRecord>>;
}

pub struct PgReservationStore {
    pool: DbPool,
}

impl PgReservationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationStore for PgReservationStore {
    async fn insert(&self, record: NewReservationRecord) -> Result<ReservationRecord> {
        let mut conn = self.pool.get().await?;

        let row = DbReservation::from(record.with_id(Uuid::new_v4()));
        let saved = diesel::insert_into(reservation_reports::table)
            .values(&row)
            .returning(DbReservation::as_returning())
            .get_result(&mut conn)
            .await?;

        debug!("Stored reservation report {}", saved.id);
        Ok(saved.into())
    }

    async fn list_all(&self) -> Result<Vec<ReservationRecord>> {
        let mut conn = self.pool.get().await?;

        let rows = reservation_reports::table
            .order(reservation_reports::created_on.asc())
            .select(DbReservation::as_select())
            .load(&mut conn)
            .await?;

        Ok(rows.into_iter().map(ReservationRecord::from).collect())
    }

    async fn find_by_reservation_id(
        &self,
        reservation_id: Uuid,
    ) -> Result<Option<ReservationRecord>> {
        let mut conn = self.pool.get().await?;

        let row = reservation_reports::table
            .filter(reservation_reports::reservation_id.eq(reservation_id))
            .order(reservation_reports::created_on.asc())
            .select(DbReservation::as_select())
            .first(&mut conn)
            .await
            .optional()?;

        Ok(row.map(ReservationRecord::from))
    }
}

/// Process-local store, used when no database is configured and in tests.
#[derive(Default)]
pub struct InMemoryReservationStore {
    records: RwLock<Vec<ReservationRecord>>,
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationStore for InMemoryReservationStore {
    async fn insert(&self, record: NewReservationRecord) -> Result<ReservationRecord> {
        let saved = record.with_id(Uuid::new_v4());
        self.records.write().await.push(saved.clone());
        Ok(saved)
    }

    async fn list_all(&self) -> Result<Vec<ReservationRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_reservation_id(
        &self,
        reservation_id: Uuid,
    ) -> Result<Option<ReservationRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|r| r.reservation_id == reservation_id)
            .cloned())
    }
}
