//! Per-apartment statistics over the reservation history.
//!
//! Records are grouped by their exact apartment label and each group is
//! folded into a [`Summary`] with [`Summary::combine`]. `combine` is
//! associative and commutative with [`Summary::zero`] as identity, so the
//! history can be reduced in any order or in independent chunks.
//!
//! Day and guest totals accumulate in `i128`. Inputs are at most `i64`, so
//! no realistic history can overflow them.

use crate::ReservationRecord;
use bigdecimal::BigDecimal;
use num_traits::Zero;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_revenue: BigDecimal,
    pub total_booked_days: i128,
    pub total_guests_visited: i128,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApartmentSummary {
    pub apartment_label: String,
    pub totals: Summary,
}

impl Summary {
    pub fn zero() -> Self {
        Self {
            total_revenue: BigDecimal::zero(),
            total_booked_days: 0,
            total_guests_visited: 0,
        }
    }

    pub fn of(record: &ReservationRecord) -> Self {
        Self {
            total_revenue: record.total_price.clone(),
            total_booked_days: i128::from(record.stay_length_days),
            total_guests_visited: i128::from(record.guests),
        }
    }

    pub fn combine(&self, other: &Summary) -> Summary {
        Summary {
            total_revenue: &self.total_revenue + &other.total_revenue,
            total_booked_days: self.total_booked_days + other.total_booked_days,
            total_guests_visited: self.total_guests_visited + other.total_guests_visited,
        }
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::zero()
    }
}

/// Folds every record into one summary, ignoring apartment labels.
pub fn reduce<'a, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'a ReservationRecord>,
{
    records
        .into_iter()
        .fold(Summary::zero(), |acc, record| acc.combine(&Summary::of(record)))
}

pub fn summarize_by_apartment<'a, I>(records: I) -> BTreeMap<String, Summary>
where
    I: IntoIterator<Item = &'a ReservationRecord>,
{
    let mut groups: BTreeMap<String, Summary> = BTreeMap::new();
    for record in records {
        let one = Summary::of(record);
        match groups.get_mut(&record.apartment_label) {
            Some(acc) => *acc = acc.combine(&one),
            None => {
                groups.insert(record.apartment_label.clone(), Summary::zero().combine(&one));
            }
        }
    }
    groups
}

/// Merges two partial groupings. Labels present in only one side are kept
/// as they are.
pub fn merge(
    mut left: BTreeMap<String, Summary>,
    right: BTreeMap<String, Summary>,
) -> BTreeMap<String, Summary> {
    for (label, summary) in right {
        let merged = match left.get(&label) {
            Some(existing) => existing.combine(&summary),
            None => summary,
        };
        left.insert(label, merged);
    }
    left
}

/// Same result as [`summarize_by_apartment`], computed chunk by chunk.
pub fn summarize_partitioned(
    records: &[ReservationRecord],
    chunk_size: usize,
) -> BTreeMap<String, Summary> {
    records
        .chunks(chunk_size.max(1))
        .map(|chunk| summarize_by_apartment(chunk))
        .fold(BTreeMap::new(), merge)
}

pub fn apartment_summaries<'a, I>(records: I) -> Vec<ApartmentSummary>
where
    I: IntoIterator<Item = &'a ReservationRecord>,
{
    summarize_by_apartment(records)
        .into_iter()
        .map(|(apartment_label, totals)| ApartmentSummary {
            apartment_label,
            totals,
        })
        .collect()
}
