//! Capacity Ledger
//!
//! Per-slot accounting of how many tables of each type remain unbooked.
//! Built once per query; `remaining_at` answers capacity questions for each
//! candidate slot by replaying the day's bookings over the inventory.

use std::collections::HashMap;

use chrono::NaiveDate;
use chrono_tz::Tz;

use shared::models::{CapacitySettings, Reservation, TableType};

use crate::utils::time;

use super::evaluator;

/// Half-open interval on the minute-of-day axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteSpan {
    pub start: i64,
    pub end: i64,
}

impl MinuteSpan {
    /// Standard half-open interval overlap test
    pub fn overlaps(&self, other: &MinuteSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Remaining tables of one type at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRemaining {
    pub table_type_id: i64,
    pub seats: i32,
    pub remaining: i32,
}

/// Footprint of one existing booking on the query date
#[derive(Debug, Clone, Copy)]
struct Booking {
    span: MinuteSpan,
    party_size: i32,
}

/// Capacity ledger for one query date
#[derive(Debug, Clone)]
pub struct CapacityLedger {
    /// Inventory joined against known table types, seats ascending
    inventory: Vec<TypeRemaining>,
    /// Bookings on the business-local query date, in (start_at, id) order
    bookings: Vec<Booking>,
}

impl CapacityLedger {
    /// Build the ledger for `date`
    ///
    /// Inventory entries referencing an unknown or inactive table type are
    /// skipped and logged; one bad row must not block the whole computation.
    /// Reservations are filtered to rows that still occupy capacity and
    /// whose business-local date matches the query date.
    pub fn build(
        date: NaiveDate,
        capacity: &CapacitySettings,
        table_types: &[TableType],
        reservations: &[Reservation],
        tz: Tz,
    ) -> Self {
        let seats_by_type: HashMap<i64, i32> = table_types
            .iter()
            .filter(|t| t.is_active && t.seats > 0)
            .map(|t| (t.id, t.seats))
            .collect();

        let mut inventory = Vec::with_capacity(capacity.available_tables.len());
        for entry in &capacity.available_tables {
            match seats_by_type.get(&entry.table_type_id) {
                Some(&seats) => inventory.push(TypeRemaining {
                    table_type_id: entry.table_type_id,
                    seats,
                    remaining: entry.quantity.max(0),
                }),
                None => tracing::warn!(
                    table_type_id = entry.table_type_id,
                    table_type_name = %entry.table_type_name,
                    "capacity entry references an unknown table type, skipping"
                ),
            }
        }
        inventory.sort_by_key(|t| (t.seats, t.table_type_id));

        let mut dated: Vec<(i64, i64, Booking)> = reservations
            .iter()
            .filter(|r| r.occupies_capacity())
            .filter_map(|r| {
                let (local_date, local_time) = time::to_business_local(r.start_at, tz);
                if local_date != date {
                    return None;
                }
                let start = time::minute_of_day(local_time);
                let booking = Booking {
                    span: MinuteSpan {
                        start,
                        end: start + r.duration_minutes.max(0),
                    },
                    party_size: r.party_size,
                };
                Some((r.start_at, r.id, booking))
            })
            .collect();
        // Deterministic replay order so accounting matches the booking path
        dated.sort_by_key(|&(start_at, id, _)| (start_at, id));

        Self {
            inventory,
            bookings: dated.into_iter().map(|(_, _, b)| b).collect(),
        }
    }

    /// Remaining tables per type for the queried slot interval
    ///
    /// Counts never go negative: over-committed inventory drains to zero and
    /// the inconsistency is logged, not thrown.
    pub fn remaining_at(&self, slot: MinuteSpan) -> Vec<TypeRemaining> {
        let mut remaining = self.inventory.clone();
        for booking in self.bookings.iter().filter(|b| b.span.overlaps(&slot)) {
            evaluator::commit_assignment(&mut remaining, booking.party_size);
        }
        remaining
    }
}
