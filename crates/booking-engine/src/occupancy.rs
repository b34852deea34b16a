//! Daily occupancy and fully occupied dates.
//!
//! Bookings are first narrowed to the active ones overlapping the window,
//! then each date of the window counts the catalog rooms covered by at least
//! one of them. Cost is bounded by days × rooms × relevant bookings, which is
//! fine for a single hotel's catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{Booking, Room};
use crate::range::DateRange;

/// Occupancy of the catalog on a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOccupancy {
    pub date: NaiveDate,
    /// Catalog rooms held by at least one active booking on `date`.
    pub occupied_rooms: usize,
    pub total_rooms: usize,
}

impl DayOccupancy {
    /// Every room is taken. An empty catalog is never full.
    pub fn is_full(&self) -> bool {
        self.total_rooms > 0 && self.occupied_rooms == self.total_rooms
    }
}

/// Compute the occupancy of every date in `range`, ascending.
pub fn daily_occupancy(rooms: &[Room], bookings: &[Booking], range: &DateRange) -> Vec<DayOccupancy> {
    let relevant: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.is_active && b.range().overlaps(range))
        .collect();
    let total_rooms = rooms.len();

    range
        .days()
        .map(|date| {
            let occupied_rooms = rooms
                .iter()
                .filter(|room| {
                    relevant
                        .iter()
                        .any(|b| b.room_id == room.id && b.covers(date))
                })
                .count();
            DayOccupancy {
                date,
                occupied_rooms,
                total_rooms,
            }
        })
        .collect()
}

/// Return the dates in `range` on which every catalog room is booked.
///
/// Ascending, without duplicates. An empty catalog yields no dates rather
/// than every date.
pub fn fully_occupied_dates(rooms: &[Room], bookings: &[Booking], range: &DateRange) -> Vec<NaiveDate> {
    if rooms.is_empty() {
        return Vec::new();
    }

    daily_occupancy(rooms, bookings, range)
        .into_iter()
        .filter(DayOccupancy::is_full)
        .map(|day| day.date)
        .collect()
}
