//! Value types for rooms and bookings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::range::DateRange;

/// Identity of a room in the catalog.
pub type RoomId = i32;

/// Identity of a booking, assigned by the booking store.
pub type BookingId = i32;

/// Out-of-band room reference meaning "no room".
pub const NO_ROOM: RoomId = -1;

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Free-form text, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Room {
    pub fn new(id: RoomId) -> Self {
        Self {
            id,
            description: None,
        }
    }

    pub fn with_description(id: RoomId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: Some(description.into()),
        }
    }
}

/// A stored booking of one room over an inclusive range of calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub customer_id: i32,
    pub room_id: RoomId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Inactive bookings are kept but ignored by every availability query.
    pub is_active: bool,
}

impl Booking {
    /// The booked dates as an inclusive range.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// True if this booking is active and holds `room_id` on at least one
    /// date of `range`.
    pub fn blocks(&self, room_id: RoomId, range: &DateRange) -> bool {
        self.is_active && self.room_id == room_id && self.range().overlaps(range)
    }

    /// True if this booking is active and holds its room on `date`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.is_active && self.range().contains(date)
    }
}

/// A booking candidate offered for admission.
///
/// Carries no identity and no active flag: the store assigns the former and
/// admission sets the latter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub customer_id: i32,
    pub room_id: RoomId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl BookingRequest {
    pub fn new(customer_id: i32, room_id: RoomId, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            customer_id,
            room_id,
            start_date,
            end_date,
        }
    }

    /// A request with every field at its default value carries no booking.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<Booking> for BookingRequest {
    fn from(booking: Booking) -> Self {
        Self {
            customer_id: booking.customer_id,
            room_id: booking.room_id,
            start_date: booking.start_date,
            end_date: booking.end_date,
        }
    }
}

/// A booking that passed admission and waits for the store to assign its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub customer_id: i32,
    pub room_id: RoomId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

impl NewBooking {
    /// Attach a store-assigned identity.
    pub fn with_id(self, id: BookingId) -> Booking {
        Booking {
            id,
            customer_id: self.customer_id,
            room_id: self.room_id,
            start_date: self.start_date,
            end_date: self.end_date,
            is_active: self.is_active,
        }
    }
}

impl From<BookingRequest> for NewBooking {
    fn from(request: BookingRequest) -> Self {
        Self {
            customer_id: request.customer_id,
            room_id: request.room_id,
            start_date: request.start_date,
            end_date: request.end_date,
            is_active: true,
        }
    }
}
