//! `AvailabilityManager`: availability queries and booking admission over
//! injected collaborators.
//!
//! The manager is stateless. Every call re-reads the catalog and the store,
//! validates its date range against the clock, then runs the pure algorithms
//! from [`crate::availability`] and [`crate::occupancy`].
//!
//! Admission is a read followed by a single append. The manager does not make
//! that sequence atomic: if callers run admissions concurrently, the store has
//! to provide isolation.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::availability;
use crate::error::{BookingError, Result};
use crate::model::{BookingRequest, NewBooking, RoomId};
use crate::occupancy::{self, DayOccupancy};
use crate::range::{validate_range, DateRange};
use crate::store::{BookingStore, Clock, RoomCatalog, SystemClock};

/// Answers availability questions and admits bookings.
#[derive(Debug, Clone)]
pub struct AvailabilityManager<B, R, C = SystemClock> {
    bookings: B,
    rooms: R,
    clock: C,
}

impl<B: BookingStore, R: RoomCatalog> AvailabilityManager<B, R> {
    /// Build a manager that takes "today" from the system clock.
    pub fn new(bookings: B, rooms: R) -> Self {
        Self::with_clock(bookings, rooms, SystemClock)
    }
}

impl<B: BookingStore, R: RoomCatalog, C: Clock> AvailabilityManager<B, R, C> {
    /// Build a manager that takes "today" from `clock`.
    pub fn with_clock(bookings: B, rooms: R, clock: C) -> Self {
        Self {
            bookings,
            rooms,
            clock,
        }
    }

    fn validate(&self, start: NaiveDate, end: NaiveDate) -> Result<DateRange> {
        validate_range(start, end, self.clock.today())
    }

    /// Find the first room, in catalog order, free over `[start, end]`.
    ///
    /// Returns `Ok(None)` when every room is taken.
    ///
    /// # Errors
    /// Returns `BookingError::InvalidRange` if `start` is not in the future or
    /// `end` is before `start`, and `BookingError::Store` if a collaborator
    /// fails.
    pub fn find_available_room(&self, start: NaiveDate, end: NaiveDate) -> Result<Option<RoomId>> {
        let range = self.validate(start, end)?;
        let rooms = self.rooms.get_all()?;
        let bookings = self.bookings.get_all()?;

        let found = availability::find_available_room(&rooms, &bookings, &range);
        debug!(%start, %end, room = ?found, "find_available_room");
        Ok(found)
    }

    /// Every room free over `[start, end]`, in catalog order.
    ///
    /// # Errors
    /// Same as [`Self::find_available_room`].
    pub fn find_available_rooms(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<RoomId>> {
        let range = self.validate(start, end)?;
        let rooms = self.rooms.get_all()?;
        let bookings = self.bookings.get_all()?;

        let found = availability::find_available_rooms(&rooms, &bookings, &range);
        debug!(%start, %end, count = found.len(), "find_available_rooms");
        Ok(found)
    }

    /// Whether `room_id` has no active booking overlapping `[start, end]`.
    ///
    /// The room is not looked up in the catalog.
    ///
    /// # Errors
    /// Same as [`Self::find_available_room`].
    pub fn is_room_available(&self, room_id: RoomId, start: NaiveDate, end: NaiveDate) -> Result<bool> {
        let range = self.validate(start, end)?;
        let bookings = self.bookings.get_all()?;
        Ok(availability::is_room_available(room_id, &bookings, &range))
    }

    /// Dates in `[start, end]` on which every catalog room is booked, ascending.
    ///
    /// # Errors
    /// Same as [`Self::find_available_room`].
    pub fn get_fully_occupied_dates(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
        let range = self.validate(start, end)?;
        let rooms = self.rooms.get_all()?;
        let bookings = self.bookings.get_all()?;

        let dates = occupancy::fully_occupied_dates(&rooms, &bookings, &range);
        debug!(%start, %end, count = dates.len(), "get_fully_occupied_dates");
        Ok(dates)
    }

    /// Occupancy of every date in `[start, end]`, ascending.
    ///
    /// # Errors
    /// Same as [`Self::find_available_room`].
    pub fn get_occupancy(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DayOccupancy>> {
        let range = self.validate(start, end)?;
        let rooms = self.rooms.get_all()?;
        let bookings = self.bookings.get_all()?;
        Ok(occupancy::daily_occupancy(&rooms, &bookings, &range))
    }

    /// Admit `candidate` and persist it as an active booking.
    ///
    /// Checks run in order and the first failure wins:
    ///
    /// 1. an empty candidate is an error;
    /// 2. the dates must pass the range validator;
    /// 3. a negative room reference ([`crate::NO_ROOM`]) is rejected with
    ///    `Ok(false)` and nothing is stored;
    /// 4. a room already held by an active booking overlapping the dates is
    ///    rejected with `Ok(false)` and nothing is stored.
    ///
    /// Non-negative room ids are not looked up in the catalog.
    ///
    /// # Errors
    /// Returns `BookingError::InvalidBooking` for an empty candidate,
    /// `BookingError::InvalidRange` for a bad date range, and
    /// `BookingError::Store` if the store fails to persist.
    pub fn create_booking(&self, candidate: impl Into<BookingRequest>) -> Result<bool> {
        let candidate = candidate.into();
        if candidate.is_empty() {
            return Err(BookingError::InvalidBooking(
                "booking candidate is empty".to_string(),
            ));
        }

        let range = self.validate(candidate.start_date, candidate.end_date)?;

        if candidate.room_id < 0 {
            debug!(room = candidate.room_id, "booking rejected: no room");
            return Ok(false);
        }

        let bookings = self.bookings.get_all()?;
        if !availability::is_room_available(candidate.room_id, &bookings, &range) {
            warn!(
                room = candidate.room_id,
                start = %candidate.start_date,
                end = %candidate.end_date,
                "booking rejected: room already booked"
            );
            return Ok(false);
        }

        let stored = self.bookings.add(NewBooking::from(candidate))?;
        info!(
            id = stored.id,
            room = stored.room_id,
            customer = stored.customer_id,
            start = %stored.start_date,
            end = %stored.end_date,
            "booking created"
        );
        Ok(true)
    }
}
