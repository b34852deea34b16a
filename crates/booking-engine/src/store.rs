//! Collaborators consumed by the engine: room catalog, booking store, clock.
//!
//! The engine owns none of the data it reasons about. Each query reads the
//! full current state through these traits, with no caching between calls.
//! In-memory implementations are provided for tests and for front ends that
//! load their data up front.

use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDate};

use crate::error::{BookingError, Result};
use crate::model::{Booking, NewBooking, Room};

/// Source of the complete room catalog.
pub trait RoomCatalog {
    /// Every room, in an order that is stable for the duration of a query.
    ///
    /// # Errors
    /// Returns `BookingError::Store` if the catalog cannot be read.
    fn get_all(&self) -> Result<Vec<Room>>;
}

/// Source and sink of bookings.
pub trait BookingStore {
    /// Every booking, active and inactive alike.
    ///
    /// # Errors
    /// Returns `BookingError::Store` if the store cannot be read.
    fn get_all(&self) -> Result<Vec<Booking>>;

    /// Persist an admitted booking and return it with its assigned id.
    ///
    /// # Errors
    /// Returns `BookingError::Store` if the booking cannot be persisted.
    fn add(&self, booking: NewBooking) -> Result<Booking>;
}

/// Source of "today" as a calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

impl<T: RoomCatalog + ?Sized> RoomCatalog for &T {
    fn get_all(&self) -> Result<Vec<Room>> {
        (**self).get_all()
    }
}

impl<T: RoomCatalog + ?Sized> RoomCatalog for Arc<T> {
    fn get_all(&self) -> Result<Vec<Room>> {
        (**self).get_all()
    }
}

impl<T: BookingStore + ?Sized> BookingStore for &T {
    fn get_all(&self) -> Result<Vec<Booking>> {
        (**self).get_all()
    }

    fn add(&self, booking: NewBooking) -> Result<Booking> {
        (**self).add(booking)
    }
}

impl<T: BookingStore + ?Sized> BookingStore for Arc<T> {
    fn get_all(&self) -> Result<Vec<Booking>> {
        (**self).get_all()
    }

    fn add(&self, booking: NewBooking) -> Result<Booking> {
        (**self).add(booking)
    }
}

/// The local calendar date of the machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A room catalog held in memory, enumerated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoomCatalog {
    rooms: Vec<Room>,
}

impl InMemoryRoomCatalog {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }
}

impl RoomCatalog for InMemoryRoomCatalog {
    fn get_all(&self) -> Result<Vec<Room>> {
        Ok(self.rooms.clone())
    }
}

/// A booking store held in memory.
///
/// Ids are assigned as one past the highest id seen, starting at 1.
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    bookings: Mutex<Vec<Booking>>,
}

impl InMemoryBookingStore {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: Mutex::new(bookings),
        }
    }

    /// Copy of every stored booking, in insertion order.
    ///
    /// # Errors
    /// Returns `BookingError::Store` if the lock is poisoned.
    pub fn snapshot(&self) -> Result<Vec<Booking>> {
        self.get_all()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Booking>>> {
        self.bookings
            .lock()
            .map_err(|_| BookingError::Store("booking store lock poisoned".to_string()))
    }
}

impl BookingStore for InMemoryBookingStore {
    fn get_all(&self) -> Result<Vec<Booking>> {
        Ok(self.lock()?.clone())
    }

    fn add(&self, booking: NewBooking) -> Result<Booking> {
        let mut bookings = self.lock()?;
        let id = bookings.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let stored = booking.with_id(id);
        bookings.push(stored.clone());
        Ok(stored)
    }
}
