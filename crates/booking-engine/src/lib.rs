//! # booking-engine
//!
//! Deterministic room availability and booking admission for a hotel.
//!
//! The engine answers three questions over a catalog of rooms and a set of
//! existing bookings: which room is free for a date range, which dates in a
//! window are fully occupied, and whether a new booking may be admitted.
//! Storage is not part of the engine. Rooms and bookings are read through the
//! [`RoomCatalog`] and [`BookingStore`] traits, so any backing store can be
//! plugged in.
//!
//! ## Modules
//!
//! - [`model`] — Room, Booking and BookingRequest value types
//! - [`range`] — Inclusive date ranges and the range validator
//! - [`availability`] — Per-room availability and first-free-room selection
//! - [`occupancy`] — Daily occupancy and fully occupied dates
//! - [`store`] — Collaborator traits, clocks and in-memory implementations
//! - [`manager`] — `AvailabilityManager`, the entry point tying it together
//! - [`error`] — Error types

pub mod availability;
pub mod error;
pub mod manager;
pub mod model;
pub mod occupancy;
pub mod range;
pub mod store;

pub use availability::{find_available_room, find_available_rooms, is_room_available};
pub use error::BookingError;
pub use manager::AvailabilityManager;
pub use model::{Booking, BookingId, BookingRequest, NewBooking, Room, RoomId, NO_ROOM};
pub use occupancy::{daily_occupancy, fully_occupied_dates, DayOccupancy};
pub use range::{validate_range, DateRange};
pub use store::{
    BookingStore, Clock, FixedClock, InMemoryBookingStore, InMemoryRoomCatalog, RoomCatalog,
    SystemClock,
};
