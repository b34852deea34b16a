//! Room availability over a date range.
//!
//! A room is available when no active booking referencing it overlaps the
//! requested range (boundaries included). Rooms are scanned in the order the
//! catalog yields them, so the same inputs always select the same room.

use crate::model::{Booking, Room, RoomId};
use crate::range::DateRange;

/// True if no active booking for `room_id` overlaps `range`.
pub fn is_room_available(room_id: RoomId, bookings: &[Booking], range: &DateRange) -> bool {
    !bookings.iter().any(|b| b.blocks(room_id, range))
}

/// Return the first room, in catalog order, that is available over `range`.
///
/// `None` means every room has a conflicting active booking (or the catalog
/// is empty). That is an ordinary answer, not an error.
pub fn find_available_room(rooms: &[Room], bookings: &[Booking], range: &DateRange) -> Option<RoomId> {
    rooms
        .iter()
        .find(|room| is_room_available(room.id, bookings, range))
        .map(|room| room.id)
}

/// Return every room available over `range`, in catalog order.
pub fn find_available_rooms(rooms: &[Room], bookings: &[Booking], range: &DateRange) -> Vec<RoomId> {
    rooms
        .iter()
        .filter(|room| is_room_available(room.id, bookings, range))
        .map(|room| room.id)
        .collect()
}
