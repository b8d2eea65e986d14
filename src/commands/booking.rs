//! Booking and cancellation commands

use super::RoomCommand;
use crate::facility::{Booking, Room, TIME_FORMAT};
use crate::simulation::{FacilityError, FacilityResult};
use crate::types::RoomNumber;
use chrono::NaiveTime;
use tracing::info;

/// Reserve a time slot in a room
///
/// A room holds at most one booking; any existing booking is a conflict,
/// whatever its time range.
#[derive(Debug)]
pub struct BookRoomCommand<'a> {
    room: &'a mut Room,
    start_time: NaiveTime,
    duration_minutes: i64,
}

impl<'a> BookRoomCommand<'a> {
    /// Create a booking command for a room
    pub fn new(room: &'a mut Room, start_time: NaiveTime, duration_minutes: i64) -> Self {
        Self { room, start_time, duration_minutes }
    }
}

impl RoomCommand for BookRoomCommand<'_> {
    fn describe(&self) -> String {
        format!(
            "block room {} {} {}",
            self.room.number(),
            self.start_time.format(TIME_FORMAT),
            self.duration_minutes
        )
    }

    fn room(&self) -> RoomNumber {
        self.room.number()
    }

    fn execute(&mut self) -> FacilityResult<String> {
        let number = self.room.number();
        if self.room.booking().is_some() {
            return Err(FacilityError::AlreadyBooked(number));
        }

        let booking = Booking::new(self.start_time, self.duration_minutes)?;
        let message = format!(
            "Room {} booked from {} for {} minutes.",
            number,
            booking.formatted_start(),
            booking.duration_minutes
        );

        info!(room = %number, booking = %booking.id, start = %booking.formatted_start(), "Room booked");
        self.room.set_booking(booking);
        Ok(message)
    }
}

/// Cancel the booking held by a room
#[derive(Debug)]
pub struct CancelBookingCommand<'a> {
    room: &'a mut Room,
}

impl<'a> CancelBookingCommand<'a> {
    /// Create a cancellation command for a room
    pub fn new(room: &'a mut Room) -> Self {
        Self { room }
    }
}

impl RoomCommand for CancelBookingCommand<'_> {
    fn describe(&self) -> String {
        format!("cancel room {}", self.room.number())
    }

    fn room(&self) -> RoomNumber {
        self.room.number()
    }

    fn execute(&mut self) -> FacilityResult<String> {
        let number = self.room.number();
        let booking = self.room.take_booking().ok_or(FacilityError::NotBooked(number))?;

        info!(room = %number, booking = %booking.id, "Booking cancelled");
        Ok(format!("Booking for Room {} cancelled successfully.", number))
    }
}
