//! Booking commands
//!
//! Booking changes are expressed as first-class command values rather than
//! direct room method calls. Each command is built around the room it targets,
//! run through a [`CommandExecutor`], and leaves an entry in the executor's
//! audit history.
//!
//! # Usage Example
//!
//! ```rust
//! use smart_office_facility::commands::*;
//! use smart_office_facility::facility::Facility;
//! use smart_office_facility::types::RoomNumber;
//! use chrono::NaiveTime;
//!
//! let mut facility = Facility::new();
//! facility.configure(1).unwrap();
//! let mut executor = CommandExecutor::new();
//!
//! let room = facility.get_room_mut(RoomNumber::new(1)).unwrap();
//! let start = NaiveTime::from_hms_opt(14, 0, 0).unwrap();
//! let message = executor.execute(&mut BookRoomCommand::new(room, start, 30)).unwrap();
//! assert_eq!(message, "Room 1 booked from 14:00 for 30 minutes.");
//! ```

pub mod booking;
pub mod executor;

pub use booking::{BookRoomCommand, CancelBookingCommand};
pub use executor::{CommandExecutor, CommandRecord};

use crate::simulation::FacilityResult;
use crate::types::RoomNumber;
use std::fmt;

/// A booking operation against a single room
pub trait RoomCommand: fmt::Debug {
    /// Textual form of the command, for logs and audit records
    fn describe(&self) -> String;

    /// Room the command targets
    fn room(&self) -> RoomNumber;

    /// Apply the command, returning the result text or a describable error
    fn execute(&mut self) -> FacilityResult<String>;
}
