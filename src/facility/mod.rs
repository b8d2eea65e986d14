//! Facility and room management
//!
//! This module manages the meeting rooms of the office: the registry that owns
//! them, each room's occupancy and booking state, and the booking value type.
//!
//! # Overview
//!
//! - **Facility**: owns all rooms, keyed by room number
//! - **Room**: occupancy and booking state machine with notifier dispatch
//! - **Booking**: a single reserved time slot
//!
//! # Usage Example
//!
//! ```rust
//! use smart_office_facility::facility::*;
//! use smart_office_facility::types::RoomNumber;
//!
//! let mut facility = Facility::new();
//! facility.configure(3).unwrap();
//! facility.set_capacity(RoomNumber::new(2), 8).unwrap();
//!
//! let room = facility.get_room_mut(RoomNumber::new(2)).unwrap();
//! room.add_occupants(3).unwrap();
//! assert!(room.is_occupied());
//! ```

pub mod booking;
pub mod registry;
pub mod room;

// Re-export all public types for convenience
pub use booking::{Booking, TIME_FORMAT};
pub use registry::Facility;
pub use room::{OccupancyReport, ReleaseNotice, Room, RoomPolicy};
