//! Smart Office Facility
//!
//! A meeting room management simulator: configure a fixed set of rooms, track
//! who is in them, switch the AC and lighting with occupancy, book and cancel
//! time slots, and release bookings for rooms that have been left vacant.
//!
//! # Overview
//!
//! The core is the [`Room`] state machine. Occupancy changes fire the room's
//! notifiers synchronously; booking changes go through command objects run by
//! a [`CommandExecutor`]; stale bookings are released when a room's status is
//! queried, never by a background timer.
//!
//! ## Quick Start
//!
//! ```rust
//! use smart_office_facility::*;
//!
//! let mut router = CommandRouter::new(Facility::new());
//!
//! router.process_input("config room count 3");
//! router.process_input("block room 1 14:00 30");
//! let reply = router.process_input("block room 1 15:00 15");
//! assert_eq!(reply, "Room 1 is already booked during this time. Cannot book.");
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, state enums, and configuration
//! - [`notifier`]: Environment subsystems reacting to occupancy
//! - [`facility`]: Facility registry, rooms, and bookings
//! - [`commands`]: Booking command objects and their executor
//! - [`simulation`]: Errors, clocks, logging, and command routing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Command   │    │  Facility   │    │    Room     │    │  Notifier   │
//! │   Router    │───►│  (registry) │───►│  (state)    │───►│ AC/Lighting │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//!        │                                     ▲
//!        │           ┌─────────────┐           │
//!        └──────────►│  Commands   │───────────┘
//!                    │ Book/Cancel │
//!                    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod commands;
pub mod facility;
pub mod notifier;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    BookingId, BookingState, CliArgs, ConfigError, ConfigValidationError, FacilityConfig,
    NotifierKind, OccupancyState, RoomNumber,
};

// Notifiers
pub use notifier::{ClimateControl, LightingControl, NotifierError, OccupancyNotifier, SharedNotifier};

// Facility types
pub use facility::{Booking, Facility, OccupancyReport, ReleaseNotice, Room, RoomPolicy};

// Booking commands
pub use commands::{BookRoomCommand, CancelBookingCommand, CommandExecutor, CommandRecord, RoomCommand};

// Session plumbing
pub use simulation::{
    BookingRequest, Clock, CommandRouter, ErrorKind, FacilityError, FacilityResult, LoggingConfig,
    ManualClock, ParsedCommand, SystemClock,
};
