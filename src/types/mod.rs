//! Core types and identifiers for the meeting room simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulator.
//!
//! # Overview
//!
//! - **Identifiers**: room numbers and UUID-based booking identifiers
//! - **Enums**: occupancy and booking states, notifier kinds
//! - **Configuration**: facility configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use smart_office_facility::types::*;
//!
//! let room = RoomNumber::new(2);
//! assert_eq!(room.to_string(), "2");
//!
//! let config = FacilityConfig {
//!     initial_room_count: Some(3),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
