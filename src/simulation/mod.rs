//! Session plumbing for the simulator
//!
//! This module contains what sits around the facility core: the error
//! taxonomy, time sources, logging setup, and the text command router.
//!
//! # Overview
//!
//! - **FacilityError**: every failure as describable result text
//! - **Clock**: system and manual time sources
//! - **LoggingConfig**: tracing subscriber setup
//! - **CommandRouter**: parses command lines and drives the facility
//!
//! # Usage Example
//!
//! ```rust
//! use smart_office_facility::facility::Facility;
//! use smart_office_facility::simulation::*;
//!
//! let mut router = CommandRouter::new(Facility::new());
//! router.process_input("config room count 3");
//! router.process_input("add occupant 2 3");
//! assert_eq!(router.process_input("room status 2"), "Room 2 status: Occupied");
//! ```

pub mod clock;
pub mod error;
pub mod logging;
pub mod router;

// Re-export all public types for convenience
pub use clock::*;
pub use error::*;
pub use logging::*;
pub use router::*;
