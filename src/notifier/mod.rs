//! Occupancy notification
//!
//! Rooms forward every occupancy transition to the environment subsystems
//! attached to them. Each subsystem implements [`OccupancyNotifier`]; the
//! built-in ones are [`ClimateControl`] and [`LightingControl`].
//!
//! Notifiers are invoked synchronously in registration order. A notifier error
//! is returned to the room, which hands it straight back to its caller rather
//! than swallowing it: a broken environmental control must be visible.
//!
//! # Usage Example
//!
//! ```rust
//! use smart_office_facility::notifier::*;
//! use smart_office_facility::types::{NotifierKind, RoomNumber};
//!
//! let lights = NotifierKind::Lighting.build();
//! assert_eq!(lights.subsystem(), "lighting");
//! lights.notify(RoomNumber::new(1), true).unwrap();
//! ```

pub mod climate;
pub mod lighting;

pub use climate::ClimateControl;
pub use lighting::LightingControl;

use crate::types::{NotifierKind, RoomNumber};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// A sink reacting to occupancy transitions of a room
pub trait OccupancyNotifier: Send + Sync + fmt::Debug {
    /// Name of the controlled subsystem
    fn subsystem(&self) -> &'static str;

    /// Handle an occupancy change for the given room
    fn notify(&self, room: RoomNumber, occupied: bool) -> Result<(), NotifierError>;
}

/// Errors raised by environment subsystems
#[derive(Debug, Error)]
pub enum NotifierError {
    /// The device could not carry out the requested action
    #[error("{subsystem} failed to handle occupancy change for room {room}: {reason}")]
    DeviceFault {
        /// Subsystem that failed
        subsystem: &'static str,
        /// Room whose occupancy changed
        room: RoomNumber,
        /// Device-provided reason
        reason: String,
    },
}

/// Shared handle to a notifier
pub type SharedNotifier = Arc<dyn OccupancyNotifier>;

impl NotifierKind {
    /// Build the built-in notifier for this kind
    pub fn build(self) -> SharedNotifier {
        match self {
            NotifierKind::Climate => Arc::new(ClimateControl::new()),
            NotifierKind::Lighting => Arc::new(LightingControl::new()),
        }
    }
}

/// Build notifiers for a list of kinds, preserving order
pub fn build_notifiers(kinds: &[NotifierKind]) -> Vec<SharedNotifier> {
    kinds.iter().map(|kind| kind.build()).collect()
}
