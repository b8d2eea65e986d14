//! Air conditioning control

use super::{NotifierError, OccupancyNotifier};
use crate::types::RoomNumber;
use tracing::info;

/// Turns the AC on when a room becomes occupied and off when it empties
#[derive(Debug, Clone, Copy, Default)]
pub struct ClimateControl;

impl ClimateControl {
    /// Create a climate controller
    pub fn new() -> Self {
        Self
    }

    /// Action text for an occupancy state
    pub fn action(occupied: bool) -> &'static str {
        if occupied {
            "AC turned on."
        } else {
            "AC turned off."
        }
    }
}

impl OccupancyNotifier for ClimateControl {
    fn subsystem(&self) -> &'static str {
        "climate"
    }

    fn notify(&self, room: RoomNumber, occupied: bool) -> Result<(), NotifierError> {
        info!(room = %room, occupied, subsystem = self.subsystem(), "{}", Self::action(occupied));
        Ok(())
    }
}
