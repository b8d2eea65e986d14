//! Room lighting control

use super::{NotifierError, OccupancyNotifier};
use crate::types::RoomNumber;
use tracing::info;

/// Switches the lights with room occupancy
#[derive(Debug, Clone, Copy, Default)]
pub struct LightingControl;

impl LightingControl {
    /// Create a lighting controller
    pub fn new() -> Self {
        Self
    }

    /// Action text for an occupancy state
    pub fn action(occupied: bool) -> &'static str {
        if occupied {
            "Lights turned on."
        } else {
            "Lights turned off."
        }
    }
}

impl OccupancyNotifier for LightingControl {
    fn subsystem(&self) -> &'static str {
        "lighting"
    }

    fn notify(&self, room: RoomNumber, occupied: bool) -> Result<(), NotifierError> {
        info!(room = %room, occupied, subsystem = self.subsystem(), "{}", Self::action(occupied));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighting_actions() {
        assert_eq!(LightingControl::action(true), "Lights turned on.");
        assert_eq!(LightingControl::action(false), "Lights turned off.");
        assert!(LightingControl::new().notify(RoomNumber(3), true).is_ok());
    }
}
