//! Enumeration types for the meeting room simulator
//!
//! This module contains the conceptual room states (occupancy and booking) and
//! the kinds of environment subsystems that react to occupancy changes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Occupancy state of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccupancyState {
    /// No occupants registered
    Unoccupied,
    /// At least one occupant registered
    Occupied,
}

impl OccupancyState {
    /// Derive the state from an occupant count
    pub fn from_count(occupants: u32) -> Self {
        if occupants > 0 {
            OccupancyState::Occupied
        } else {
            OccupancyState::Unoccupied
        }
    }
}

impl fmt::Display for OccupancyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OccupancyState::Unoccupied => write!(f, "Unoccupied"),
            OccupancyState::Occupied => write!(f, "Occupied"),
        }
    }
}

/// Booking state of a room, orthogonal to occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingState {
    /// No booking held
    Free,
    /// A single booking is held
    Booked,
}

impl fmt::Display for BookingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingState::Free => write!(f, "Free"),
            BookingState::Booked => write!(f, "Booked"),
        }
    }
}

/// Environment subsystems that can be attached to rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifierKind {
    /// Air conditioning
    Climate,
    /// Room lighting
    Lighting,
}

impl fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifierKind::Climate => write!(f, "climate"),
            NotifierKind::Lighting => write!(f, "lighting"),
        }
    }
}

impl FromStr for NotifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "climate" | "ac" => Ok(NotifierKind::Climate),
            "lighting" | "lights" => Ok(NotifierKind::Lighting),
            _ => Err(format!("Unknown notifier kind: {}", s)),
        }
    }
}
