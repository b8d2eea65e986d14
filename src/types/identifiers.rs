//! Identifier types for the meeting room simulator
//!
//! This module contains the room number newtype used to address rooms inside a
//! facility and the UUID-based identifier attached to every stored booking.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Number of a meeting room within the facility
///
/// Configured rooms are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(pub u32);

impl RoomNumber {
    /// Create a room number
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Get the raw number
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for RoomNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl From<RoomNumber> for i64 {
    fn from(number: RoomNumber) -> Self {
        i64::from(number.0)
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RoomNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(RoomNumber)
            .map_err(|e| format!("Invalid room number '{}': {}", s, e))
    }
}

/// Unique identifier for a stored booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookingId(pub Uuid);

impl BookingId {
    /// Create a new random booking ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BKG_{}", self.0.simple())
    }
}

impl Serialize for BookingId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BookingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let raw = s.strip_prefix("BKG_").unwrap_or(&s);
        let uuid = Uuid::parse_str(raw).map_err(serde::de::Error::custom)?;
        Ok(BookingId(uuid))
    }
}
