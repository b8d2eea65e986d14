//! Room bookings
//!
//! A booking is a single reserved time slot, a start time of day plus a
//! duration in minutes, held by exactly one room.

use crate::simulation::{FacilityError, FacilityResult};
use crate::types::BookingId;
use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

/// Format used for booking start times on input and output
pub const TIME_FORMAT: &str = "%H:%M";

/// A reserved time slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking
    pub id: BookingId,
    /// Time of day the slot starts
    pub start_time: NaiveTime,
    /// Length of the slot in minutes (always positive)
    pub duration_minutes: u32,
}

impl Booking {
    /// Create a booking, rejecting non-positive durations
    pub fn new(start_time: NaiveTime, duration_minutes: i64) -> FacilityResult<Self> {
        let duration_minutes = u32::try_from(duration_minutes)
            .ok()
            .filter(|&minutes| minutes > 0)
            .ok_or(FacilityError::InvalidDuration(duration_minutes))?;

        Ok(Self { id: BookingId::new(), start_time, duration_minutes })
    }

    /// Parse an `HH:MM` start time
    pub fn parse_start_time(input: &str) -> Result<NaiveTime, chrono::ParseError> {
        NaiveTime::parse_from_str(input, TIME_FORMAT)
    }

    /// Start time formatted as `HH:MM`
    pub fn formatted_start(&self) -> String {
        self.start_time.format(TIME_FORMAT).to_string()
    }

    /// Time of day the slot ends (wraps past midnight)
    pub fn end_time(&self) -> NaiveTime {
        self.start_time + Duration::minutes(i64::from(self.duration_minutes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_booking_creation() {
        let booking = Booking::new(time(14, 0), 30).unwrap();
        assert_eq!(booking.start_time, time(14, 0));
        assert_eq!(booking.duration_minutes, 30);
        assert_eq!(booking.formatted_start(), "14:00");
        assert_eq!(booking.end_time(), time(14, 30));
    }

    #[test]
    fn test_booking_rejects_non_positive_duration() {
        assert!(matches!(
            Booking::new(time(9, 0), 0),
            Err(FacilityError::InvalidDuration(0))
        ));
        assert!(matches!(
            Booking::new(time(9, 0), -15),
            Err(FacilityError::InvalidDuration(-15))
        ));
    }

    #[test]
    fn test_end_time_wraps_past_midnight() {
        let booking = Booking::new(time(23, 30), 45).unwrap();
        assert_eq!(booking.end_time(), time(0, 15));
    }

    #[test]
    fn test_parse_start_time() {
        assert_eq!(Booking::parse_start_time("09:05").unwrap(), time(9, 5));
        assert_eq!(Booking::parse_start_time("9:05").unwrap(), time(9, 5));
        assert!(Booking::parse_start_time("25:00").is_err());
        assert!(Booking::parse_start_time("noon").is_err());
        assert!(Booking::parse_start_time("14:00:00").is_err());
    }

    #[test]
    fn test_bookings_get_distinct_ids() {
        let a = Booking::new(time(10, 0), 15).unwrap();
        let b = Booking::new(time(10, 0), 15).unwrap();
        assert_ne!(a.id, b.id);
    }
}
