//! Error types and handling
//!
//! This module contains the error taxonomy for facility operations. Every
//! variant renders as the user-facing result text, so callers at the command
//! boundary can report an error by displaying it.

use crate::notifier::NotifierError;
use crate::types::RoomNumber;
use thiserror::Error;

/// Errors that can occur while operating on the facility
#[derive(Debug, Error)]
pub enum FacilityError {
    /// Referenced room does not exist (carries the number as given)
    #[error("Room {0} does not exist.")]
    RoomNotFound(i64),

    /// Room count must be positive
    #[error("Invalid room count {0}. Please enter a valid positive number.")]
    InvalidRoomCount(i64),

    /// Capacity must be positive
    #[error("Invalid capacity. Please enter a valid positive number.")]
    InvalidCapacity(i64),

    /// Booking duration must be positive
    #[error("Invalid booking duration {0}. Please enter a valid number of minutes.")]
    InvalidDuration(i64),

    /// Room already holds a booking
    #[error("Room {0} is already booked during this time. Cannot book.")]
    AlreadyBooked(RoomNumber),

    /// Room holds no booking to cancel
    #[error("Room {0} is not booked. Cannot cancel booking.")]
    NotBooked(RoomNumber),

    /// An environment subsystem failed while handling an occupancy change
    #[error("Environment control failure: {0}")]
    Notifier(#[from] NotifierError),
}

/// Broad classification of facility errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Referenced entity does not exist
    NotFound,
    /// Caller supplied an unusable value
    InvalidArgument,
    /// Operation conflicts with current room state
    Conflict,
    /// An attached device failed
    DeviceFailure,
}

impl FacilityError {
    /// Get the error classification
    pub fn kind(&self) -> ErrorKind {
        match self {
            FacilityError::RoomNotFound(_) => ErrorKind::NotFound,
            FacilityError::InvalidRoomCount(_)
            | FacilityError::InvalidCapacity(_)
            | FacilityError::InvalidDuration(_) => ErrorKind::InvalidArgument,
            FacilityError::AlreadyBooked(_) | FacilityError::NotBooked(_) => ErrorKind::Conflict,
            FacilityError::Notifier(_) => ErrorKind::DeviceFailure,
        }
    }

    /// Get the error category label used in logs
    pub fn category(&self) -> &'static str {
        match self.kind() {
            ErrorKind::NotFound => "Not Found",
            ErrorKind::InvalidArgument => "Invalid Argument",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::DeviceFailure => "Device Failure",
        }
    }
}

/// Result type for facility operations
pub type FacilityResult<T> = Result<T, FacilityError>;
