//! Meeting room occupancy and booking state
//!
//! This module contains the [`Room`] state machine. A room is either
//! unoccupied or occupied, and independently either free or booked. Occupancy
//! changes are pushed to the attached notifiers; stale bookings are released
//! on demand by [`Room::check_automatic_release`].

use super::booking::Booking;
use crate::notifier::{NotifierError, SharedNotifier};
use crate::simulation::{Clock, FacilityResult};
use crate::types::{defaults, BookingState, FacilityConfig, OccupancyState, RoomNumber};
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Thresholds governing occupancy registration and automatic release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomPolicy {
    /// How long a booked room may stay vacant before the booking is released
    pub auto_release_after: Duration,
    /// Smallest batch of people that registers occupancy
    pub min_occupancy_batch: u32,
}

impl Default for RoomPolicy {
    fn default() -> Self {
        Self {
            auto_release_after: Duration::seconds(defaults::AUTO_RELEASE_AFTER_SECS as i64),
            min_occupancy_batch: defaults::MIN_OCCUPANCY_BATCH,
        }
    }
}

impl From<&FacilityConfig> for RoomPolicy {
    fn from(config: &FacilityConfig) -> Self {
        Self {
            auto_release_after: config.auto_release_after(),
            min_occupancy_batch: config.min_occupancy_batch,
        }
    }
}

/// Result of an occupancy update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyReport {
    /// Batch too small to register; nothing changed
    BelowThreshold {
        /// Room that was addressed
        room: RoomNumber,
    },
    /// Occupants were added
    Occupied {
        /// Room that was addressed
        room: RoomNumber,
        /// Occupant total after the update
        occupants: u32,
    },
    /// The last occupants left
    Vacated {
        /// Room that was addressed
        room: RoomNumber,
    },
    /// Occupants left but the room is still in use
    Remaining {
        /// Room that was addressed
        room: RoomNumber,
        /// Occupant total after the update
        occupants: u32,
    },
}

impl fmt::Display for OccupancyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OccupancyReport::BelowThreshold { room } => {
                write!(f, "Room {} occupancy insufficient to mark as occupied.", room)
            }
            OccupancyReport::Occupied { room, occupants } => write!(
                f,
                "Room {} is now occupied by {} persons. AC and lights turned on.",
                room, occupants
            ),
            OccupancyReport::Vacated { room } => {
                write!(f, "Room {} is now unoccupied. AC and lights turned off.", room)
            }
            OccupancyReport::Remaining { room, occupants } => {
                write!(f, "Room {} now has {} occupants.", room, occupants)
            }
        }
    }
}

/// A booking that was released because the room stayed vacant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotice {
    /// Room whose booking was released
    pub room: RoomNumber,
    /// The released booking
    pub booking: Booking,
}

impl fmt::Display for ReleaseNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Room {} is now unoccupied. Booking released. AC and lights off.", self.room)
    }
}

/// A meeting room
#[derive(Debug)]
pub struct Room {
    number: RoomNumber,
    capacity: u32,
    occupants: u32,
    booking: Option<Booking>,
    last_occupied_at: Option<DateTime<Utc>>,
    notifiers: Vec<SharedNotifier>,
    policy: RoomPolicy,
    clock: Arc<dyn Clock>,
}

impl Room {
    /// Create an empty, unbooked room with no capacity set and no notifiers
    pub fn new(number: RoomNumber, policy: RoomPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            number,
            capacity: 0,
            occupants: 0,
            booking: None,
            last_occupied_at: None,
            notifiers: Vec::new(),
            policy,
            clock,
        }
    }

    /// Create a room with the given notifiers attached
    pub fn with_notifiers(
        number: RoomNumber,
        policy: RoomPolicy,
        clock: Arc<dyn Clock>,
        notifiers: Vec<SharedNotifier>,
    ) -> Self {
        Self { notifiers, ..Self::new(number, policy, clock) }
    }

    /// Room number
    pub fn number(&self) -> RoomNumber {
        self.number
    }

    /// Maximum capacity (0 when unset)
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Current occupant count
    pub fn occupants(&self) -> u32 {
        self.occupants
    }

    /// Current booking, if any
    pub fn booking(&self) -> Option<&Booking> {
        self.booking.as_ref()
    }

    /// When occupants were last registered
    pub fn last_occupied_at(&self) -> Option<DateTime<Utc>> {
        self.last_occupied_at
    }

    /// Policy this room enforces
    pub fn policy(&self) -> RoomPolicy {
        self.policy
    }

    /// Attached notifiers in notification order
    pub fn notifiers(&self) -> &[SharedNotifier] {
        &self.notifiers
    }

    /// Attach another notifier after the existing ones
    pub fn register_notifier(&mut self, notifier: SharedNotifier) {
        debug!(room = %self.number, subsystem = notifier.subsystem(), "Registered notifier");
        self.notifiers.push(notifier);
    }

    pub(crate) fn set_capacity(&mut self, capacity: u32) {
        self.capacity = capacity;
    }

    pub(crate) fn set_booking(&mut self, booking: Booking) {
        self.booking = Some(booking);
    }

    pub(crate) fn take_booking(&mut self) -> Option<Booking> {
        self.booking.take()
    }

    /// Register a batch of arriving occupants
    ///
    /// Batches smaller than the policy minimum, negative ones included, are
    /// reported and ignored. Otherwise the count and last-occupied time are
    /// updated before the notifiers run, so a notifier failure leaves the new
    /// count in place.
    #[instrument(skip(self), fields(room = %self.number))]
    pub fn add_occupants(&mut self, count: i64) -> FacilityResult<OccupancyReport> {
        if count < i64::from(self.policy.min_occupancy_batch) {
            debug!(
                minimum = self.policy.min_occupancy_batch,
                "Occupancy batch below threshold, ignoring"
            );
            return Ok(OccupancyReport::BelowThreshold { room: self.number });
        }

        let count = u32::try_from(count).unwrap_or(u32::MAX);
        self.occupants = self.occupants.saturating_add(count);
        self.last_occupied_at = Some(self.clock.now());

        if self.capacity > 0 && self.occupants > self.capacity {
            warn!(
                occupants = self.occupants,
                capacity = self.capacity,
                "Room occupancy exceeds configured capacity"
            );
        }

        self.notify_observers(true)?;

        info!(occupants = self.occupants, "Room occupied");
        Ok(OccupancyReport::Occupied { room: self.number, occupants: self.occupants })
    }

    /// Register departing occupants; the count never drops below zero
    ///
    /// A negative count removes nobody.
    #[instrument(skip(self), fields(room = %self.number))]
    pub fn remove_occupants(&mut self, count: i64) -> FacilityResult<OccupancyReport> {
        let count = u32::try_from(count.max(0)).unwrap_or(u32::MAX);
        self.occupants = self.occupants.saturating_sub(count);

        if self.occupants == 0 {
            self.notify_observers(false)?;
            info!("Room vacated");
            return Ok(OccupancyReport::Vacated { room: self.number });
        }

        debug!(occupants = self.occupants, "Occupants left");
        Ok(OccupancyReport::Remaining { room: self.number, occupants: self.occupants })
    }

    /// Invoke every notifier in registration order, stopping at the first failure
    pub fn notify_observers(&self, occupied: bool) -> Result<(), NotifierError> {
        for notifier in &self.notifiers {
            notifier.notify(self.number, occupied).map_err(|e| {
                warn!(room = %self.number, subsystem = notifier.subsystem(), error = %e, "Notifier failed");
                e
            })?;
        }
        Ok(())
    }

    /// Whether anyone is in the room
    pub fn is_occupied(&self) -> bool {
        self.occupants > 0
    }

    /// Occupancy state
    pub fn occupancy_state(&self) -> OccupancyState {
        OccupancyState::from_count(self.occupants)
    }

    /// Booking state
    pub fn booking_state(&self) -> BookingState {
        if self.booking.is_some() {
            BookingState::Booked
        } else {
            BookingState::Free
        }
    }

    /// Plain status text
    pub fn status_line(&self) -> String {
        format!("Room {} status: {}", self.number, self.occupancy_state())
    }

    /// Release the booking of a room that has been vacant for too long
    ///
    /// Returns `None` when nothing changed. A booked room that has never been
    /// occupied keeps its booking.
    pub fn check_automatic_release(&mut self) -> Option<ReleaseNotice> {
        if self.is_occupied() || self.booking.is_none() {
            return None;
        }

        let last_occupied = self.last_occupied_at?;
        let vacant_for = self.clock.now() - last_occupied;
        if vacant_for <= self.policy.auto_release_after {
            debug!(
                room = %self.number,
                vacant_secs = vacant_for.num_seconds(),
                "Booked room vacant but within release threshold"
            );
            return None;
        }

        let booking = self.booking.take()?;
        info!(
            room = %self.number,
            booking = %booking.id,
            vacant_secs = vacant_for.num_seconds(),
            "Booking released after vacancy"
        );
        Some(ReleaseNotice { room: self.number, booking })
    }
}
