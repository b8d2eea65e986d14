//! Facility room registry
//!
//! The [`Facility`] owns every room, keyed by room number. There is one
//! facility per session; callers receive it by reference instead of reaching
//! for a global, which keeps each test free to build its own.

use super::room::{Room, RoomPolicy};
use crate::notifier::{build_notifiers, SharedNotifier};
use crate::simulation::{Clock, FacilityError, FacilityResult, SystemClock};
use crate::types::{defaults, FacilityConfig, NotifierKind, RoomNumber};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// The set of meeting rooms in the office
#[derive(Debug)]
pub struct Facility {
    rooms: BTreeMap<RoomNumber, Room>,
    policy: RoomPolicy,
    notifiers: Vec<SharedNotifier>,
    clock: Arc<dyn Clock>,
}

impl Default for Facility {
    fn default() -> Self {
        Self::new()
    }
}

impl Facility {
    /// Create an empty facility with the default policy, system clock, and
    /// climate plus lighting control on every room
    pub fn new() -> Self {
        Self {
            rooms: BTreeMap::new(),
            policy: RoomPolicy::default(),
            notifiers: build_notifiers(&[NotifierKind::Climate, NotifierKind::Lighting]),
            clock: Arc::new(SystemClock),
        }
    }

    /// Create an empty facility from configuration
    ///
    /// `initial_room_count` is not applied here; see [`Facility::configure`].
    pub fn from_config(config: &FacilityConfig) -> Self {
        Self {
            policy: RoomPolicy::from(config),
            notifiers: build_notifiers(&config.notifiers),
            ..Self::new()
        }
    }

    /// Use a different time source for rooms created from now on
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Use a different room policy for rooms created from now on
    pub fn with_policy(mut self, policy: RoomPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Attach these notifiers (instead of the defaults) to rooms created from now on
    pub fn with_notifiers(mut self, notifiers: Vec<SharedNotifier>) -> Self {
        self.notifiers = notifiers;
        self
    }

    /// Replace every room with `room_count` fresh rooms numbered from 1
    ///
    /// Counts that are not positive or exceed [`defaults::MAX_ROOM_COUNT`] are
    /// rejected and leave the current rooms untouched.
    pub fn configure(&mut self, room_count: i64) -> FacilityResult<String> {
        let count = u32::try_from(room_count)
            .ok()
            .filter(|&count| count > 0 && count <= defaults::MAX_ROOM_COUNT)
            .ok_or(FacilityError::InvalidRoomCount(room_count))?;

        if !self.rooms.is_empty() {
            warn!(previous = self.rooms.len(), "Reconfiguring facility, discarding existing rooms");
        }

        self.rooms = (1..=count)
            .map(RoomNumber::new)
            .map(|number| {
                let room = Room::with_notifiers(
                    number,
                    self.policy,
                    Arc::clone(&self.clock),
                    self.notifiers.clone(),
                );
                (number, room)
            })
            .collect();

        info!(rooms = count, "Facility configured");

        let names: Vec<String> = self.rooms.keys().map(|number| format!("Room {}", number)).collect();
        Ok(format!("Office configured with {} meeting rooms: {}", count, names.join(", ")))
    }

    /// Set the maximum capacity of a room
    pub fn set_capacity(&mut self, room_number: RoomNumber, capacity: i64) -> FacilityResult<String> {
        let room = self
            .rooms
            .get_mut(&room_number)
            .ok_or(FacilityError::RoomNotFound(room_number.into()))?;

        let capacity = u32::try_from(capacity)
            .ok()
            .filter(|&capacity| capacity > 0)
            .ok_or(FacilityError::InvalidCapacity(capacity))?;

        room.set_capacity(capacity);
        info!(room = %room_number, capacity, "Room capacity set");
        Ok(format!("Room {} maximum capacity set to {}.", room_number, capacity))
    }

    /// Look up a room
    pub fn get_room(&self, room_number: RoomNumber) -> Option<&Room> {
        self.rooms.get(&room_number)
    }

    /// Look up a room for mutation
    pub fn get_room_mut(&mut self, room_number: RoomNumber) -> Option<&mut Room> {
        self.rooms.get_mut(&room_number)
    }

    /// Look up a room for mutation, failing with `RoomNotFound`
    pub fn room_mut(&mut self, room_number: RoomNumber) -> FacilityResult<&mut Room> {
        self.get_room_mut(room_number)
            .ok_or(FacilityError::RoomNotFound(room_number.into()))
    }

    /// Resolve a raw room number as typed by a user
    ///
    /// Negative and out-of-range numbers are reported as missing rooms.
    pub fn resolve(&self, raw: i64) -> FacilityResult<RoomNumber> {
        u32::try_from(raw)
            .ok()
            .map(RoomNumber::new)
            .filter(|number| self.rooms.contains_key(number))
            .ok_or(FacilityError::RoomNotFound(raw))
    }

    /// Number of configured rooms
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Configured room numbers in ascending order
    pub fn room_numbers(&self) -> Vec<RoomNumber> {
        self.rooms.keys().copied().collect()
    }

    /// Iterate over rooms in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Policy applied to newly configured rooms
    pub fn policy(&self) -> RoomPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_facility_is_empty() {
        let facility = Facility::new();
        assert_eq!(facility.room_count(), 0);
        assert!(facility.get_room(RoomNumber(1)).is_none());
    }

    #[test]
    fn test_configure_creates_numbered_rooms() {
        let mut facility = Facility::new();
        let message = facility.configure(3).unwrap();

        assert_eq!(message, "Office configured with 3 meeting rooms: Room 1, Room 2, Room 3");
        assert_eq!(facility.room_numbers(), vec![RoomNumber(1), RoomNumber(2), RoomNumber(3)]);
        for room in facility.iter() {
            assert_eq!(room.capacity(), 0);
            assert_eq!(room.occupants(), 0);
            assert!(room.booking().is_none());
            assert_eq!(room.notifiers().len(), 2);
        }
    }

    #[test]
    fn test_reconfigure_replaces_rooms() {
        let mut facility = Facility::new();
        facility.configure(5).unwrap();
        facility.set_capacity(RoomNumber(2), 10).unwrap();

        facility.configure(2).unwrap();
        assert_eq!(facility.room_count(), 2);
        assert_eq!(facility.get_room(RoomNumber(2)).unwrap().capacity(), 0);
        assert!(facility.get_room(RoomNumber(5)).is_none());
    }

    #[test]
    fn test_configure_rejects_non_positive_counts() {
        let mut facility = Facility::new();
        facility.configure(2).unwrap();

        assert!(matches!(facility.configure(0), Err(FacilityError::InvalidRoomCount(0))));
        assert!(matches!(facility.configure(-4), Err(FacilityError::InvalidRoomCount(-4))));
        assert!(matches!(
            facility.configure(4_000_000_000),
            Err(FacilityError::InvalidRoomCount(4_000_000_000))
        ));
        assert_eq!(facility.room_count(), 2);
    }

    #[test]
    fn test_configure_accepts_maximum_count() {
        let mut facility = Facility::new();
        facility.configure(i64::from(defaults::MAX_ROOM_COUNT)).unwrap();
        assert_eq!(facility.room_count(), defaults::MAX_ROOM_COUNT as usize);

        let over = i64::from(defaults::MAX_ROOM_COUNT) + 1;
        assert!(matches!(facility.configure(over), Err(FacilityError::InvalidRoomCount(_))));
        assert_eq!(facility.room_count(), defaults::MAX_ROOM_COUNT as usize);
    }

    #[test]
    fn test_resolve_raw_room_numbers() {
        let mut facility = Facility::new();
        facility.configure(2).unwrap();

        assert_eq!(facility.resolve(2).unwrap(), RoomNumber(2));
        for raw in [-1_i64, 0, 3, i64::from(u32::MAX) + 1] {
            match facility.resolve(raw) {
                Err(FacilityError::RoomNotFound(missing)) => assert_eq!(missing, raw),
                other => panic!("Expected RoomNotFound, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_set_capacity() {
        let mut facility = Facility::new();
        facility.configure(2).unwrap();

        let message = facility.set_capacity(RoomNumber(1), 12).unwrap();
        assert_eq!(message, "Room 1 maximum capacity set to 12.");
        assert_eq!(facility.get_room(RoomNumber(1)).unwrap().capacity(), 12);
    }

    #[test]
    fn test_set_capacity_errors() {
        let mut facility = Facility::new();
        facility.configure(2).unwrap();

        assert!(matches!(
            facility.set_capacity(RoomNumber(9), 5),
            Err(FacilityError::RoomNotFound(9))
        ));
        assert!(matches!(
            facility.set_capacity(RoomNumber(1), 0),
            Err(FacilityError::InvalidCapacity(0))
        ));
        assert!(matches!(
            facility.set_capacity(RoomNumber(1), -7),
            Err(FacilityError::InvalidCapacity(-7))
        ));
        assert_eq!(facility.get_room(RoomNumber(1)).unwrap().capacity(), 0);
    }

    #[test]
    fn test_room_mut_not_found() {
        let mut facility = Facility::new();
        assert!(matches!(
            facility.room_mut(RoomNumber(1)),
            Err(FacilityError::RoomNotFound(1))
        ));
    }

    #[test]
    fn test_from_config_applies_policy_and_notifiers() {
        let config = FacilityConfig {
            auto_release_after_secs: 90,
            min_occupancy_batch: 4,
            notifiers: vec![NotifierKind::Lighting],
            ..FacilityConfig::default()
        };
        let mut facility = Facility::from_config(&config);
        facility.configure(1).unwrap();

        let room = facility.get_room(RoomNumber(1)).unwrap();
        assert_eq!(room.policy().min_occupancy_batch, 4);
        assert_eq!(room.policy().auto_release_after, chrono::Duration::seconds(90));
        assert_eq!(room.notifiers().len(), 1);
        assert_eq!(room.notifiers()[0].subsystem(), "lighting");
    }

    #[test]
    fn test_from_config_with_oversized_threshold_is_clamped() {
        let config = FacilityConfig {
            auto_release_after_secs: u64::MAX,
            ..FacilityConfig::default()
        };
        let facility = Facility::from_config(&config);
        assert_eq!(facility.policy().auto_release_after, chrono::Duration::days(1));
    }
}
