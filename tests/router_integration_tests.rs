//! End-to-end tests driving the facility through text commands

use chrono::Duration;
use smart_office_facility::simulation::{FAREWELL, INVALID_COMMAND};
use smart_office_facility::*;
use std::sync::Arc;

fn router_with_clock() -> (CommandRouter, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::starting_now());
    let facility = Facility::new().with_clock(clock.clone());
    let executor = CommandExecutor::with_clock(clock.clone());
    (CommandRouter::with_executor(facility, executor), clock)
}

#[test]
fn test_occupied_room_status() {
    let (mut router, _) = router_with_clock();

    router.process_input("config room count 3");
    assert_eq!(
        router.process_input("add occupant 2 3"),
        "Room 2 is now occupied by 3 persons. AC and lights turned on."
    );
    assert!(router.facility().get_room(RoomNumber(2)).unwrap().is_occupied());
    assert_eq!(router.process_input("room status 2"), "Room 2 status: Occupied");
    assert_eq!(router.process_input("room status 1"), "Room 1 status: Unoccupied");
}

#[test]
fn test_second_booking_conflicts_and_first_is_kept() {
    let (mut router, _) = router_with_clock();

    router.process_input("config room count 3");
    assert_eq!(
        router.process_input("block room 1 14:00 30"),
        "Room 1 booked from 14:00 for 30 minutes."
    );
    assert_eq!(
        router.process_input("block room 1 15:00 15"),
        "Room 1 is already booked during this time. Cannot book."
    );

    let booking = router.facility().get_room(RoomNumber(1)).unwrap().booking().unwrap();
    assert_eq!(booking.formatted_start(), "14:00");
    assert_eq!(booking.duration_minutes, 30);
}

#[test]
fn test_cancel_then_rebook() {
    let (mut router, _) = router_with_clock();

    router.process_input("config room count 1");
    assert_eq!(
        router.process_input("cancel room 1"),
        "Room 1 is not booked. Cannot cancel booking."
    );
    router.process_input("block room 1 10:00 30");
    assert_eq!(router.process_input("cancel room 1"), "Booking for Room 1 cancelled successfully.");
    assert_eq!(
        router.process_input("block room 1 11:00 45"),
        "Room 1 booked from 11:00 for 45 minutes."
    );
}

#[test]
fn test_status_query_releases_stale_booking() {
    let (mut router, clock) = router_with_clock();

    router.process_input("config room count 1");
    router.process_input("block room 1 14:00 30");
    router.process_input("add occupant 1 2");
    assert_eq!(
        router.process_input("remove occupant 1 2"),
        "Room 1 is now unoccupied. AC and lights turned off."
    );

    clock.advance_by(Duration::seconds(299));
    assert_eq!(router.process_input("room status 1"), "Room 1 status: Unoccupied");

    clock.advance_by(Duration::seconds(2));
    assert_eq!(
        router.process_input("room status 1"),
        "Room 1 is now unoccupied. Booking released. AC and lights off."
    );
    assert!(router.facility().get_room(RoomNumber(1)).unwrap().booking().is_none());

    // The slot is free again
    assert_eq!(
        router.process_input("block room 1 15:00 15"),
        "Room 1 booked from 15:00 for 15 minutes."
    );
}

#[test]
fn test_single_occupant_is_informational() {
    let (mut router, _) = router_with_clock();
    router.process_input("config room count 1");
    assert_eq!(
        router.process_input("add occupant 1 1"),
        "Room 1 occupancy insufficient to mark as occupied."
    );
    assert_eq!(router.process_input("room status 1"), "Room 1 status: Unoccupied");
}

#[test]
fn test_capacity_commands() {
    let (mut router, _) = router_with_clock();
    router.process_input("config room count 2");
    assert_eq!(
        router.process_input("config room max capacity 2 12"),
        "Room 2 maximum capacity set to 12."
    );
    assert_eq!(
        router.process_input("config room max capacity 2 0"),
        "Invalid capacity. Please enter a valid positive number."
    );
    assert_eq!(router.facility().get_room(RoomNumber(2)).unwrap().capacity(), 12);
}

#[test]
fn test_invalid_inputs_fail_closed() {
    let (mut router, _) = router_with_clock();
    router.process_input("config room count 1");

    for input in [
        "",
        "   ",
        "config",
        "config room count",
        "config room count x",
        "add occupant",
        "block room 1 14:00",
        "block room 1 1400 30",
        "block room 1 14:00 thirty",
        "room status",
        "teleport room 1",
    ] {
        assert_eq!(router.process_input(input), INVALID_COMMAND, "input: {:?}", input);
    }
}

#[test]
fn test_non_positive_values_reach_the_facility() {
    let (mut router, _) = router_with_clock();
    router.process_input("config room count 1");

    assert_eq!(
        router.process_input("config room count 0"),
        "Invalid room count 0. Please enter a valid positive number."
    );
    assert_eq!(router.facility().room_count(), 1);

    assert_eq!(
        router.process_input("block room 1 14:00 0"),
        "Invalid booking duration 0. Please enter a valid number of minutes."
    );
    assert!(router.facility().get_room(RoomNumber(1)).unwrap().booking().is_none());
}

#[test]
fn test_commands_before_configuration() {
    let (mut router, _) = router_with_clock();
    assert_eq!(router.process_input("room status 1"), "Room 1 does not exist.");
}

#[test]
fn test_execute_command_interface() {
    let (mut router, _) = router_with_clock();
    router.facility_mut().configure(2).unwrap();

    let start = chrono::NaiveTime::from_hms_opt(16, 30, 0).unwrap();
    let message = router
        .execute_command(BookingRequest::BookRoom {
            room: RoomNumber(2),
            start_time: start,
            duration_minutes: 20,
        })
        .unwrap();
    assert_eq!(message, "Room 2 booked from 16:30 for 20 minutes.");

    let err = router
        .execute_command(BookingRequest::CancelBooking { room: RoomNumber(9) })
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // Lookups that fail never reach the executor
    assert_eq!(router.executor().history().len(), 1);
}

#[test]
fn test_exit_reply() {
    let (mut router, _) = router_with_clock();
    assert_eq!(router.process_input("exit"), FAREWELL);
}
