//! Text command routing
//!
//! This module turns whitespace-delimited command lines into calls on the
//! [`Facility`], its rooms, and the booking commands. Every input produces a
//! line of result text; malformed input is answered with a generic
//! "invalid command" message instead of an error.

use crate::commands::{BookRoomCommand, CancelBookingCommand, CommandExecutor};
use crate::facility::{Booking, Facility, Room};
use crate::simulation::FacilityResult;
use crate::types::RoomNumber;
use chrono::NaiveTime;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, instrument};

/// Reply to any input that does not parse
pub const INVALID_COMMAND: &str = "Invalid command. Please try again.";

/// Reply to `exit`
pub const FAREWELL: &str = "Thank you for using the Smart Office Facility Management System!";

/// Reply to `help`
pub const HELP_TEXT: &str = "Available commands:
  config room count N            configure N meeting rooms (replaces existing rooms)
  config room max capacity R C   set the maximum capacity of room R
  add occupant R N               register N people entering room R (at least 2)
  remove occupant R N            register N people leaving room R
  block room R HH:MM D           book room R from HH:MM for D minutes
  cancel room R                  cancel the booking of room R
  room status R                  show room R status (releases stale bookings)
  help                           show this help
  exit                           leave the session";

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// `config room count N`
    ConfigureRooms {
        /// Requested number of rooms
        count: i64,
    },
    /// `config room max capacity R C`
    SetCapacity {
        /// Target room as typed
        room: i64,
        /// Requested capacity
        capacity: i64,
    },
    /// `add occupant R N`
    AddOccupants {
        /// Target room as typed
        room: i64,
        /// Arriving people
        count: i64,
    },
    /// `remove occupant R N`
    RemoveOccupants {
        /// Target room as typed
        room: i64,
        /// Departing people
        count: i64,
    },
    /// `block room R HH:MM D`
    BlockRoom {
        /// Target room as typed
        room: i64,
        /// Slot start
        start_time: NaiveTime,
        /// Slot length in minutes
        duration_minutes: i64,
    },
    /// `cancel room R`
    CancelBooking {
        /// Target room as typed
        room: i64,
    },
    /// `room status R`
    RoomStatus {
        /// Target room as typed
        room: i64,
    },
    /// `help`
    Help,
    /// `exit`
    Exit,
}

/// Why a command line failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    /// Nothing but whitespace
    #[error("empty input")]
    Empty,

    /// Keywords did not match any command
    #[error("unrecognized command: {0}")]
    Unrecognized(String),

    /// A required argument is missing
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// An argument is not a valid number
    #[error("invalid {field}: {value}")]
    InvalidNumber {
        /// Argument name
        field: &'static str,
        /// Offending token
        value: String,
    },

    /// Start time is not `HH:MM`
    #[error("invalid start time: {0}")]
    InvalidTime(String),

    /// More tokens than the command takes
    #[error("unexpected trailing input: {0}")]
    TrailingInput(String),
}

/// Cursor over the tokens of one command line
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self { inner: input.split_whitespace() }
    }

    fn next_arg(&mut self, field: &'static str) -> Result<&'a str, CommandParseError> {
        self.inner.next().ok_or(CommandParseError::MissingArgument(field))
    }

    fn next_number<T: FromStr>(&mut self, field: &'static str) -> Result<T, CommandParseError> {
        let token = self.next_arg(field)?;
        token
            .parse()
            .map_err(|_| CommandParseError::InvalidNumber { field, value: token.to_string() })
    }

    fn next_room(&mut self) -> Result<i64, CommandParseError> {
        self.next_number("room number")
    }

    fn next_time(&mut self) -> Result<NaiveTime, CommandParseError> {
        let token = self.next_arg("start time")?;
        Booking::parse_start_time(token).map_err(|_| CommandParseError::InvalidTime(token.to_string()))
    }

    fn expect_keyword(&mut self, keyword: &'static str) -> Result<(), CommandParseError> {
        match self.inner.next() {
            Some(token) if token.eq_ignore_ascii_case(keyword) => Ok(()),
            Some(token) => Err(CommandParseError::Unrecognized(token.to_string())),
            None => Err(CommandParseError::MissingArgument(keyword)),
        }
    }

    fn finish(mut self) -> Result<(), CommandParseError> {
        match self.inner.next() {
            Some(token) => Err(CommandParseError::TrailingInput(token.to_string())),
            None => Ok(()),
        }
    }
}

impl FromStr for ParsedCommand {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens::new(s);
        let head = tokens.inner.next().ok_or(CommandParseError::Empty)?.to_lowercase();

        let command = match head.as_str() {
            "config" => {
                tokens.expect_keyword("room")?;
                let next = tokens.next_arg("count or max")?.to_lowercase();
                match next.as_str() {
                    "count" => ParsedCommand::ConfigureRooms { count: tokens.next_number("room count")? },
                    "max" => {
                        tokens.expect_keyword("capacity")?;
                        let room = tokens.next_room()?;
                        let capacity = tokens.next_number("capacity")?;
                        ParsedCommand::SetCapacity { room, capacity }
                    }
                    _ => return Err(CommandParseError::Unrecognized(next)),
                }
            }
            "add" => {
                tokens.expect_keyword("occupant")?;
                let room = tokens.next_room()?;
                let count = tokens.next_number("occupant count")?;
                ParsedCommand::AddOccupants { room, count }
            }
            "remove" => {
                tokens.expect_keyword("occupant")?;
                let room = tokens.next_room()?;
                let count = tokens.next_number("occupant count")?;
                ParsedCommand::RemoveOccupants { room, count }
            }
            "block" => {
                tokens.expect_keyword("room")?;
                let room = tokens.next_room()?;
                let start_time = tokens.next_time()?;
                let duration_minutes = tokens.next_number("duration")?;
                ParsedCommand::BlockRoom { room, start_time, duration_minutes }
            }
            "cancel" => {
                tokens.expect_keyword("room")?;
                ParsedCommand::CancelBooking { room: tokens.next_room()? }
            }
            "room" => {
                tokens.expect_keyword("status")?;
                ParsedCommand::RoomStatus { room: tokens.next_room()? }
            }
            "help" => ParsedCommand::Help,
            "exit" => ParsedCommand::Exit,
            _ => return Err(CommandParseError::Unrecognized(head)),
        };

        tokens.finish()?;
        Ok(command)
    }
}

/// A booking change addressed to a room by number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingRequest {
    /// Reserve a slot
    BookRoom {
        /// Target room
        room: RoomNumber,
        /// Slot start
        start_time: NaiveTime,
        /// Slot length in minutes
        duration_minutes: i64,
    },
    /// Drop the current reservation
    CancelBooking {
        /// Target room
        room: RoomNumber,
    },
}

/// Routes parsed commands to the facility
#[derive(Debug)]
pub struct CommandRouter {
    facility: Facility,
    executor: CommandExecutor,
}

impl CommandRouter {
    /// Create a router over a facility
    pub fn new(facility: Facility) -> Self {
        Self::with_executor(facility, CommandExecutor::new())
    }

    /// Create a router with a specific command executor
    pub fn with_executor(facility: Facility, executor: CommandExecutor) -> Self {
        Self { facility, executor }
    }

    /// The facility being managed
    pub fn facility(&self) -> &Facility {
        &self.facility
    }

    /// The facility being managed, mutably
    pub fn facility_mut(&mut self) -> &mut Facility {
        &mut self.facility
    }

    /// The executor holding the booking audit history
    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    /// Parse and run one line of input
    pub fn process_input(&mut self, input: &str) -> String {
        match input.parse::<ParsedCommand>() {
            Ok(command) => self.dispatch(command),
            Err(e) => {
                debug!(input, error = %e, "Rejected command line");
                INVALID_COMMAND.to_string()
            }
        }
    }

    /// Run a parsed command and render its outcome
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: ParsedCommand) -> String {
        let result = match command {
            ParsedCommand::ConfigureRooms { count } => self.facility.configure(count),
            ParsedCommand::SetCapacity { room, capacity } => self
                .facility
                .resolve(room)
                .and_then(|room| self.facility.set_capacity(room, capacity)),
            ParsedCommand::AddOccupants { room, count } => self
                .occupied_room(room)
                .and_then(|room| room.add_occupants(count))
                .map(|report| report.to_string()),
            ParsedCommand::RemoveOccupants { room, count } => self
                .occupied_room(room)
                .and_then(|room| room.remove_occupants(count))
                .map(|report| report.to_string()),
            ParsedCommand::BlockRoom { room, start_time, duration_minutes } => {
                self.facility.resolve(room).and_then(|room| {
                    self.execute_command(BookingRequest::BookRoom {
                        room,
                        start_time,
                        duration_minutes,
                    })
                })
            }
            ParsedCommand::CancelBooking { room } => self
                .facility
                .resolve(room)
                .and_then(|room| self.execute_command(BookingRequest::CancelBooking { room })),
            ParsedCommand::RoomStatus { room } => self
                .facility
                .resolve(room)
                .and_then(|room| self.room_status(room)),
            ParsedCommand::Help => Ok(HELP_TEXT.to_string()),
            ParsedCommand::Exit => Ok(FAREWELL.to_string()),
        };

        result.unwrap_or_else(|e| e.to_string())
    }

    fn occupied_room(&mut self, raw: i64) -> FacilityResult<&mut Room> {
        let room = self.facility.resolve(raw)?;
        self.facility.room_mut(room)
    }

    /// Build and run the command object for a booking request
    pub fn execute_command(&mut self, request: BookingRequest) -> FacilityResult<String> {
        match request {
            BookingRequest::BookRoom { room, start_time, duration_minutes } => {
                let room = self.facility.room_mut(room)?;
                self.executor
                    .execute(&mut BookRoomCommand::new(room, start_time, duration_minutes))
            }
            BookingRequest::CancelBooking { room } => {
                let room = self.facility.room_mut(room)?;
                self.executor.execute(&mut CancelBookingCommand::new(room))
            }
        }
    }

    /// Release a stale booking if due, otherwise report occupancy
    pub fn room_status(&mut self, room: RoomNumber) -> FacilityResult<String> {
        let room = self.facility.room_mut(room)?;
        Ok(match room.check_automatic_release() {
            Some(notice) => notice.to_string(),
            None => room.status_line(),
        })
    }
}
