//! Command execution and audit history

use super::RoomCommand;
use crate::simulation::{Clock, FacilityResult, SystemClock};
use crate::types::RoomNumber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// One executed command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Position in the session, starting at 1
    pub sequence: u64,
    /// Textual form of the command
    pub command: String,
    /// Room the command targeted
    pub room: RoomNumber,
    /// Whether the command took effect
    pub succeeded: bool,
    /// Result text reported to the caller
    pub outcome: String,
    /// When the command ran
    pub executed_at: DateTime<Utc>,
}

/// Runs room commands and remembers what they did
#[derive(Debug)]
pub struct CommandExecutor {
    history: Vec<CommandRecord>,
    clock: Arc<dyn Clock>,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    /// Create an executor stamped by the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an executor stamped by the given clock
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { history: Vec::new(), clock }
    }

    /// Execute a command and record its outcome
    pub fn execute(&mut self, command: &mut dyn RoomCommand) -> FacilityResult<String> {
        let description = command.describe();
        let room = command.room();
        let result = command.execute();

        let (succeeded, outcome) = match &result {
            Ok(message) => (true, message.clone()),
            Err(e) => {
                warn!(command = %description, category = e.category(), error = %e, "Command rejected");
                (false, e.to_string())
            }
        };

        let record = CommandRecord {
            sequence: self.history.len() as u64 + 1,
            command: description,
            room,
            succeeded,
            outcome,
            executed_at: self.clock.now(),
        };
        info!(sequence = record.sequence, command = %record.command, succeeded, "Command executed");
        self.history.push(record);

        result
    }

    /// Executed commands in order
    pub fn history(&self) -> &[CommandRecord] {
        &self.history
    }

    /// Write the history as JSON lines
    pub fn write_audit_log<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);

        for record in &self.history {
            serde_json::to_writer(&mut writer, record)?;
            writeln!(writer)?;
        }
        writer.flush()?;

        info!(records = self.history.len(), path = %path.display(), "Audit log written");
        Ok(())
    }
}
