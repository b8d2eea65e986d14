//! Configuration structures for the meeting room simulator
//!
//! This module contains the facility configuration structure, its CLI and file
//! sources, and the validation logic applied before a session starts.

use super::NotifierKind;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Built-in room policy defaults
pub mod defaults {
    /// Seconds a booked room may stay vacant before its booking is released
    pub const AUTO_RELEASE_AFTER_SECS: u64 = 300;

    /// Smallest batch of people that registers a room as occupied
    pub const MIN_OCCUPANCY_BATCH: u32 = 2;

    /// Longest accepted vacancy threshold (one day)
    pub const MAX_AUTO_RELEASE_SECS: u64 = 86_400;

    /// Most rooms a facility may be configured with
    pub const MAX_ROOM_COUNT: u32 = 10_000;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "smart-office",
    version = "0.1.0",
    about = "Smart Office Facility - Meeting room occupancy and booking simulator",
    long_about = "Simulates a fixed set of meeting rooms: room capacity, occupancy tracking with automatic AC and lighting control, time slot bookings, and automatic release of bookings for rooms left vacant.

COMMANDS (entered at the prompt or listed in a --script file):
    config room count N
    config room max capacity R C
    add occupant R N
    remove occupant R N
    block room R HH:MM D
    cancel room R
    room status R
    help
    exit

EXAMPLES:
    # Interactive session
    smart-office

    # Start with three rooms already configured
    smart-office --rooms 3

    # Replay a command script and keep an audit trail
    smart-office --script commands.txt --audit-log audit.jsonl

    # Generate configuration template
    smart-office --print-config > office.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag, JSON)
    3. Default values (lowest priority)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of rooms to configure at startup
    #[arg(long, help = "Number of meeting rooms to configure at startup")]
    pub rooms: Option<u32>,

    /// Vacancy threshold for automatic booking release
    #[arg(
        long,
        help = "Seconds of vacancy before a booking is released",
        long_help = "Number of seconds a booked room may stay unoccupied before its booking is automatically released on the next status query. Must be greater than 0. Default: 300"
    )]
    pub auto_release_secs: Option<u64>,

    /// Minimum occupant batch size
    #[arg(
        long,
        help = "Minimum people per occupancy update",
        long_help = "Smallest number of people that registers a room as occupied in a single update. Smaller batches are reported and ignored. Must be greater than 0. Default: 2"
    )]
    pub min_occupancy: Option<u32>,

    /// Read commands from a file instead of standard input
    #[arg(long, help = "Read commands from a file instead of standard input")]
    pub script: Option<String>,

    /// Output path for the booking audit log
    #[arg(long, help = "Output path for the booking audit log (JSONL)")]
    pub audit_log: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Also write JSON logs to daily rolling files in this directory
    #[arg(long, help = "Directory for rolling JSON log files")]
    pub log_dir: Option<String>,

    /// Emit console logs as JSON
    #[arg(long, help = "Format console logs as JSON")]
    pub log_json: bool,

    /// Dry run mode - validate configuration without starting a session
    #[arg(long, help = "Validate configuration without starting a session")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of rooms to configure at startup
    pub initial_room_count: Option<u32>,

    /// Seconds of vacancy before a booking is released
    pub auto_release_after_secs: Option<u64>,

    /// Minimum people per occupancy update
    pub min_occupancy_batch: Option<u32>,

    /// Subsystems attached to every room
    pub notifiers: Option<Vec<NotifierKind>>,

    /// Output path for the booking audit log
    pub audit_log_output: Option<String>,
}

/// Configuration for the facility simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityConfig {
    /// Number of rooms to configure at startup (None leaves the facility empty)
    pub initial_room_count: Option<u32>,

    /// Seconds of vacancy before a booking is released
    pub auto_release_after_secs: u64,

    /// Minimum people per occupancy update
    pub min_occupancy_batch: u32,

    /// Subsystems attached to every room, in notification order
    pub notifiers: Vec<NotifierKind>,

    /// Output path for the booking audit log
    pub audit_log_output: Option<String>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for facility configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Initial room count is zero
    #[error("Initial room count must be greater than 0, got {0}")]
    InvalidRoomCount(u32),

    /// Initial room count above the supported maximum
    #[error("Initial room count {0} exceeds the supported maximum")]
    TooManyRooms(u32),

    /// Auto-release threshold is zero
    #[error("Auto-release threshold must be greater than 0 seconds, got {0}")]
    InvalidAutoReleaseThreshold(u64),

    /// Auto-release threshold above the supported maximum
    #[error("Auto-release threshold of {0} seconds exceeds the one day maximum")]
    AutoReleaseThresholdTooLarge(u64),

    /// Occupancy batch minimum is zero
    #[error("Minimum occupancy batch must be greater than 0, got {0}")]
    InvalidOccupancyBatch(u32),

    /// No notifiers configured
    #[error("At least one notifier must be configured")]
    NoNotifiers,

    /// Same notifier listed twice
    #[error("Notifier '{0}' is configured more than once")]
    DuplicateNotifier(NotifierKind),
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            initial_room_count: None,
            auto_release_after_secs: defaults::AUTO_RELEASE_AFTER_SECS,
            min_occupancy_batch: defaults::MIN_OCCUPANCY_BATCH,
            notifiers: vec![NotifierKind::Climate, NotifierKind::Lighting],
            audit_log_output: None,
        }
    }
}

impl FacilityConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            initial_room_count: config_file.initial_room_count.or(defaults.initial_room_count),
            auto_release_after_secs: config_file
                .auto_release_after_secs
                .unwrap_or(defaults.auto_release_after_secs),
            min_occupancy_batch: config_file
                .min_occupancy_batch
                .unwrap_or(defaults.min_occupancy_batch),
            notifiers: config_file.notifiers.unwrap_or(defaults.notifiers),
            audit_log_output: config_file.audit_log_output.or(defaults.audit_log_output),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.rooms {
            config.initial_room_count = Some(value);
        }
        if let Some(value) = args.auto_release_secs {
            config.auto_release_after_secs = value;
        }
        if let Some(value) = args.min_occupancy {
            config.min_occupancy_batch = value;
        }
        if let Some(value) = args.audit_log {
            config.audit_log_output = Some(value);
        }
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        match self.initial_room_count {
            Some(0) => return Err(ConfigValidationError::InvalidRoomCount(0)),
            Some(count) if count > defaults::MAX_ROOM_COUNT => {
                return Err(ConfigValidationError::TooManyRooms(count));
            }
            _ => {}
        }

        if self.auto_release_after_secs == 0 {
            return Err(ConfigValidationError::InvalidAutoReleaseThreshold(
                self.auto_release_after_secs,
            ));
        }

        if self.auto_release_after_secs > defaults::MAX_AUTO_RELEASE_SECS {
            return Err(ConfigValidationError::AutoReleaseThresholdTooLarge(
                self.auto_release_after_secs,
            ));
        }

        if self.min_occupancy_batch == 0 {
            return Err(ConfigValidationError::InvalidOccupancyBatch(self.min_occupancy_batch));
        }

        if self.notifiers.is_empty() {
            return Err(ConfigValidationError::NoNotifiers);
        }

        let mut seen = HashSet::new();
        for kind in &self.notifiers {
            if !seen.insert(*kind) {
                return Err(ConfigValidationError::DuplicateNotifier(*kind));
            }
        }

        Ok(())
    }

    /// Get the auto-release threshold as a chrono duration
    ///
    /// Values above [`defaults::MAX_AUTO_RELEASE_SECS`] are clamped to it, so an
    /// unvalidated configuration still yields a usable duration.
    pub fn auto_release_after(&self) -> chrono::Duration {
        let secs = self.auto_release_after_secs.min(defaults::MAX_AUTO_RELEASE_SECS);
        i64::try_from(secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or_else(|| chrono::Duration::days(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> CliArgs {
        CliArgs {
            config: None,
            rooms: None,
            auto_release_secs: None,
            min_occupancy: None,
            script: None,
            audit_log: None,
            verbose: false,
            debug: false,
            log_dir: None,
            log_json: false,
            dry_run: false,
            print_config: false,
        }
    }

    #[test]
    fn test_facility_config_default() {
        let config = FacilityConfig::default();

        assert!(config.initial_room_count.is_none());
        assert_eq!(config.auto_release_after_secs, 300);
        assert_eq!(config.min_occupancy_batch, 2);
        assert_eq!(config.notifiers, vec![NotifierKind::Climate, NotifierKind::Lighting]);
        assert!(config.audit_log_output.is_none());
        assert_eq!(config.auto_release_after(), chrono::Duration::seconds(300));
    }

    #[test]
    fn test_cli_parsing() {
        let cli_args = CliArgs::try_parse_from(vec!["test", "--rooms", "4", "-v"]).unwrap();
        assert_eq!(cli_args.rooms, Some(4));
        assert!(cli_args.verbose);
        assert!(!cli_args.debug);

        let cli_args = CliArgs::try_parse_from(vec!["test"]).unwrap();
        assert!(cli_args.rooms.is_none());
        assert!(cli_args.script.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs {
            rooms: Some(6),
            auto_release_secs: Some(60),
            min_occupancy: Some(3),
            audit_log: Some("audit.jsonl".to_string()),
            ..empty_args()
        };

        let config = FacilityConfig::from_cli_args(args).unwrap();

        assert_eq!(config.initial_room_count, Some(6));
        assert_eq!(config.auto_release_after_secs, 60);
        assert_eq!(config.min_occupancy_batch, 3);
        assert_eq!(config.audit_log_output.as_deref(), Some("audit.jsonl"));
        // Non-overridden fields keep defaults
        assert_eq!(config.notifiers.len(), 2);
    }

    #[test]
    fn test_config_file_loading() {
        use std::io::Write;
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        let config_json = r#"{
            "initial_room_count": 5,
            "auto_release_after_secs": 120,
            "notifiers": ["lighting"]
        }"#;

        temp_file.write_all(config_json.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = FacilityConfig::from_file(temp_file.path()).unwrap();

        assert_eq!(config.initial_room_count, Some(5));
        assert_eq!(config.auto_release_after_secs, 120);
        assert_eq!(config.min_occupancy_batch, 2);
        assert_eq!(config.notifiers, vec![NotifierKind::Lighting]);
    }

    #[test]
    fn test_cli_overrides_config_file() {
        use std::io::Write;
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        temp_file.write_all(br#"{ "initial_room_count": 5 }"#).unwrap();
        temp_file.flush().unwrap();

        let args = CliArgs {
            config: Some(temp_file.path().display().to_string()),
            rooms: Some(2),
            ..empty_args()
        };

        let config = FacilityConfig::from_cli_args(args).unwrap();
        assert_eq!(config.initial_room_count, Some(2));
    }

    #[test]
    fn test_config_file_errors() {
        match FacilityConfig::from_file("/definitely/not/here.json") {
            Err(ConfigError::FileNotFound(_)) => {}
            other => panic!("Expected FileNotFound, got {:?}", other),
        }

        let temp_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        match FacilityConfig::from_file(temp_file.path()) {
            Err(ConfigError::UnsupportedFormat(ext)) => assert_eq!(ext, "toml"),
            other => panic!("Expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_config_validation_success() {
        assert!(FacilityConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_failures() {
        let mut config = FacilityConfig::default();
        config.initial_room_count = Some(0);
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidRoomCount(0))));

        let mut config = FacilityConfig::default();
        config.auto_release_after_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidAutoReleaseThreshold(0))
        ));

        let mut config = FacilityConfig::default();
        config.initial_room_count = Some(defaults::MAX_ROOM_COUNT + 1);
        assert!(matches!(config.validate(), Err(ConfigValidationError::TooManyRooms(_))));

        let mut config = FacilityConfig::default();
        config.auto_release_after_secs = u64::MAX;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::AutoReleaseThresholdTooLarge(u64::MAX))
        ));
        // Unvalidated values are clamped rather than overflowing
        assert_eq!(config.auto_release_after(), chrono::Duration::days(1));

        let mut config = FacilityConfig::default();
        config.min_occupancy_batch = 0;
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidOccupancyBatch(0))));

        let mut config = FacilityConfig::default();
        config.notifiers.clear();
        assert!(matches!(config.validate(), Err(ConfigValidationError::NoNotifiers)));

        let mut config = FacilityConfig::default();
        config.notifiers.push(NotifierKind::Climate);
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::DuplicateNotifier(NotifierKind::Climate))
        ));
    }

    #[test]
    fn test_print_json_round_trips() {
        let config = FacilityConfig::default();
        let json = config.print_json().unwrap();
        let back: FacilityConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.auto_release_after_secs, config.auto_release_after_secs);
        assert_eq!(back.notifiers, config.notifiers);
    }
}
