// Smart Office Facility - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/smart-office
// ```
//
// Or replay a command script with three rooms preconfigured:
//
// ```console
// $ ./target/release/smart-office --rooms 3 --script commands.txt --verbose --log-dir logs
// ```

use anyhow::Context;
use clap::Parser;
use smart_office_facility::simulation::{CommandRouter, LoggingConfig, ParsedCommand, FAREWELL};
use smart_office_facility::types::{CliArgs, FacilityConfig};
use smart_office_facility::Facility;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match FacilityConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Held until exit so file logging can flush
    let _log_guard = match LoggingConfig::from_cli_args(&args).init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Smart Office Facility");

    let config = match FacilityConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        eprintln!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no session will be started.");
        print_configuration_summary(&config);
        return;
    }

    if let Err(e) = run_session(&config, args.script.as_deref()) {
        error!("Session failed: {:#}", e);
        eprintln!("Session failed: {:#}", e);
        process::exit(1);
    }

    info!("Smart Office Facility session ended");
}

/// Run one interactive or scripted session against a fresh facility
fn run_session(config: &FacilityConfig, script: Option<&str>) -> anyhow::Result<()> {
    let mut router = CommandRouter::new(Facility::from_config(config));

    println!("Welcome to the Smart Office Facility Management System!");

    if let Some(count) = config.initial_room_count {
        let message = router
            .facility_mut()
            .configure(i64::from(count))
            .context("Failed to configure initial rooms")?;
        println!("{}", message);
    }

    match script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open command script '{}'", path))?;
            info!(script = path, "Replaying command script");
            run_commands(&mut router, BufReader::new(file), false)?;
        }
        None => {
            println!("Enter commands to interact with the system (type 'exit' to quit):");
            let stdin = io::stdin();
            run_commands(&mut router, stdin.lock(), true)?;
        }
    }

    if let Some(path) = &config.audit_log_output {
        router
            .executor()
            .write_audit_log(path)
            .with_context(|| format!("Failed to write audit log '{}'", path))?;
        eprintln!("Audit log written to: {}", path);
    }

    println!("{}", FAREWELL);
    Ok(())
}

/// Feed command lines to the router until `exit` or end of input
///
/// Script lines are echoed after the prompt; blank lines and `#` comments in
/// scripts are skipped.
fn run_commands<R: BufRead>(
    router: &mut CommandRouter,
    reader: R,
    interactive: bool,
) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    if interactive {
        prompt(&mut stdout)?;
    }

    for line in reader.lines() {
        let line = line.context("Failed to read command input")?;
        let trimmed = line.trim();

        if trimmed.is_empty() || (!interactive && trimmed.starts_with('#')) {
            if interactive {
                prompt(&mut stdout)?;
            }
            continue;
        }

        if !interactive {
            println!("> {}", trimmed);
        }

        if let Ok(ParsedCommand::Exit) = trimmed.parse::<ParsedCommand>() {
            return Ok(());
        }

        println!("{}", router.process_input(trimmed));

        if interactive {
            prompt(&mut stdout)?;
        }
    }

    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    print!("> ");
    stdout.flush()
}

/// Print configuration summary
fn print_configuration_summary(config: &FacilityConfig) {
    eprintln!("Configuration:");
    match config.initial_room_count {
        Some(count) => eprintln!("  Initial Rooms: {}", count),
        None => eprintln!("  Initial Rooms: (configure at the prompt)"),
    }
    eprintln!("  Auto-Release After: {} seconds", config.auto_release_after_secs);
    eprintln!("  Minimum Occupancy Batch: {}", config.min_occupancy_batch);
    let notifiers: Vec<String> = config.notifiers.iter().map(|kind| kind.to_string()).collect();
    eprintln!("  Notifiers: {}", notifiers.join(", "));
    if let Some(path) = &config.audit_log_output {
        eprintln!("  Audit Log: {}", path);
    }
    eprintln!();
}
