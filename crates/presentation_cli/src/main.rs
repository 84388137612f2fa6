//! buttond CLI
//!
//! Administration tool for the button-listener configuration: checks that
//! the file passes the trust gate, parses, and validates cleanly, and lists
//! the configured devices. Never executes device actions.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use domain::DeviceAction;
use infrastructure::{AppConfig, ConfigError, SecurityValidator, init_tracing};
use nix::unistd::Uid;

/// buttond CLI
#[derive(Debug, Parser)]
#[command(name = "buttond-cli")]
#[command(author, version, about = "buttond configuration tool", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to the configuration file
    #[arg(
        short,
        long,
        env = "BUTTOND_CONFIG",
        default_value = "/etc/buttond/config.yml"
    )]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check that the configuration loads and is safe to use
    Check,

    /// List the configured devices and their actions
    Devices,
}

// Exit codes follow sysexits.h so operational tooling can branch on the
// failure class.
const EX_DATAERR: u8 = 65;
const EX_NOINPUT: u8 = 66;
const EX_IOERR: u8 = 74;
const EX_NOPERM: u8 = 77;
const EX_CONFIG: u8 = 78;

fn exit_code(error: &ConfigError) -> u8 {
    match error {
        ConfigError::NotFound { .. } => EX_NOINPUT,
        ConfigError::InsecurePermissions { .. } => EX_NOPERM,
        ConfigError::Invalid { .. } => EX_DATAERR,
        ConfigError::Io { .. } => EX_IOERR,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    init_tracing(default_filter);

    let uid = Uid::effective().as_raw();
    let config = match AppConfig::load(&cli.config, uid) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "Configuration rejected");
            return ExitCode::from(exit_code(&error));
        },
    };

    match cli.command {
        Commands::Check => check(&config),
        Commands::Devices => devices(&config),
    }
}

fn check(config: &AppConfig) -> ExitCode {
    let warnings = SecurityValidator::validate(config);
    SecurityValidator::log_warnings(&warnings);

    if SecurityValidator::has_critical(&warnings) {
        tracing::error!("Configuration has critical issues, the listener would refuse it");
        return ExitCode::from(EX_CONFIG);
    }

    println!(
        "Configuration OK: {} device(s), {} warning(s)",
        config.devices.len(),
        warnings.len()
    );
    ExitCode::SUCCESS
}

fn devices(config: &AppConfig) -> ExitCode {
    let devices = match config.devices() {
        Ok(devices) => devices,
        Err(error) => {
            tracing::error!(%error, "Invalid device entry");
            return ExitCode::from(EX_CONFIG);
        },
    };

    for device in devices {
        match device.action() {
            DeviceAction::Command(command) => {
                println!("{}  {}  cmd: {}", device.mac(), device.name(), command.cmd);
            },
            DeviceAction::WebRequest(request) => {
                println!(
                    "{}  {}  {} {}",
                    device.mac(),
                    device.name(),
                    request.method,
                    request.url
                );
            },
        }
    }
    ExitCode::SUCCESS
}
