use beehive_config::{load_config, Config, ReportFormat};
use beehive_core::{Hive, ShiftOutcome};
use beehive_transport::{JsonSerializer, Sender, Serializer, StdioSender, TextSerializer, TransportError};
use clap::Parser;
use log::{error, info, warn};

use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON or TOML run configuration; built-in defaults if omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of shifts to run (overrides the config file)
    #[arg(short, long)]
    shifts: Option<u32>,

    /// Report format: text or json (overrides the config file)
    #[arg(short, long)]
    format: Option<ReportFormat>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {}", e);
            process::exit(1);
        }
    };

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        if let Err(e) = ctrlc::set_handler(move || running.store(false, Ordering::SeqCst)) {
            warn!("Could not install Ctrl+C handler: {}", e);
        }
    }

    let mut hive = Hive::new();
    let serializer = create_serializer(config.output.format);
    let mut sender = StdioSender::new();

    info!(
        "Running {} shifts, {} ms apart, {} output",
        config.shifts, config.shift_interval_ms, config.output.format
    );

    if let Err(e) = run(&config, &mut hive, serializer.as_ref(), &mut sender, &running) {
        error!("Simulation stopped: {}", e);
        process::exit(1);
    }

    info!("Finished after {} shifts", hive.shift());
}

fn resolve_config(args: &Args) -> Result<Config, beehive_config::ConfigError> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Using configuration from {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    if let Some(shifts) = args.shifts {
        config.shifts = shifts;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    config.validate()?;
    Ok(config)
}

fn create_serializer(format: ReportFormat) -> Box<dyn Serializer> {
    match format {
        ReportFormat::Text => Box::new(TextSerializer),
        ReportFormat::Json => Box::new(JsonSerializer),
    }
}

/// Publishes the starting report, then one report per shift.
fn run(
    config: &Config,
    hive: &mut Hive,
    serializer: &dyn Serializer,
    sender: &mut dyn Sender,
    running: &AtomicBool,
) -> Result<(), TransportError> {
    let interval = Duration::from_millis(config.shift_interval_ms);
    publish(hive, serializer, sender)?;

    for shift in 1..=config.shifts {
        if !running.load(Ordering::SeqCst) {
            info!("Interrupted before shift {}", shift);
            break;
        }

        for assignment in config.assignments_for(shift) {
            if let Err(e) = hive.try_assign_bee(&assignment.job) {
                warn!("Shift {}: assignment ignored: {}", shift, e);
            }
        }

        if hive.work_the_next_shift() == ShiftOutcome::Skipped {
            warn!("Shift {}: the queen could not pay her upkeep, the hive is idle", shift);
        }

        publish(hive, serializer, sender)?;

        if !interval.is_zero() && shift < config.shifts {
            sleep(interval);
        }
    }

    Ok(())
}

fn publish(hive: &Hive, serializer: &dyn Serializer, sender: &mut dyn Sender) -> Result<(), TransportError> {
    let data = serializer.serialize(hive)?;
    sender.send(data.as_bytes())
}
