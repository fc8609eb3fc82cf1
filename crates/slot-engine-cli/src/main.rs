//! `slots` CLI — compute free appointment slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Demonstration: 09:00-21:00, 30-minute slots, a fixed set of breaks
//! slots
//!
//! # Busy intervals as a JSON array of {"start","stop"} objects on stdin
//! echo '[{"start":"10:30","stop":"10:50"}]' | slots generate --start 09:00 --end 12:00 --duration 30
//!
//! # From file to file, pretty-printed
//! slots generate --start 09:00 --end 21:00 --duration 45 -i busy.json -o slots.json --pretty
//!
//! # Free gaps only, before slot partitioning
//! slots gaps --start 09:00 --end 21:00 -i busy.json
//!
//! # Debug logging on stderr
//! slots -vv generate --start 09:00 --end 18:00 --duration 30 -i busy.json
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{info, LevelFilter};
use serde::Serialize;
use slot_engine::{BusyInterval, MINUTES_PER_DAY};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "slots", version, about = "Free appointment slot generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the slots of the built-in sample day (the default when no command is given)
    Demo,
    /// Generate fixed-duration free slots
    Generate {
        #[command(flatten)]
        day: DayArgs,
        /// Slot length in minutes
        #[arg(short, long)]
        duration: i64,
        #[command(flatten)]
        io: IoArgs,
    },
    /// List the free gaps of the day without cutting them into slots
    Gaps {
        #[command(flatten)]
        day: DayArgs,
        #[command(flatten)]
        io: IoArgs,
    },
}

#[derive(clap::Args)]
struct DayArgs {
    /// Start of the working day (HH:MM)
    #[arg(long)]
    start: String,
    /// End of the working day (HH:MM, or 24:00 for midnight)
    #[arg(long)]
    end: String,
}

#[derive(clap::Args)]
struct IoArgs {
    /// JSON file of busy intervals (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

const DEMO_START: &str = "09:00";
const DEMO_END: &str = "21:00";
const DEMO_DURATION: i64 = 30;
const DEMO_BUSY: [(&str, &str); 5] = [
    ("10:30", "10:50"),
    ("18:40", "18:50"),
    ("14:40", "15:50"),
    ("16:40", "17:20"),
    ("20:05", "20:20"),
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            let busy: Vec<BusyInterval> = DEMO_BUSY
                .iter()
                .map(|(start, stop)| BusyInterval::new(*start, *stop))
                .collect();
            let slots = slot_engine::generate_free_slots(
                slot_engine::parse_time(DEMO_START)?,
                slot_engine::parse_time(DEMO_END)?,
                DEMO_DURATION,
                &busy,
            )?;
            println!("{}", serde_json::to_string(&slots)?);
        }
        Commands::Generate { day, duration, io } => {
            let (start, end) = day.bounds()?;
            let busy = read_busy(io.input.as_deref())?;
            let slots = slot_engine::generate_free_slots(start, end, duration, &busy)
                .context("Failed to generate free slots")?;
            info!("generated {} slot(s)", slots.len());
            write_json(io.output.as_deref(), &slots, io.pretty)?;
        }
        Commands::Gaps { day, io } => {
            let (start, end) = day.bounds()?;
            let busy = read_busy(io.input.as_deref())?;
            let pairs = busy
                .iter()
                .map(|b| {
                    Ok((
                        slot_engine::parse_time(&b.start)?,
                        slot_engine::parse_time(&b.stop)?,
                    ))
                })
                .collect::<slot_engine::error::Result<Vec<_>>>()
                .context("Invalid busy interval")?;
            let gaps = slot_engine::free_gaps(start, end, &pairs)
                .context("Failed to compute free gaps")?;
            info!("found {} free gap(s)", gaps.len());
            write_json(io.output.as_deref(), &gaps, io.pretty)?;
        }
    }

    Ok(())
}

impl DayArgs {
    /// Day bounds in minutes. `--end 24:00` means the end of the day.
    fn bounds(&self) -> Result<(i64, i64)> {
        let start = slot_engine::parse_time(&self.start)
            .with_context(|| format!("Invalid --start: {}", self.start))?;
        let end = if self.end == "24:00" {
            MINUTES_PER_DAY
        } else {
            slot_engine::parse_time(&self.end)
                .with_context(|| format!("Invalid --end: {}", self.end))?
        };
        Ok((start, end))
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Read busy intervals as a JSON array. Blank input means no busy intervals.
fn read_busy(path: Option<&str>) -> Result<Vec<BusyInterval>> {
    let raw = read_input(path)?;
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&raw).context("Failed to parse busy intervals as JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_json<T: Serialize + ?Sized>(path: Option<&str>, value: &T, pretty: bool) -> Result<()> {
    let mut content = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    content.push('\n');

    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
