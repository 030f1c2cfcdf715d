//! Parklot CLI
//!
//! Interactive menu front end for the parking lot allocator. The binary
//! owns a single `SlotAllocator` instance and drives it through the menu:
//!
//! ```bash
//! # Prompt for the slot count at startup
//! parklot
//!
//! # Skip the startup prompt
//! parklot --slots 12
//!
//! # Render status as JSON instead of a table
//! parklot --slots 12 --json
//! ```
//!
//! All validation of raw input (non-empty vehicle numbers, numeric slot
//! counts, menu choices) happens here; the library only sees well-formed
//! calls and reports its own errors back for display.

use clap::Parser;
use parklot::{LotStatus, SlotAllocator, SlotSize, Vehicle};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Parklot - Parking Lot Management System
#[derive(Parser, Debug)]
#[command(name = "parklot")]
#[command(version = parklot::VERSION)]
#[command(about = "Parking Lot Management System", long_about = None)]
struct Cli {
    /// Total number of parking slots (prompted interactively when omitted)
    #[arg(short, long, env = "PARKLOT_SLOTS")]
    slots: Option<u32>,

    /// Render lot status as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Log directory path
    #[arg(long, default_value = "logs", env = "PARKLOT_LOG_DIR")]
    log_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli)?;

    let stdin = io::stdin();
    let mut input = Prompt::new(stdin.lock());

    println!("Welcome to Parking Lot Management System");

    let mut lot = init_lot(&mut input, cli.slots)?;

    loop {
        println!("\nChoose your action:");
        println!("1. Park Vehicle");
        println!("2. Remove Vehicle");
        println!("3. Display Status");
        println!("4. Reset Parking Lot");
        println!("5. Exit");

        let choice = input.line("\nYour choice (Enter number): ")?;

        match choice.trim() {
            "1" => handle_parking(&mut input, &mut lot)?,
            "2" => handle_removal(&mut input, &mut lot)?,
            "3" => display_status(&lot.status(), cli.json)?,
            "4" => {
                if let Some(new_lot) = handle_reset(&mut input)? {
                    lot = new_lot;
                }
            }
            "5" => {
                println!("Exiting the application. Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/// Log to a rolling daily file; stdout belongs to the menu
fn setup_logging(cli: &Cli) -> anyhow::Result<()> {
    std::fs::create_dir_all(&cli.log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &cli.log_dir, "parklot.log");

    let log_level = cli
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(file_appender).with_ansi(false))
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .init();

    Ok(())
}

/// Line-oriented prompting over any reader (tests use a cursor)
struct Prompt<R> {
    reader: R,
}

impl<R: BufRead> Prompt<R> {
    fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Print `prompt` and read one line, without the trailing newline
    fn line(&mut self, prompt: &str) -> anyhow::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            anyhow::bail!("input stream closed");
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Re-prompt until the line is non-blank
    fn non_empty_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        loop {
            let line = self.line(prompt)?;
            if !line.trim().is_empty() {
                return Ok(line);
            }
            println!("Vehicle number cannot be empty. Please try again.");
        }
    }
}

/// Prompt until a positive slot count is given, then build the allocator
fn init_lot<R: BufRead>(
    input: &mut Prompt<R>,
    preset: Option<u32>,
) -> anyhow::Result<SlotAllocator> {
    let slots = match preset {
        Some(n) if n > 0 => n,
        Some(_) => anyhow::bail!("--slots must be a positive number"),
        None => loop {
            let line = input.line("Enter total number of parking slots: ")?;
            match line.trim().parse::<u32>() {
                Ok(n) if n > 0 => break n,
                Ok(_) => println!("Please enter a positive number."),
                Err(_) => println!("Invalid input. Please enter a number."),
            }
        },
    };

    let lot = SlotAllocator::new(slots)?;
    println!("Parking lot created with {} total slots.", slots);
    Ok(lot)
}

/// Park a vehicle from interactive input
fn handle_parking<R: BufRead>(
    input: &mut Prompt<R>,
    lot: &mut SlotAllocator,
) -> anyhow::Result<()> {
    let number = input.non_empty_line("Enter Vehicle Number: ")?;

    let size = loop {
        println!("\nSelect Vehicle Size:");
        println!("1. SMALL (Small and compact car)");
        println!("2. LARGE (Full-size car)");
        println!("3. OVERSIZE (SUV or Truck)");

        let choice = input.line("\nYour choice (Enter number): ")?;
        match choice.trim() {
            "1" => break SlotSize::Small,
            "2" => break SlotSize::Large,
            "3" => break SlotSize::Oversize,
            _ => println!("Invalid choice. Please enter 1, 2, or 3."),
        }
    };

    let vehicle = Vehicle::new(number, size)?;
    match lot.park(&vehicle) {
        Ok(placed) => println!(
            "Successfully parked vehicle {} in a {} slot.",
            vehicle.number(),
            placed
        ),
        Err(e) => println!("Error: {}", e),
    }

    Ok(())
}

/// Remove a vehicle from interactive input
fn handle_removal<R: BufRead>(
    input: &mut Prompt<R>,
    lot: &mut SlotAllocator,
) -> anyhow::Result<()> {
    let number = input.non_empty_line("Enter Vehicle Number: ")?;

    match lot.remove(number.trim()) {
        Ok(freed) => println!(
            "Successfully removed vehicle {} from a {} slot.",
            number.trim(),
            freed
        ),
        Err(e) => println!("Error: {}", e),
    }

    Ok(())
}

/// Render the lot status as a table or as JSON
fn display_status(status: &LotStatus, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(status)?);
        return Ok(());
    }

    println!("===== Parking Lot Status =====");
    for class in SlotSize::ALL {
        println!(
            "Available {} Slots: {} / {}",
            class, status.free[&class], status.capacity[&class]
        );
    }

    println!("\nParked Vehicles:");
    if status.parked.is_empty() {
        println!("No vehicles currently parked.");
    } else {
        let mut parked: Vec<_> = status.parked.iter().collect();
        parked.sort();
        for (number, class) in parked {
            println!("Vehicle: {} | Slot Type: {}", number, class);
        }
    }
    println!("==============================");

    Ok(())
}

/// Confirm, then build a fresh allocator; the old one is discarded
fn handle_reset<R: BufRead>(input: &mut Prompt<R>) -> anyhow::Result<Option<SlotAllocator>> {
    let confirm = input.line("Are you sure you want to reset the parking lot? (Y/N): ")?;

    if confirm.trim().eq_ignore_ascii_case("y") {
        Ok(Some(init_lot(input, None)?))
    } else {
        println!("Reset cancelled.");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_lines() -> anyhow::Result<()> {
        let mut input = Prompt::new(Cursor::new("first\nsecond\n"));
        assert_eq!(input.line("")?, "first");
        assert_eq!(input.line("")?, "second");
        Ok(())
    }

    #[test]
    fn test_prompt_skips_blank_lines() -> anyhow::Result<()> {
        let mut input = Prompt::new(Cursor::new("\n   \nKA-01\n"));
        assert_eq!(input.non_empty_line("")?, "KA-01");
        Ok(())
    }

    #[test]
    fn test_init_lot_reprompts_until_positive() -> anyhow::Result<()> {
        let mut input = Prompt::new(Cursor::new("abc\n0\n9\n"));
        let lot = init_lot(&mut input, None)?;
        assert_eq!(lot.free_count(SlotSize::Small), 3);
        Ok(())
    }

    #[test]
    fn test_init_lot_with_preset() -> anyhow::Result<()> {
        let mut input = Prompt::new(Cursor::new(""));
        let lot = init_lot(&mut input, Some(10))?;
        assert_eq!(lot.free_count(SlotSize::Oversize), 4);
        Ok(())
    }

    #[test]
    fn test_init_lot_rejects_zero_preset() {
        let mut input = Prompt::new(Cursor::new(""));
        assert!(init_lot(&mut input, Some(0)).is_err());
    }
}
