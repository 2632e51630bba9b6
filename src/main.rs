//! Parking Service — interactive console
//!
//! ```sh
//! # Run with default config (~/.config/parking-service/config.toml)
//! parking-service
//!
//! # Custom config path
//! parking-service --config /etc/parking-service/config.toml
//!
//! # Validate config without starting
//! parking-service --check
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, warn};

use parkit::application::ports::InputReader;
use parkit::domain::{format_price, DomainError, ParkingType};
use parkit::{init_tracing, AppConfig, ConsoleInputReader, InMemoryStorage, ParkingService};

/// Parking lot attendant console.
#[derive(Parser, Debug)]
#[command(
    name = "parking-service",
    version,
    about = "Assigns parking spots and computes parking fares",
    long_about = "Parking Service — records vehicle entries and exits, \
                  assigns spots by vehicle type and computes the fare owed.\n\n\
                  Default config: ~/.config/parking-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "PARKING_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(parkit::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load config {}: {}", config_path.display(), e);
            if cli.check {
                std::process::exit(1);
            }
            AppConfig::default()
        }
    };

    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    init_tracing(&config);
    info!(path = %config_path.display(), "Configuration loaded");

    if cli.check {
        println!(
            "Configuration OK: {} car spots, {} bike spots",
            config.lot.car_spots, config.lot.bike_spots
        );
        return Ok(());
    }

    // ── Wire services ──────────────────────────────────────────
    let storage = Arc::new(InMemoryStorage::from_lot(&config.lot));
    let input = Arc::new(ConsoleInputReader::stdin());
    let service = ParkingService::new(input.clone(), storage.clone());

    info!(
        car_spots = config.lot.car_spots,
        bike_spots = config.lot.bike_spots,
        "Parking lot open"
    );

    loop {
        print_menu(&storage);
        match input.read_selection() {
            1 => {
                prompt("Vehicle type (1 CAR, 2 BIKE), then registration number:");
                match service.process_incoming_vehicle().await {
                    Ok(Some(outcome)) => {
                        if outcome.recurring {
                            println!(
                                "Welcome back! As a recurring user you'll benefit from a 5% discount."
                            );
                        }
                        println!(
                            "Please park your vehicle in spot number {}",
                            outcome.ticket.parking_spot.id
                        );
                    }
                    Ok(None) => println!("No spot available for this vehicle type."),
                    Err(e) => report(&e),
                }
            }
            2 => {
                prompt("Registration number:");
                match service.process_exiting_vehicle().await {
                    Ok(ticket) => println!(
                        "Please pay the parking fare: {}",
                        format_price(ticket.price)
                    ),
                    Err(e) => report(&e),
                }
            }
            3 => {
                info!("Shutting down");
                break;
            }
            other => {
                warn!(selection = other, "Unsupported menu option");
                println!("Unsupported option. Please enter a number between 1 and 3.");
            }
        }
    }

    Ok(())
}

fn print_menu(storage: &InMemoryStorage) {
    println!();
    println!(
        "Free spots: {} car, {} bike",
        storage.free_spot_count(&ParkingType::Car),
        storage.free_spot_count(&ParkingType::Bike)
    );
    println!("1 New vehicle entering");
    println!("2 Vehicle exiting");
    println!("3 Shutdown");
    let _ = std::io::stdout().flush();
}

fn prompt(text: &str) {
    println!("{}", text);
    let _ = std::io::stdout().flush();
}

fn report(e: &DomainError) {
    if e.is_rejection() {
        warn!(error = %e, "Request rejected");
    } else {
        error!(error = %e, "Request failed");
    }
    println!("{}", e);
}
