//! `hotel` CLI — room availability queries and booking admission over a JSON
//! data file.
//!
//! ## Usage
//!
//! ```sh
//! # First free room for a stay (-1 when every room is taken)
//! hotel --data hotel.json find-room --start 2026-03-17 --end 2026-03-21
//!
//! # Dates on which every room is booked
//! hotel --data hotel.json occupied --start 2026-03-17 --end 2026-03-31
//!
//! # Booked rooms per date
//! hotel --data hotel.json occupancy --start 2026-03-17 --end 2026-03-21
//!
//! # Admit a booking and write it back to the data file
//! hotel --data hotel.json book --customer 7 --room 2 --start 2026-03-17 --end 2026-03-19
//!
//! # Data file from the environment, "today" pinned for reproducible answers
//! HOTEL_DATA=hotel.json hotel --today 2026-03-16 find-room --start 2026-03-17 --end 2026-03-17
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `warn`).

mod data;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use booking_engine::{
    AvailabilityManager, BookingRequest, Clock, FixedClock, InMemoryBookingStore,
    InMemoryRoomCatalog, SystemClock, NO_ROOM,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::data::HotelData;

/// Exit code for a booking rejected by business rules.
const EXIT_REJECTED: i32 = 2;

#[derive(Parser)]
#[command(
    name = "hotel",
    version,
    about = "Hotel room availability and booking CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with the room catalog and the bookings
    #[arg(short, long, env = "HOTEL_DATA", global = true)]
    data: Option<PathBuf>,

    /// Treat this date as today (defaults to the local date)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Log engine decisions at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the first room free over the range, or -1
    FindRoom {
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
    },
    /// Print every date in the range on which all rooms are booked
    Occupied {
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
    },
    /// Print booked rooms per date in the range
    Occupancy {
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
    },
    /// Admit a booking and save it to the data file
    Book {
        #[arg(long)]
        customer: i32,
        #[arg(long, allow_negative_numbers = true)]
        room: i32,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let path = cli
        .data
        .context("No data file given: pass --data or set HOTEL_DATA")?;
    let data = HotelData::load(&path)?;
    let today = cli.today.unwrap_or_else(|| SystemClock.today());
    tracing::debug!(
        path = %path.display(),
        rooms = data.rooms.len(),
        bookings = data.bookings.len(),
        %today,
        "data file loaded"
    );

    let store = InMemoryBookingStore::new(data.bookings);
    let catalog = InMemoryRoomCatalog::new(data.rooms.clone());
    let manager = AvailabilityManager::with_clock(&store, catalog, FixedClock(today));

    match cli.command {
        Commands::FindRoom { start, end } => {
            let room = manager.find_available_room(start, end)?;
            println!("{}", room.unwrap_or(NO_ROOM));
        }
        Commands::Occupied { start, end } => {
            for date in manager.get_fully_occupied_dates(start, end)? {
                println!("{date}");
            }
        }
        Commands::Occupancy { start, end } => {
            for day in manager.get_occupancy(start, end)? {
                println!("{} {}/{}", day.date, day.occupied_rooms, day.total_rooms);
            }
        }
        Commands::Book {
            customer,
            room,
            start,
            end,
        } => {
            let request = BookingRequest::new(customer, room, start, end);
            if !manager.create_booking(request)? {
                println!("rejected");
                process::exit(EXIT_REJECTED);
            }

            let bookings = store.snapshot()?;
            let created = bookings
                .last()
                .map(|b| b.id)
                .context("Booking store is empty after admission")?;
            HotelData {
                rooms: data.rooms,
                bookings,
            }
            .save(&path)?;
            println!("{created}");
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
