//! dungen — generate a room-based dungeon layout and print it as text.
//!
//! Run: cargo run --bin dungen -- --seed 42

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use dungen_rooms::{Dungeon, DungeonConfig};

/// Generate a dungeon map of non-overlapping rooms.
#[derive(Parser, Debug)]
#[command(name = "dungen")]
#[command(version, about, long_about = None)]
struct Args {
    /// Map width in cells
    #[arg(long, default_value_t = 200)]
    width: i32,

    /// Map height in cells
    #[arg(long, default_value_t = 120)]
    height: i32,

    /// Smallest room side
    #[arg(long, default_value_t = 7)]
    min_room_size: i32,

    /// Largest room side
    #[arg(long, default_value_t = 18)]
    max_room_size: i32,

    /// Number of room placement attempts
    #[arg(short = 'n', long = "rooms", default_value_t = 69)]
    rooms: usize,

    /// Seed for the random generator (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Characters printed per map cell
    #[arg(long, default_value_t = 1)]
    cell_width: usize,

    /// Append log lines to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log debug messages
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> DungeonConfig {
        DungeonConfig {
            width: self.width,
            height: self.height,
            min_room_size: self.min_room_size,
            max_room_size: self.max_room_size,
            room_count: self.rooms,
            cell_width: self.cell_width,
            ..DungeonConfig::default()
        }
    }
}

fn init_logging(args: &Args) -> std::io::Result<()> {
    let level = if args.verbose { "debug" } else { "info" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));
    if let Some(path) = &args.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args)?;
    log::info!("Starting up.");

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("using seed {seed}");

    let mut dungeon = Dungeon::from_seed(args.config(), seed)?;
    dungeon.generate_map();

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(dungeon.render().as_bytes())?;
    stdout.flush()?;

    log::info!("Finished working.");
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
