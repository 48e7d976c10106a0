// WifiReset CLI - show and edit the service preferences
// Operates on the preference file the service reads at startup

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::path::PathBuf;
use wifireset::{DefaultResolver, FileStore, Settings, SettingsSnapshot, Timestamp};

/// Show and edit WifiReset service preferences
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Preference file to use (overrides WIFIRESET_PREFS_FILE and the default location)
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every setting
    Show,
    /// Enable the reset service
    Enable,
    /// Disable the reset service
    Disable,
    /// Run the service on boot
    Autostart { state: Toggle },
    /// Show the persistent notification icon
    Notify { state: Toggle },
    /// Polling interval in seconds
    Interval {
        #[arg(value_parser = clap::value_parser!(i32).range(0..))]
        seconds: i32,
    },
    /// Record a database clean (defaults to now)
    MarkCleaned {
        /// Clean time in epoch milliseconds (0 records now)
        #[arg(long, allow_negative_numbers = true)]
        at: Option<i64>,
    },
    /// Schedule the next Wi-Fi reset
    ScheduleReset {
        /// Reset time in epoch milliseconds (0 clears the schedule)
        #[arg(allow_negative_numbers = true)]
        millis: i64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(value: Toggle) -> Self {
        matches!(value, Toggle::On)
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn print_snapshot(snapshot: &SettingsSnapshot) {
    println!("active          {}", on_off(snapshot.active));
    println!("autostart       {}", on_off(snapshot.autostart));
    println!("notify          {}", on_off(snapshot.notify));
    println!("interval        {}s", snapshot.interval);
    println!("lastCleanDate   {}", snapshot.last_clean_date);
    match snapshot.next_reset_time {
        Some(ts) => println!("nextResetTime   {}", ts),
        None => println!("nextResetTime   (not scheduled)"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let path = wifireset::resolve_prefs_path(args.prefs)?;
    let store = FileStore::open(&path).context("Failed to open preferences")?;
    info!("Using preferences at: {}", store.path().display());

    let resolver = DefaultResolver;
    let settings = Settings::new(&store, &resolver);

    match args.command {
        Command::Show => {
            let snapshot = settings
                .snapshot()
                .context("Failed to read preferences")?;
            print_snapshot(&snapshot);
        }
        Command::Enable => settings.set_active(true),
        Command::Disable => settings.set_active(false),
        Command::Autostart { state } => settings.set_autostart(state.into()),
        Command::Notify { state } => settings.set_notify(state.into()),
        Command::Interval { seconds } => settings.set_interval(seconds),
        Command::MarkCleaned { at } => {
            let ts = at.map(Timestamp::from_millis).unwrap_or_else(Timestamp::now);
            settings.set_last_clean_date(ts);
            println!("lastCleanDate   {}", settings.last_clean_date());
        }
        Command::ScheduleReset { millis } => {
            let ts = Timestamp::from_millis(millis);
            settings.set_next_reset_time(ts);
            match settings.next_reset_time() {
                Some(ts) => println!("nextResetTime   {}", ts),
                None => println!("nextResetTime   (not scheduled)"),
            }
        }
    }

    Ok(())
}
