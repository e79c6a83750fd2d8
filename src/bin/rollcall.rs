//! rollcall - interactive attendance register.
//!
//! Loads the roster from `<resources>/students.txt`, lets the user add
//! students and mark them present or absent for today, and saves the table
//! to `<resources>/attendance.csv` on request.
//!
//! Usage:
//!   rollcall                          # use ./resources
//!   rollcall -d ~/class-7b            # custom resource directory
//!   rollcall --log-file rollcall.log  # write diagnostics to a file
//!   rollcall --log-file r.log -vv     # ... at trace level

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use rollcall::config::{Config, DEFAULT_EXPORT_FILE, DEFAULT_RESOURCE_DIR, DEFAULT_ROSTER_FILE};
use rollcall::session::Session;
use rollcall::tui::App;

/// Interactive student attendance register.
#[derive(Parser)]
#[command(name = "rollcall", about = "Student attendance register")]
struct Args {
    /// Directory holding the roster and the attendance export.
    #[arg(short = 'd', long = "resources", value_name = "DIR", default_value = DEFAULT_RESOURCE_DIR)]
    resources: PathBuf,

    /// Roster file name inside the resource directory.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_ROSTER_FILE)]
    roster: String,

    /// Attendance export file name inside the resource directory.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_EXPORT_FILE)]
    output: String,

    /// Write logs to this file. The terminal belongs to the UI, so logging
    /// is off unless a file is given.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log errors only.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            resource_dir: self.resources.clone(),
            roster_file: self.roster.clone(),
            export_file: self.output.clone(),
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        if let Err(e) = init_logging(path, args.verbose, args.quiet) {
            eprintln!("Error: cannot open log file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let config = args.config();
    let (session, load_error) = Session::open(&config);
    let app = App::new(session).with_startup_error(load_error);

    if let Err(e) = app.run() {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber writing to `path`.
/// Default level is INFO. `RUST_LOG` directives take precedence.
fn init_logging(path: &Path, verbose: u8, quiet: bool) -> std::io::Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}
