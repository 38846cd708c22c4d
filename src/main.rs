mod commands;
mod config;
mod date_range;
mod logging;
mod output;
mod plan;
mod sun;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sunsetrise_core::Lang;

use crate::config::Settings;
use crate::output::Target;
use crate::plan::Request;

#[derive(Parser)]
#[command(name = "sunsetrise")]
#[command(about = "Blue/golden hour windows as calendar events (.ics or Google Calendar CSV)")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Language for titles and descriptions (en, es)
    #[arg(long, global = true)]
    lang: Option<Lang>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct WindowArgs {
    /// Latitude in degrees (defaults to `latitude` from config)
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude in degrees (defaults to `longitude` from config)
    #[arg(long, allow_negative_numbers = true)]
    lon: Option<f64>,

    /// Inclusive start date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    start: Option<String>,

    /// Inclusive end date (YYYY-MM-DD)
    #[arg(long)]
    until: String,

    /// IANA timezone, e.g. "America/New_York" (defaults to config, then the system zone)
    #[arg(long)]
    tz: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the windows without writing a calendar
    Windows {
        #[command(flatten)]
        window: WindowArgs,

        /// Print a JSON array instead of one line per window
        #[arg(long)]
        json: bool,
    },
    /// Write an RFC 5545 calendar
    Ics {
        #[command(flatten)]
        window: WindowArgs,

        /// Output path, or "-" for stdout (defaults to <calendar_dir>/sunsetrise.ics)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Write a CSV importable by Google Calendar
    Csv {
        #[command(flatten)]
        window: WindowArgs,

        /// Output path, or "-" for stdout (defaults to <calendar_dir>/sunsetrise.csv)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = Settings::load()?;
    let lang = cli.lang.unwrap_or(settings.language);

    match cli.command {
        Commands::Windows { window, json } => {
            let request = resolve_request(&settings, &window)?;
            commands::windows::run(&request, json)
        }
        Commands::Ics { window, output } => {
            let request = resolve_request(&settings, &window)?;
            let target = Target::resolve(output.as_deref(), settings.output_dir().join("sunsetrise.ics"));
            commands::ics::run(&request, lang, &target)
        }
        Commands::Csv { window, output } => {
            let request = resolve_request(&settings, &window)?;
            let target = Target::resolve(output.as_deref(), settings.output_dir().join("sunsetrise.csv"));
            commands::csv::run(&request, &target)
        }
    }
}

fn resolve_request(settings: &Settings, args: &WindowArgs) -> Result<Request> {
    Request::resolve(
        settings,
        args.lat,
        args.lon,
        args.tz.as_deref(),
        args.start.as_deref(),
        &args.until,
    )
}
