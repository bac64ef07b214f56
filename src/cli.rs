use clap::{Parser, Subcommand};
use irriplan::render::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "irriplan", version, about = "Irrigation planning for smallholder farms")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the config value, then text)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a day-by-day irrigation plan
    Plan {
        /// Plan request file (.json or .yaml)
        #[arg(short, long)]
        request: PathBuf,

        /// Weather snapshot file (.json or .yaml)
        #[arg(short, long)]
        weather: PathBuf,

        /// Reference ET0 file from an agro-meteorological provider
        #[arg(long)]
        reference_et0: Option<PathBuf>,

        /// Override the request's horizon in days
        #[arg(long)]
        days: Option<u32>,
    },
    /// Score today's irrigation urgency
    Recommend {
        /// Crop name
        #[arg(long)]
        crop: String,

        /// Field area in m²
        #[arg(long)]
        area: f64,

        /// Weather snapshot file (.json or .yaml)
        #[arg(short, long)]
        weather: PathBuf,

        /// Reference ET0 in mm/day; estimated from the weather when omitted
        #[arg(long)]
        et0: Option<f64>,
    },
    /// List heat alerts over the forecast
    Heat {
        /// Weather snapshot file (.json or .yaml)
        #[arg(short, long)]
        weather: PathBuf,

        /// Days to scan
        #[arg(long)]
        days: Option<u32>,
    },
    /// Show the crop, soil and irrigation-method tables in effect
    Crops,
}
