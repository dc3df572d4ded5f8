//! NeoDB CLI - Explore near-Earth objects and their close approaches.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{inspect, query};

#[derive(Parser)]
#[command(name = "neodb")]
#[command(about = "Explore near-Earth objects and their close approaches")]
struct Cli {
    /// Path to the CSV file of near-Earth objects
    #[arg(long, global = true, env = "NEODB_NEOFILE", default_value = "data/neos.csv")]
    neofile: PathBuf,
    /// Path to the JSON file of close approaches
    #[arg(long, global = true, env = "NEODB_CADFILE", default_value = "data/cad.json")]
    cadfile: PathBuf,
    /// Skip malformed rows instead of failing
    #[arg(long, global = true)]
    permissive: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a near-Earth object by designation or name
    #[command(group(ArgGroup::new("target").required(true).args(["pdes", "name"])))]
    Inspect {
        /// Primary designation (case-insensitive)
        #[arg(long)]
        pdes: Option<String>,
        /// IAU name (case-insensitive)
        #[arg(long)]
        name: Option<String>,
        /// Also list the object's close approaches
        #[arg(short, long)]
        verbose: bool,
    },
    /// Query close approaches matching the given criteria
    Query(QueryArgs),
}

/// Criteria and output options for `neodb query`.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Only approaches on this date (YYYY-MM-DD)
    #[arg(long, conflicts_with_all = ["start_date", "end_date"])]
    pub date: Option<chrono::NaiveDate>,
    /// Only approaches on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<chrono::NaiveDate>,
    /// Only approaches on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<chrono::NaiveDate>,
    /// Minimum approach distance (au)
    #[arg(long)]
    pub min_distance: Option<f64>,
    /// Maximum approach distance (au)
    #[arg(long)]
    pub max_distance: Option<f64>,
    /// Minimum relative velocity (km/s)
    #[arg(long)]
    pub min_velocity: Option<f64>,
    /// Maximum relative velocity (km/s)
    #[arg(long)]
    pub max_velocity: Option<f64>,
    /// Minimum object diameter (km)
    #[arg(long)]
    pub min_diameter: Option<f64>,
    /// Maximum object diameter (km)
    #[arg(long)]
    pub max_diameter: Option<f64>,
    /// Only potentially hazardous objects
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,
    /// Only objects that are not potentially hazardous
    #[arg(long)]
    pub not_hazardous: bool,
    /// Stop after N results (0 for unlimited; default 10 when printing)
    #[arg(long)]
    pub limit: Option<usize>,
    /// Write results to a .csv or .json file instead of printing them
    #[arg(long)]
    pub outfile: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = commands::open_store(&cli.neofile, &cli.cadfile, cli.permissive).and_then(
        |store| match cli.command {
            Commands::Inspect {
                pdes,
                name,
                verbose,
            } => inspect::run(&store, pdes, name, verbose),
            Commands::Query(args) => query::run(&store, args),
        },
    );

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
