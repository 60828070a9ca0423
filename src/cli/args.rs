//! CLI argument definitions using clap
//!
//! Commands:
//! - neodb inspect (--pdes <designation> | --name <name>) [--verbose]
//! - neodb query [filters...] [--limit N] [--outfile <path>]

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::filters::{parse_bound, parse_date, FilterOptions};
use crate::observability::Severity;

/// neodb - Explore near-Earth objects and their close approaches
#[derive(Parser, Debug)]
#[command(name = "neodb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// NEO catalog (CSV); overrides the config file
    #[arg(long, global = true)]
    pub neofile: Option<PathBuf>,

    /// Close approach data (JSON); overrides the config file
    #[arg(long, global = true)]
    pub cadfile: Option<PathBuf>,

    /// Minimum log level (trace, info, warn, error, fatal)
    #[arg(long, global = true)]
    pub log_level: Option<Severity>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a single NEO by designation or name
    Inspect(InspectArgs),

    /// Stream close approaches matching the given criteria
    Query(QueryArgs),
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub target: InspectTarget,

    /// Also list the NEO's close approaches
    #[arg(short, long)]
    pub verbose: bool,
}

/// Exactly one of designation or name
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct InspectTarget {
    /// Primary designation of the NEO
    #[arg(long)]
    pub pdes: Option<String>,

    /// IAU name of the NEO
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// Only approaches on this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = date_arg)]
    pub date: Option<NaiveDate>,

    /// Only approaches on or after this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = date_arg)]
    pub start_date: Option<NaiveDate>,

    /// Only approaches on or before this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = date_arg)]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance (au)
    #[arg(long = "min-distance", value_parser = bound_arg)]
    pub distance_min: Option<f64>,

    /// Maximum approach distance (au)
    #[arg(long = "max-distance", value_parser = bound_arg)]
    pub distance_max: Option<f64>,

    /// Minimum relative velocity (km/s)
    #[arg(long = "min-velocity", value_parser = bound_arg)]
    pub velocity_min: Option<f64>,

    /// Maximum relative velocity (km/s)
    #[arg(long = "max-velocity", value_parser = bound_arg)]
    pub velocity_max: Option<f64>,

    /// Minimum NEO diameter (km)
    #[arg(long = "min-diameter", value_parser = bound_arg)]
    pub diameter_min: Option<f64>,

    /// Maximum NEO diameter (km)
    #[arg(long = "max-diameter", value_parser = bound_arg)]
    pub diameter_max: Option<f64>,

    /// Only potentially hazardous NEOs
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only NEOs that are not potentially hazardous
    #[arg(long)]
    pub not_hazardous: bool,

    /// Maximum number of results (0 for no limit)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Write results to a .csv or .json file instead of stdout
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,
}

impl QueryArgs {
    /// Filter options for `create_filters`
    pub fn filter_options(&self) -> FilterOptions {
        let hazardous = match (self.hazardous, self.not_hazardous) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };

        FilterOptions {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            distance_min: self.distance_min,
            distance_max: self.distance_max,
            velocity_min: self.velocity_min,
            velocity_max: self.velocity_max,
            diameter_min: self.diameter_min,
            diameter_max: self.diameter_max,
            hazardous,
        }
    }
}

fn date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

fn bound_arg(s: &str) -> Result<f64, String> {
    parse_bound(s).map_err(|e| e.to_string())
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
