use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use route_solver::Strategy;

#[derive(Parser, Debug)]
#[command(name = "route-solver")]
#[command(about = "Route finder comparing uninformed and heuristic graph searches")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Adjacency file, one `<location> <neighbor>...` record per line
    #[arg(short, long, value_name = "FILE", default_value = "Adjacencies.txt")]
    pub adjacency: PathBuf,

    /// Coordinates file, one `<location>,<lat>,<lon>` record per line
    #[arg(short, long, value_name = "FILE", default_value = "coordinates.csv")]
    pub coordinates: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prompt for searches until told to stop (default)
    Interactive,

    /// Run a single search and print the report
    Search {
        /// Start location
        from: String,

        /// Goal location
        to: String,

        /// Search strategy to use
        #[arg(value_enum)]
        algorithm: Strategy,
    },

    /// Run every strategy between two locations and compare them
    Benchmark {
        /// Start location
        from: String,

        /// Goal location
        to: String,
    },
}
