use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info",
        global = true
    )]
    pub log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Packs the wires of a harness and computes the bundle diameter
    Diameter {
        #[arg(short, long, value_name = "FILE")]
        input_file: PathBuf,
        #[arg(short, long, value_name = "FOLDER")]
        solution_folder: PathBuf,
        /// Jacket thickness in mm, overrides the margin of the harness file
        #[arg(short, long)]
        margin: Option<f64>,
    },
    /// Quick diameter estimate from the summed wire areas
    Estimate {
        #[arg(short, long, value_name = "FILE")]
        input_file: PathBuf,
    },
    /// Current limit of a wire in a bundle
    Current {
        #[arg(short, long)]
        wire_type: String,
        /// Number of wires in the bundle
        #[arg(short, long)]
        n_wires: usize,
        /// Percentage of the wires carrying current: 20, 40, 60, 80 or 100
        #[arg(short = 'p', long, default_value_t = 100)]
        loading: u32,
        #[arg(short = 'f', long, default_value_t = 1.0)]
        safety_factor: f64,
    },
}
