use clap::{Parser, builder::RangedU64ValueParser};

use crate::generators::Generator;

/// Environment variable holding the default seed.
pub const SEED_ENV: &str = "MAZEGRAPH_SEED";

/// Settings of a single maze run.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Number of cells along each side of the maze
    #[arg(default_value_t = 10, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub width: usize,

    /// Algorithm carving the passages
    #[arg(value_enum, default_value_t = Generator::Prim)]
    pub generator: Generator,

    /// Seed for the random number generator. A fresh OS seed is used when absent.
    #[arg(long, env = SEED_ENV)]
    pub seed: Option<u64>,

    /// Print the path from the top-left to the bottom-right cell
    #[arg(long)]
    pub solve: bool,
}
