use std::time::Instant;

use clap::Parser;
use mazegraph::{
    Generator, Maze,
    generators::rng_from_seed,
    logging,
};

const PROFILE_WIDTH: usize = u8::MAX as usize;

/// Times generating and solving large mazes with every generator.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Mazes built per generator
    #[arg(default_value_t = 10)]
    iterations: usize,
}

fn main() -> std::io::Result<()> {
    let num_iters = Args::parse().iterations;
    let _guard = logging::init("mazegraph-profile.log").map_err(std::io::Error::other)?;

    for generator in Generator::ALL {
        let mut rng = rng_from_seed(Some(0));
        let started = Instant::now();
        for _ in 0..num_iters {
            let maze = Maze::generate(PROFILE_WIDTH, generator, &mut rng)
                .map_err(std::io::Error::other)?;
            maze.solve(maze.entrance(), maze.exit())
                .map_err(std::io::Error::other)?;
        }
        let elapsed = started.elapsed();
        tracing::info!(
            "[profile] {} x{}: {:?} total, {:?} per maze",
            generator,
            num_iters,
            elapsed,
            elapsed / num_iters.max(1) as u32
        );
        println!("{}: {:?} for {} mazes", generator, elapsed, num_iters);
    }
    Ok(())
}
