use rand::{Rng, SeedableRng, rngs::StdRng};

mod kruskal;
mod prim;

pub use kruskal::{ConnectedSet, KruskalBuilder};
pub use prim::{Frontier, PrimBuilder, PrimCarver};

use crate::{
    error::MazeError,
    graph::Graph,
    maze::{Coord, grid::grid_graph},
};

/// Seeds the maze RNG from `seed`, or from the operating system when there is none.
/// Equal seeds replay the same sequence of choices, and therefore the same maze.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// A randomized strategy that turns an edgeless grid graph into a perfect maze.
pub trait MazeBuilder {
    /// Adds edges to `graph`, which holds every cell of a `width` x `width` grid and no edges,
    /// until they form a spanning tree of the grid. Every random choice is drawn from `rng`.
    fn carve<R: Rng + ?Sized>(
        &self,
        graph: &mut Graph<Coord>,
        width: usize,
        rng: &mut R,
    ) -> Result<(), MazeError>;
}

/// Maze generator selector, named `prim` or `kruskal` on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Generator {
    /// Randomized Prim's algorithm
    Prim,
    /// Randomized Kruskal's algorithm
    Kruskal,
}

impl Generator {
    pub const ALL: [Generator; 2] = [Generator::Prim, Generator::Kruskal];
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
        }
    }
}

/// Builds a perfect maze over a `width` x `width` grid with the selected generator.
pub fn build_maze<R: Rng + ?Sized>(
    width: usize,
    generator: Generator,
    rng: &mut R,
) -> Result<Graph<Coord>, MazeError> {
    let mut graph = grid_graph(width)?;
    tracing::debug!("[generate] {}x{} maze with {}", width, width, generator);
    match generator {
        Generator::Prim => PrimBuilder.carve(&mut graph, width, rng)?,
        Generator::Kruskal => KruskalBuilder.carve(&mut graph, width, rng)?,
    }
    tracing::debug!("[generate] finished with {} passages", graph.edge_count());
    Ok(graph)
}
