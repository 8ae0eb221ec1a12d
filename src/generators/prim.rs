use std::collections::HashSet;

use indexmap::IndexSet;
use rand::Rng;

use super::MazeBuilder;
use crate::{
    error::MazeError,
    graph::Graph,
    maze::{
        Coord,
        grid::{cell_count, random_cell, surrounding_cells},
    },
};

/// Cells bordering the maze that have not been carved into it yet.
///
/// Backed by an insertion-ordered set so a random cell can be taken out by
/// swapping it with the last one.
#[derive(Debug, Default)]
pub struct Frontier {
    cells: IndexSet<Coord>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cell, returning `false` if it was already in the frontier.
    pub fn insert(&mut self, cell: Coord) -> bool {
        self.cells.insert(cell)
    }

    pub fn contains(&self, cell: &Coord) -> bool {
        self.cells.contains(cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Removes and returns a uniformly random cell, or `None` when empty.
    pub fn pop_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        if self.cells.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.cells.len());
        self.cells.swap_remove_index(idx)
    }
}

/// An in-progress randomized Prim's carve over a `width` x `width` grid.
///
/// Holds the cells already in the maze and the frontier around them. Each
/// [`step`](PrimCarver::step) moves one frontier cell into the maze.
#[derive(Debug)]
pub struct PrimCarver {
    width: usize,
    in_maze: HashSet<Coord>,
    frontier: Frontier,
}

impl PrimCarver {
    /// Puts a random cell in the maze and its surrounding cells in the frontier.
    pub fn start<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Result<Self, MazeError> {
        let mut carver = PrimCarver {
            width,
            in_maze: HashSet::with_capacity(cell_count(width)?),
            frontier: Frontier::new(),
        };
        let start = random_cell(width, rng);
        tracing::debug!("[prim] starting from {:?}", start);
        carver.in_maze.insert(start);
        carver.expand_frontier(start);
        Ok(carver)
    }

    pub fn in_maze(&self) -> &HashSet<Coord> {
        &self.in_maze
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Adds the cells surrounding `cell` that are not in the maze yet to the frontier.
    fn expand_frontier(&mut self, cell: Coord) {
        for neighbor in surrounding_cells(self.width, cell) {
            if !self.in_maze.contains(&neighbor) {
                // Cells already in the frontier are left alone
                self.frontier.insert(neighbor);
            }
        }
    }

    /// Carves a random frontier cell into the maze through a random neighbor already in it.
    /// Returns the carved cell, or `None` once the frontier is exhausted.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        graph: &mut Graph<Coord>,
        rng: &mut R,
    ) -> Result<Option<Coord>, MazeError> {
        let Some(cell) = self.frontier.pop_random(rng) else {
            return Ok(None);
        };

        // There is at least one, since the cell entered the frontier through it
        let carved = surrounding_cells(self.width, cell)
            .filter(|neighbor| self.in_maze.contains(neighbor))
            .collect::<Vec<_>>();
        let neighbor = carved[rng.random_range(0..carved.len())];

        graph.add_edge(&cell, &neighbor)?;
        tracing::trace!("[prim] carved {:?} -> {:?}", neighbor, cell);
        self.in_maze.insert(cell);
        self.expand_frontier(cell);
        Ok(Some(cell))
    }
}

/// Randomized Prim's algorithm: grows the maze one frontier cell at a time,
/// joining each new cell to a random neighbor that is already in the maze.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimBuilder;

impl MazeBuilder for PrimBuilder {
    fn carve<R: Rng + ?Sized>(
        &self,
        graph: &mut Graph<Coord>,
        width: usize,
        rng: &mut R,
    ) -> Result<(), MazeError> {
        let mut carver = PrimCarver::start(width, rng)?;
        while carver.step(graph, rng)?.is_some() {}
        tracing::debug!("[prim] maze holds {} cells", carver.in_maze.len());
        Ok(())
    }
}
