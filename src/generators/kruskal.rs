use rand::Rng;

use super::MazeBuilder;
use crate::{
    error::MazeError,
    graph::Graph,
    maze::{
        Coord,
        grid::{cell_count, cell_index, grid_cells, surrounding_cells},
    },
};

/// Partition of the grid cells into connectivity classes.
///
/// A disjoint-set forest over row-major cell indices. Lookups halve the path they
/// walk and the smaller class is always hung below the larger one, so a class is
/// found in near-constant time no matter which of its members is asked.
#[derive(Debug, Clone)]
pub struct ConnectedSet {
    width: usize,
    parent: Vec<usize>,
    /// Member count, only meaningful at class roots
    size: Vec<usize>,
}

impl ConnectedSet {
    /// Puts every cell of a `width` x `width` grid in a class of its own.
    pub fn new(width: usize) -> Result<Self, MazeError> {
        let count = cell_count(width)?;
        Ok(ConnectedSet {
            width,
            parent: (0..count).collect(),
            size: vec![1; count],
        })
    }

    /// Returns the current class of `cell`. Two cells share a class iff they are connected.
    pub fn class_of(&mut self, cell: Coord) -> usize {
        let mut idx = cell_index(self.width, cell);
        while self.parent[idx] != idx {
            let grandparent = self.parent[self.parent[idx]];
            self.parent[idx] = grandparent;
            idx = grandparent;
        }
        idx
    }

    pub fn same_class(&mut self, a: Coord, b: Coord) -> bool {
        self.class_of(a) == self.class_of(b)
    }

    /// Number of cells sharing the class of `cell`.
    pub fn class_size(&mut self, cell: Coord) -> usize {
        let root = self.class_of(cell);
        self.size[root]
    }

    /// Merges the classes of `a` and `b`. Returns `false` if they were already one class.
    pub fn merge(&mut self, a: Coord, b: Coord) -> bool {
        let (root_a, root_b) = (self.class_of(a), self.class_of(b));
        if root_a == root_b {
            return false;
        }
        let (large, small) = if self.size[root_a] >= self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        true
    }
}

/// Vertex-driven randomized Kruskal's algorithm: repeatedly picks a random cell that
/// still has a surrounding cell in another class, and joins the two.
#[derive(Debug, Clone, Copy, Default)]
pub struct KruskalBuilder;

impl MazeBuilder for KruskalBuilder {
    fn carve<R: Rng + ?Sized>(
        &self,
        graph: &mut Graph<Coord>,
        width: usize,
        rng: &mut R,
    ) -> Result<(), MazeError> {
        let mut classes = ConnectedSet::new(width)?;
        // Cells that may still have a surrounding cell outside their class
        let mut active = grid_cells(width).collect::<Vec<_>>();

        while !active.is_empty() {
            let idx = rng.random_range(0..active.len());
            let cell = active[idx];

            let outside = surrounding_cells(width, cell)
                .filter(|&neighbor| !classes.same_class(cell, neighbor))
                .collect::<Vec<_>>();

            if outside.is_empty() {
                // Already connected to all its surrounding cells, directly or transitively
                active.swap_remove(idx);
                continue;
            }

            let neighbor = outside[rng.random_range(0..outside.len())];
            graph.add_edge(&cell, &neighbor)?;
            classes.merge(cell, neighbor);
            tracing::trace!("[kruskal] joined {:?} and {:?}", cell, neighbor);
        }

        tracing::debug!(
            "[kruskal] all {} cells share one class",
            classes.class_size((0, 0))
        );
        Ok(())
    }
}
