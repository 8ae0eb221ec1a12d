use std::fmt;

use crate::maze::Coord;

/// Failures of [`Graph`](crate::graph::Graph) operations and graph queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError<N: fmt::Debug> {
    /// The operation referenced a node that is not in the graph.
    #[error("node {0:?} is not in the graph")]
    UnknownNode(N),
    /// The node being inserted already exists.
    #[error("node {0:?} already exists in the graph")]
    DuplicateNode(N),
    /// The edge being removed does not exist.
    #[error("there is no edge between {0:?} and {1:?}")]
    EdgeNotFound(N, N),
    /// Breadth-first search exhausted every reachable node without finding the target.
    #[error("no path from {start:?} to {end:?}")]
    NoPath { start: N, end: N },
}

/// Failures of maze construction and rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("maze width must be at least 1, got {0}")]
    InvalidWidth(usize),
    #[error("a maze of width {width} has {expected} cells, but the graph has {actual} nodes")]
    ShapeMismatch {
        width: usize,
        expected: usize,
        actual: usize,
    },
    #[error(transparent)]
    Graph(#[from] GraphError<Coord>),
}
