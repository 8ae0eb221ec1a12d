pub mod config;
pub mod error;
pub mod generators;
pub mod graph;
pub mod logging;
pub mod maze;
pub mod solvers;

pub use error::{GraphError, MazeError};
pub use generators::{Generator, MazeBuilder, build_maze};
pub use graph::Graph;
pub use maze::{Coord, Maze, grid::surrounding_cells, render::render};
pub use solvers::shortest_path;
