mod bfs;

pub use bfs::{distances, shortest_path};

use crate::maze::{Coord, Maze};

/// Finds the cell farthest from `start` and its distance in steps.
/// Ties are broken towards the cell that comes first in row-major order.
pub fn farthest_cell(maze: &Maze, start: Coord) -> Option<(Coord, usize)> {
    let distances = distances(maze.graph(), &start).ok()?;
    distances
        .into_iter()
        .max_by(|(a, da), (b, db)| da.cmp(db).then_with(|| (b.1, b.0).cmp(&(a.1, a.0))))
}
