use rand::Rng;

use crate::{error::MazeError, graph::Graph};

use super::Coord;

/// Get the cells surrounding a cell of a `width` x `width` grid.
/// A surrounding cell is one step away in the cardinal directions (left, right, up, down)
/// and lies within the grid on both axes.
pub fn surrounding_cells(width: usize, coord: Coord) -> impl Iterator<Item = Coord> {
    let (x, y) = coord;
    [
        // NOTE: This way of handling underflow/overflow is overflow-safe.
        // When x or y is 0, x - 1 or y - 1 wraps to usize::MAX,
        // and is automatically filtered out in the bounds check.
        // x + 1 and y + 1 saturate at usize::MAX, which no width can contain.
        (x.wrapping_sub(1), y),
        (x.saturating_add(1), y),
        (x, y.wrapping_sub(1)),
        (x, y.saturating_add(1)),
    ]
    .into_iter()
    .filter(move |&(nx, ny)| nx < width && ny < width)
}

/// Every cell of a `width` x `width` grid, row by row.
pub fn grid_cells(width: usize) -> impl Iterator<Item = Coord> {
    (0..width).flat_map(move |y| (0..width).map(move |x| (x, y)))
}

/// Flattens a cell into its row-major position.
pub fn cell_index(width: usize, coord: Coord) -> usize {
    coord.1 * width + coord.0
}

/// Picks a uniformly random cell of the grid. `width` must be at least 1.
pub fn random_cell<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Coord {
    (rng.random_range(0..width), rng.random_range(0..width))
}

/// Number of cells in a `width` x `width` grid.
/// Fails for an empty grid and for one whose cell count does not fit in `usize`.
pub fn cell_count(width: usize) -> Result<usize, MazeError> {
    match width.checked_mul(width) {
        Some(count) if count > 0 => Ok(count),
        _ => Err(MazeError::InvalidWidth(width)),
    }
}

/// Creates a graph holding every cell of the grid and no edges.
pub fn grid_graph(width: usize) -> Result<Graph<Coord>, MazeError> {
    let mut graph = Graph::with_capacity(cell_count(width)?);
    for cell in grid_cells(width) {
        graph.add_node(cell)?;
    }
    Ok(graph)
}
