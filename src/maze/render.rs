use crate::{error::MazeError, graph::Graph};

use super::Coord;

pub const WALL_BELOW: char = '_';
pub const WALL_RIGHT: char = '|';
pub const PASSAGE: char = ' ';

/// Draws a `width` x `width` grid graph as text.
///
/// The first line is the top border. Each following line is one row of cells:
/// a left border, then two characters per cell telling whether the cell is open
/// towards the cell below and towards the cell to its right.
///
/// ```text
///  ___
/// |_  |
/// |_ _|
/// ```
pub fn render(graph: &Graph<Coord>, width: usize) -> Result<String, MazeError> {
    if width == 0 {
        return Err(MazeError::InvalidWidth(width));
    }
    // No graph can hold more than usize::MAX nodes, so an overflowing square never matches
    let expected = width.checked_mul(width).unwrap_or(usize::MAX);
    if graph.node_count() != expected {
        return Err(MazeError::ShapeMismatch {
            width,
            expected,
            actual: graph.node_count(),
        });
    }

    // Top border, plus one line of 2 * width + 1 characters per row
    let mut text = String::with_capacity((width + 1) * (2 * width + 2));
    text.push(PASSAGE);
    (0..2 * width - 1).for_each(|_| text.push(WALL_BELOW));
    text.push('\n');

    for y in 0..width {
        text.push(WALL_RIGHT);
        for x in 0..width {
            let neighbors = graph.neighbors(&(x, y))?;
            text.push(if neighbors.contains(&(x, y + 1)) {
                PASSAGE
            } else {
                WALL_BELOW
            });
            text.push(if neighbors.contains(&(x + 1, y)) {
                PASSAGE
            } else {
                WALL_RIGHT
            });
        }
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::GraphError, maze::grid::grid_graph};

    #[test]
    fn test_render_single_cell() {
        let graph = grid_graph(1).unwrap();
        assert_eq!(render(&graph, 1).unwrap(), " _\n|_|\n");
    }

    #[test]
    fn test_render_passages() {
        let mut graph = grid_graph(2).unwrap();
        graph.add_edge(&(0, 0), &(1, 0)).unwrap();
        graph.add_edge(&(1, 0), &(1, 1)).unwrap();
        graph.add_edge(&(0, 1), &(1, 1)).unwrap();
        assert_eq!(render(&graph, 2).unwrap(), " ___\n|_  |\n|_ _|\n");
    }

    #[test]
    fn test_render_disconnected_grid_is_all_walls() {
        let graph = grid_graph(2).unwrap();
        assert_eq!(render(&graph, 2).unwrap(), " ___\n|_|_|\n|_|_|\n");
    }

    #[test]
    fn test_render_shape_mismatch() {
        let graph = grid_graph(3).unwrap();
        assert_eq!(
            render(&graph, 2),
            Err(MazeError::ShapeMismatch {
                width: 2,
                expected: 4,
                actual: 9
            })
        );
        assert_eq!(render(&graph, 0), Err(MazeError::InvalidWidth(0)));
    }

    #[test]
    fn test_render_overflowing_width() {
        let width = 1usize << (usize::BITS / 2);
        assert_eq!(
            render(&Graph::new(), width),
            Err(MazeError::ShapeMismatch {
                width,
                expected: usize::MAX,
                actual: 0
            })
        );
    }

    #[test]
    fn test_render_missing_cell() {
        // Right node count, wrong keys
        let mut graph = Graph::new();
        for cell in [(0, 0), (1, 0), (0, 1), (5, 5)] {
            graph.add_node(cell).unwrap();
        }
        assert_eq!(
            render(&graph, 2),
            Err(MazeError::Graph(GraphError::UnknownNode((1, 1))))
        );
    }
}
