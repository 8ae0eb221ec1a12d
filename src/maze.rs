pub mod grid;
pub mod render;

use std::fmt;

use rand::Rng;

use crate::{
    error::{GraphError, MazeError},
    generators::{Generator, build_maze},
    graph::Graph,
    solvers::shortest_path,
};

/// Grid coordinate `(x, y)` of a maze cell: `x` counts columns from the left,
/// `y` counts rows from the top.
pub type Coord = (usize, usize);

/// A perfect maze over a `width` x `width` grid.
///
/// The passages form a spanning tree of the grid graph, so exactly one simple
/// path connects any two cells.
#[derive(Debug, Clone)]
pub struct Maze {
    graph: Graph<Coord>,
    width: usize,
}

impl Maze {
    /// Generates a new maze with the given generator, drawing every random choice from `rng`.
    pub fn generate<R: Rng + ?Sized>(
        width: usize,
        generator: Generator,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        let graph = build_maze(width, generator, rng)?;
        Ok(Maze { graph, width })
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn graph(&self) -> &Graph<Coord> {
        &self.graph
    }

    pub fn into_graph(self) -> Graph<Coord> {
        self.graph
    }

    /// The top-left cell.
    pub fn entrance(&self) -> Coord {
        (0, 0)
    }

    /// The bottom-right cell.
    pub fn exit(&self) -> Coord {
        (self.width - 1, self.width - 1)
    }

    /// Picks a uniformly random cell of the maze.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Coord {
        grid::random_cell(self.width, rng)
    }

    /// Draws the maze as text. See [`render::render`] for the format.
    pub fn render(&self) -> Result<String, MazeError> {
        render::render(&self.graph, self.width)
    }

    /// Finds the path through the maze from `start` to `end`, both inclusive.
    pub fn solve(&self, start: Coord, end: Coord) -> Result<Vec<Coord>, GraphError<Coord>> {
        shortest_path(&self.graph, &start, &end)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::rng_from_seed;

    #[test]
    fn test_maze_corners() {
        let maze = Maze::generate(5, Generator::Prim, &mut rng_from_seed(Some(3))).unwrap();
        assert_eq!(maze.width(), 5);
        assert_eq!(maze.entrance(), (0, 0));
        assert_eq!(maze.exit(), (4, 4));
    }

    #[test]
    fn test_solve_from_entrance_to_exit() {
        for generator in Generator::ALL {
            let maze = Maze::generate(6, generator, &mut rng_from_seed(Some(11))).unwrap();
            let path = maze.solve(maze.entrance(), maze.exit()).unwrap();
            assert_eq!(path.first(), Some(&maze.entrance()));
            assert_eq!(path.last(), Some(&maze.exit()));
            // Each step moves through an existing passage
            assert!(
                path.windows(2)
                    .all(|step| maze.graph().adjacent(&step[0], &step[1]).unwrap())
            );
        }
    }

    #[test]
    fn test_render_twice_is_identical() {
        let maze = Maze::generate(8, Generator::Kruskal, &mut rng_from_seed(Some(5))).unwrap();
        let first = maze.render().unwrap();
        let second = maze.render().unwrap();
        assert_eq!(first, second);
        assert_eq!(maze.to_string(), first);
    }

    #[test]
    fn test_two_by_two_maze_has_three_openings() {
        for generator in Generator::ALL {
            for seed in 0..20 {
                let maze = Maze::generate(2, generator, &mut rng_from_seed(Some(seed))).unwrap();
                assert_eq!(maze.graph().edge_count(), 3);

                let text = maze.render().unwrap();
                let lines = text.lines().collect::<Vec<_>>();
                assert_eq!(lines.len(), 3);
                assert_eq!(lines[0], " ___");
                for line in &lines[1..] {
                    assert!(line.starts_with('|') && line.ends_with('|'));
                    assert_eq!(line.len(), 5);
                }
                // The bottom row always sits on the outer border
                assert!(lines[2].starts_with("|_") && lines[2].ends_with("_|"));
                let openings = lines[1..]
                    .iter()
                    .map(|line| line.chars().filter(|&c| c == render::PASSAGE).count())
                    .sum::<usize>();
                assert_eq!(openings, 3);
            }
        }
    }

    #[test]
    fn test_random_cell_in_bounds() {
        let mut rng = rng_from_seed(Some(1));
        let maze = Maze::generate(3, Generator::Prim, &mut rng).unwrap();
        for _ in 0..50 {
            let (x, y) = maze.random_cell(&mut rng);
            assert!(x < 3 && y < 3);
        }
    }

    #[test]
    fn test_invalid_width() {
        let err = Maze::generate(0, Generator::Kruskal, &mut rng_from_seed(Some(0))).unwrap_err();
        assert_eq!(err, MazeError::InvalidWidth(0));
    }
}
