use std::{
    collections::HashSet,
    io::{Stdout, Write},
};

use clap::Parser;
use crossterm::{
    queue,
    style::{self, Attribute, Color, Stylize},
};

use mazegraph::{
    config::Config,
    generators::rng_from_seed,
    logging,
    maze::{Coord, Maze},
    solvers::farthest_cell,
};

/// Prints the rendered maze, highlighting the floor of every cell on `path`.
fn print_maze(stdout: &mut Stdout, text: &str, path: &HashSet<Coord>) -> std::io::Result<()> {
    for (line_no, line) in text.lines().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            // Row lines start after the top border; cell x owns the character at 2x + 1
            let on_path = line_no > 0
                && col % 2 == 1
                && path.contains(&((col - 1) / 2, line_no - 1));
            let styled = if on_path {
                ch.with(Color::Black).on(Color::Yellow)
            } else {
                ch.with(Color::White)
            };
            queue!(stdout, style::PrintStyledContent(styled))?;
        }
        queue!(stdout, style::Print("\r\n"))?;
    }
    stdout.flush()
}

fn main() -> std::io::Result<()> {
    let config = Config::parse();
    let _guard = logging::init("mazegraph.log").map_err(std::io::Error::other)?;
    tracing::info!("[app] starting with {:?}", config);

    let mut rng = rng_from_seed(config.seed);
    let maze =
        Maze::generate(config.width, config.generator, &mut rng).map_err(std::io::Error::other)?;
    let text = maze.render().map_err(std::io::Error::other)?;

    let mut stdout = std::io::stdout();
    if !config.solve {
        print_maze(&mut stdout, &text, &HashSet::new())?;
        return Ok(());
    }

    let path = maze
        .solve(maze.entrance(), maze.exit())
        .map_err(std::io::Error::other)?;
    print_maze(&mut stdout, &text, &path.iter().copied().collect())?;
    queue!(
        stdout,
        style::PrintStyledContent(
            format!(
                "{}: {} steps from {:?} to {:?}\r\n",
                config.generator,
                path.len() - 1,
                maze.entrance(),
                maze.exit()
            )
            .with(Color::Green)
            .attribute(Attribute::Bold)
        )
    )?;
    if let Some((cell, distance)) = farthest_cell(&maze, maze.entrance()) {
        queue!(
            stdout,
            style::PrintStyledContent(
                format!("Farthest cell: {:?}, {} steps away\r\n", cell, distance).with(Color::Blue)
            )
        )?;
    }
    stdout.flush()?;
    tracing::info!("[app] solved in {} steps", path.len() - 1);
    Ok(())
}
