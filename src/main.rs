//! CLI for maze construction

use clap::{Parser, ValueEnum};
use mazebuilder::builder::{GameDirector, MazeBuilder, NewMazeBuilder, StandardMazeBuilder};

/// Construction policy to run
#[derive(ValueEnum, Clone, Copy, Debug)]
enum BuilderKind {
    /// Plain-walled rooms, one door shared north/south
    Standard,
    /// Bare rooms, independent wooden doors east/west
    New,
    /// Standard first, then new
    Both,
}

/// Construct demonstration mazes and print their layouts
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Builder variant to construct with
    #[arg(short, long, value_enum, default_value = "both")]
    builder: BuilderKind,
}

/// Run the director against each selected builder, print the mazes
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.builder {
        BuilderKind::Standard => construct_and_print(StandardMazeBuilder::new())?,
        BuilderKind::New => construct_and_print(NewMazeBuilder::new())?,
        BuilderKind::Both => {
            construct_and_print(StandardMazeBuilder::new())?;
            construct_and_print(NewMazeBuilder::new())?;
        }
    }
    Ok(())
}

fn construct_and_print(builder: impl MazeBuilder) -> anyhow::Result<()> {
    let maze = GameDirector::new(builder).construct()?;
    print!("{}", maze);
    Ok(())
}
