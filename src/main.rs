extern crate clap;
extern crate env_logger;

#[macro_use]
extern crate log;

extern crate rand;
extern crate rmaze;
extern crate serde_json;

use rmaze::errors::*;
use rmaze::{Maze, MazeParameters, Node, RenderLayout};

use clap::Parser;

use std::io::{self, Write};
use std::path::PathBuf;

/// Generate a perfect maze, and print what a renderer needs to draw it as JSON.
///
/// Set RUST_LOG=debug to watch generation progress on stderr.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of rows of cells [default: 20]
    #[arg(long)]
    height: Option<usize>,

    /// Number of columns of cells [default: 40]
    #[arg(long)]
    width: Option<usize>,

    /// Row of the cell to start carving from [default: 0]
    #[arg(long)]
    origin_row: Option<usize>,

    /// Column of the cell to start carving from [default: 0]
    #[arg(long)]
    origin_col: Option<usize>,

    /// Random seed. Without one, every run produces a different maze.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file of maze parameters. Flags given on the command line
    /// override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Args {
    /// Override `parameters` with whatever was given on the command line.
    fn apply(&self, parameters: &mut MazeParameters) {
        if let Some(height) = self.height {
            parameters.rows = height;
        }
        if let Some(width) = self.width {
            parameters.cols = width;
        }
        let origin = parameters.origin;
        parameters.origin = Node::new(self.origin_row.unwrap_or(origin.row),
                                      self.origin_col.unwrap_or(origin.col));
        if self.seed.is_some() {
            parameters.seed = self.seed;
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(ref e) = run() {
        let stderr = &mut ::std::io::stderr();
        let errmsg = "Error writing to stderr";

        writeln!(stderr, "error: {}", e).expect(errmsg);

        for e in e.iter().skip(1) {
            writeln!(stderr, "caused by: {}", e).expect(errmsg);
        }

        // The backtrace is not always generated. Try to run this example
        // with `RUST_BACKTRACE=1`.
        if let Some(backtrace) = e.backtrace() {
            writeln!(stderr, "backtrace: {:?}", backtrace).expect(errmsg);
        }

        ::std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let mut parameters = match args.config {
        Some(ref path) => MazeParameters::from_json_file(path)
            .chain_err(|| "unable to load maze parameters")?,
        None => MazeParameters::default(),
    };
    args.apply(&mut parameters);

    // Pick the seed here rather than in `Maze::with_parameters`, so we can
    // report it.
    let seed = *parameters.seed.get_or_insert_with(rand::random);
    info!("generating {}x{} maze from {}, seed {}",
          parameters.rows, parameters.cols, parameters.origin, seed);

    let maze = Maze::with_parameters(&parameters)
        .chain_err(|| "maze generation failed")?;
    debug!("{} passages", maze.open.len());

    let layout = RenderLayout::new(&maze);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &layout)?;
    } else {
        serde_json::to_writer(&mut out, &layout)?;
    }
    writeln!(out)?;

    Ok(())
}
