use errors::*;
use generator::{self, OpenEdges};
use graph::{Graph, Node};
use square::SquareGrid;
use xorshift::XorShift128Plus;

use rand::{Rng, SeedableRng};
use serde_json;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Everything needed to generate a particular maze.
///
/// These can be read from a JSON file; any field left out takes its default
/// value.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeParameters {
    /// The number of rows of cells.
    pub rows: usize,

    /// The number of columns of cells.
    pub cols: usize,

    /// The cell the traversal starts from.
    pub origin: Node,

    /// The seed for the random number generator. If this is `None`, each
    /// generation picks a fresh seed, and the maze is different every time.
    pub seed: Option<u64>,
}

impl Default for MazeParameters {
    fn default() -> MazeParameters {
        MazeParameters {
            rows: 20,
            cols: 40,
            origin: Node::new(0, 0),
            seed: None,
        }
    }
}

impl MazeParameters {
    /// Read parameters from the JSON file at `path`.
    pub fn from_json_file(path: &Path) -> Result<MazeParameters> {
        let file = File::open(path)
            .chain_err(|| format!("opening parameter file {}", path.display()))?;
        let parameters = serde_json::from_reader(BufReader::new(file))
            .chain_err(|| format!("parsing parameter file {}", path.display()))?;
        Ok(parameters)
    }
}

/// A generated maze.
///
/// A `Maze` holds everything a renderer needs: the graph of cells, and which
/// of the graph's edges are passages. None of it changes once generated.
#[derive(Clone, Debug)]
pub struct Maze<G: Graph = SquareGrid> {
    /// The graph of cells and the edges between neighboring cells.
    pub graph: G,

    /// The cell the traversal started from.
    pub origin: Node,

    /// The edges of `graph` that are passages. All others are walls.
    pub open: OpenEdges,
}

impl Maze<SquareGrid> {
    /// Generate a maze on a `rows` by `cols` grid, starting from `origin` and
    /// drawing random numbers from `rng`.
    pub fn generate<R: Rng + ?Sized>(rows: usize, cols: usize, origin: Node, rng: &mut R)
                                     -> Result<Maze>
    {
        let graph = SquareGrid::new(rows, cols)?;
        Maze::over(graph, origin, rng)
    }

    /// Generate the maze `parameters` describe. If they don't specify a seed,
    /// use a random one.
    pub fn with_parameters(parameters: &MazeParameters) -> Result<Maze> {
        let seed = parameters.seed.unwrap_or_else(::rand::random);
        let mut rng = XorShift128Plus::seed_from_u64(seed);
        Maze::generate(parameters.rows, parameters.cols, parameters.origin, &mut rng)
    }
}

impl<G: Graph> Maze<G> {
    /// Generate a maze over an arbitrary graph.
    pub fn over<R: Rng + ?Sized>(graph: G, origin: Node, rng: &mut R) -> Result<Maze<G>> {
        let open = generator::generate(&graph, origin, rng)?;
        Ok(Maze { graph, origin, open })
    }

    /// Return true if the maze's passages form a spanning tree of its graph:
    /// every cell can reach every other cell, by exactly one path.
    ///
    /// A maze generated over a connected graph always is. Since a graph with
    /// `n` nodes whose edges connect them all is a tree exactly when it has
    /// `n - 1` edges, this just counts the passages and checks that every
    /// cell is reachable from the origin.
    pub fn is_perfect(&self) -> bool {
        let nodes = self.graph.node_count();
        if self.open.len() + 1 != nodes {
            return false;
        }

        let origin = match self.graph.index(self.origin) {
            Some(index) => index,
            None => return false,
        };

        let mut reached = vec![false; nodes];
        reached[origin] = true;
        let mut count = 1;
        let mut pending = vec![self.origin];
        while let Some(node) = pending.pop() {
            for neighbor in self.graph.neighbors(node) {
                if !self.open.is_open(node, neighbor) {
                    continue;
                }
                if let Some(index) = self.graph.index(neighbor) {
                    if !reached[index] {
                        reached[index] = true;
                        count += 1;
                        pending.push(neighbor);
                    }
                }
            }
        }

        count == nodes
    }
}
