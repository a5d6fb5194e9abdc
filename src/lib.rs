//! Generating perfect mazes.
//!
//! A maze here is a rectangular grid of cells, some pairs of neighboring cells
//! joined by passages. The mazes we generate are *perfect*: there is exactly
//! one path between any two cells. In graph terms, the passages are a spanning
//! tree of the grid.
//!
//! - `square::SquareGrid` builds the grid graph.
//!
//! - `generator` carves the passages with a randomized depth-first traversal.
//!
//! - `map::Maze` bundles the two, and `layout::RenderLayout` puts them in the
//!   form a renderer wants.
//!
//! Generation is reproducible: the same grid, origin and random stream always
//! produce the same maze. `xorshift::XorShift128Plus` provides a random stream
//! that won't change out from under you.

// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;

#[macro_use]
extern crate log;

extern crate rand;
extern crate rand_core;
extern crate serde;

#[macro_use]
extern crate serde_derive;

#[cfg_attr(test, macro_use)]
extern crate serde_json;

#[cfg(test)]
#[macro_use]
mod test_utils;

pub mod errors;
pub mod generator;
pub mod graph;
pub mod layout;
pub mod map;
pub mod square;
pub mod xorshift;

pub use errors::{Error, ErrorKind, Result, ResultExt};
pub use generator::{generate, Generation, NodeState, OpenEdges, Phase, Step};
pub use graph::{Edge, EdgeId, Graph, Node};
pub use layout::RenderLayout;
pub use map::{Maze, MazeParameters};
pub use square::SquareGrid;
pub use xorshift::XorShift128Plus;
