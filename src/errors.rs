//! Error types for maze construction and generation.

use graph::{Edge, Node};

error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
    }

    errors {
        // A grid needs at least one row and one column, and no more cells
        // than a `usize` can count.
        InvalidDimensions(rows: usize, cols: usize) {
            description("invalid grid dimensions")
            display("invalid grid dimensions: {} rows by {} columns", rows, cols)
        }

        // The traversal was asked to start at a node the graph doesn't have.
        InvalidOrigin(origin: Node) {
            description("origin is not a node of the graph")
            display("origin {} is not a node of the graph", origin)
        }

        // The generator tried to open an edge the graph never built. This
        // is a bug in the graph or the generator, not bad input.
        InternalInvariantViolation(edge: Edge) {
            description("traversal crossed an edge missing from the graph")
            display("traversal crossed edge {}, which is missing from the graph", edge)
        }
    }
}
