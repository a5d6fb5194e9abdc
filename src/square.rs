//! Rectangular grids of square cells.

use errors::*;
use graph::{Edge, EdgeId, Graph, Node};

/// A grid of square cells, of a given number of rows and columns. A cell's
/// neighbors are those above, below, and to the left and right of it; diagonal
/// cells are not neighbors.
///
/// Nodes are numbered in row-major order. Edges are numbered in the order
/// they're discovered by walking the nodes in that order and, for each node,
/// taking the edge to the node below it (if any) and then the edge to the node
/// to its right (if any). This lists every edge exactly once.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SquareGrid {
    rows: usize,
    cols: usize,

    /// Every edge in the grid, indexed by `EdgeId`.
    edges: Vec<Edge>,

    /// For each node index, the ids of the edges touching that node, in
    /// increasing order.
    incident: Vec<Vec<EdgeId>>,
}

impl SquareGrid {
    /// Construct a `SquareGrid` with the given number of rows and columns.
    pub fn new(rows: usize, cols: usize) -> Result<SquareGrid> {
        let nodes = match rows.checked_mul(cols) {
            Some(n) if n > 0 => n,
            _ => bail!(ErrorKind::InvalidDimensions(rows, cols)),
        };

        // About twice the node count, so this can overflow even when `nodes`
        // didn't.
        let edge_count = match rows.checked_mul(cols - 1)
            .and_then(|across| cols.checked_mul(rows - 1)
                      .and_then(|down| across.checked_add(down)))
        {
            Some(n) => n,
            None => bail!(ErrorKind::InvalidDimensions(rows, cols)),
        };
        let mut edges = Vec::with_capacity(edge_count);
        let mut incident = vec![Vec::new(); nodes];

        for row in 0..rows {
            for col in 0..cols {
                let here = Node::new(row, col);
                let mut neighbors = Vec::with_capacity(2);
                if row + 1 < rows {
                    neighbors.push(Node::new(row + 1, col));
                }
                if col + 1 < cols {
                    neighbors.push(Node::new(row, col + 1));
                }

                for there in neighbors {
                    let id = edges.len();
                    edges.push(Edge::new(here, there));
                    incident[row * cols + col].push(id);
                    incident[there.row * cols + there.col].push(id);
                }
            }
        }
        assert_eq!(edges.len(), edge_count);

        // Edges reaching a node from above or from the left were pushed
        // before that node's own edges, so each list is already sorted.
        debug!("built {}x{} grid: {} nodes, {} edges", rows, cols, nodes, edges.len());

        Ok(SquareGrid { rows, cols, edges, incident })
    }

    pub fn rows(&self) -> usize { self.rows }

    pub fn cols(&self) -> usize { self.cols }
}

impl Graph for SquareGrid {
    fn node_count(&self) -> usize { self.rows * self.cols }

    fn edge_count(&self) -> usize { self.edges.len() }

    fn index(&self, node: Node) -> Option<usize> {
        if node.row < self.rows && node.col < self.cols {
            Some(node.row * self.cols + node.col)
        } else {
            None
        }
    }

    fn node(&self, index: usize) -> Node {
        assert!(index < self.node_count());
        Node::new(index / self.cols, index % self.cols)
    }

    fn edge(&self, id: EdgeId) -> Edge {
        self.edges[id]
    }

    fn neighbors(&self, node: Node) -> Vec<Node> {
        let index = match self.index(node) {
            Some(index) => index,
            None => return vec![],
        };

        self.incident[index].iter()
            .filter_map(|&id| self.edges[id].other(node))
            .collect()
    }

    fn edge_between(&self, u: Node, v: Node) -> Option<EdgeId> {
        let wanted = Edge::new(u, v);
        let index = self.index(u)?;
        self.incident[index].iter()
            .cloned()
            .find(|&id| self.edges[id] == wanted)
    }
}
