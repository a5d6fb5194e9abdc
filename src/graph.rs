//! Nodes, edges, and the `Graph` trait the maze generator walks.

use std::fmt;

/// A cell of a rectangular grid, identified by its row and column.
///
/// Nodes order by row first, then column. `Edge` relies on this ordering to
/// put its endpoints in a canonical order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Node {
    pub row: usize,
    pub col: usize,
}

impl Node {
    pub fn new(row: usize, col: usize) -> Node {
        Node { row, col }
    }

    /// Return true if `self` and `other` differ by exactly one in exactly one
    /// coordinate.
    pub fn is_adjacent(&self, other: &Node) -> bool {
        fn diff(a: usize, b: usize) -> usize {
            if a > b { a - b } else { b - a }
        }
        diff(self.row, other.row) + diff(self.col, other.col) == 1
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The index of an edge in a graph's edge list.
pub type EdgeId = usize;

/// An unordered pair of nodes.
///
/// The endpoints are stored smaller-first, so `Edge::new(u, v)` and
/// `Edge::new(v, u)` are the same value, and hash and compare equal. There is
/// no way to build an `Edge` that remembers which way it was discovered.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
pub struct Edge {
    a: Node,
    b: Node,
}

impl Edge {
    pub fn new(u: Node, v: Node) -> Edge {
        if u <= v {
            Edge { a: u, b: v }
        } else {
            Edge { a: v, b: u }
        }
    }

    /// Return the edge's endpoints, smaller node first.
    pub fn endpoints(&self) -> (Node, Node) {
        (self.a, self.b)
    }

    /// Given one endpoint of this edge, return the other. Return `None` if
    /// `node` is not an endpoint.
    pub fn other(&self, node: Node) -> Option<Node> {
        if node == self.a {
            Some(self.b)
        } else if node == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// A graph of nodes and the edges between them.
///
/// The node and edge sets are fixed once the graph is built. Each node has a
/// dense index in `0..graph.node_count()`, and each edge a dense `EdgeId` in
/// `0..graph.edge_count()`; traversal state is kept in vectors indexed by
/// these.
pub trait Graph {
    /// Return the number of nodes in this graph.
    fn node_count(&self) -> usize;

    /// Return the number of edges in this graph.
    fn edge_count(&self) -> usize;

    /// Return the dense index of `node`, or `None` if `node` is not in the
    /// graph.
    fn index(&self, node: Node) -> Option<usize>;

    /// Return the node whose dense index is `index`.
    fn node(&self, index: usize) -> Node;

    /// Return the edge whose id is `id`.
    fn edge(&self, id: EdgeId) -> Edge;

    /// Return the nodes sharing an edge with `node`, in the order of those
    /// edges' ids.
    fn neighbors(&self, node: Node) -> Vec<Node>;

    /// Return the id of the edge joining `u` and `v`, in either order, or
    /// `None` if there is no such edge.
    fn edge_between(&self, u: Node, v: Node) -> Option<EdgeId>;

    /// Return true if `node` belongs to this graph.
    fn contains(&self, node: Node) -> bool {
        self.index(node).is_some()
    }

    /// Return an iterator over all nodes, in index order.
    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item=Node> + 'a> {
        Box::new((0..self.node_count()).map(move |i| self.node(i)))
    }

    /// Return an iterator over all edges, in id order.
    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item=Edge> + 'a> {
        Box::new((0..self.edge_count()).map(move |id| self.edge(id)))
    }
}
