//! The data a renderer needs to draw a maze.
//!
//! This module doesn't draw anything. It lays a `Maze` out on a plotting plane
//! and says which lines to draw, in a form that serializes cleanly to JSON for
//! whatever program does the drawing.
//!
//! # Coordinates
//!
//! A node at `(row, col)` sits at the point `(col, -row)` on the plane: columns
//! run along the positive x axis, and rows run down the negative y axis. This
//! way the first row is at the top and the maze grows downward, whatever way
//! the renderer's y axis points.

use graph::{Graph, Node};
use map::Maze;

/// A point on the plotting plane.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct PlanePt(pub [i64; 2]);

impl PlanePt {
    /// Return the point at which `node` should be drawn.
    pub fn of(node: Node) -> PlanePt {
        PlanePt([node.col as i64, -(node.row as i64)])
    }
}

/// A node and where to draw it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct NodePosition {
    pub node: Node,
    pub point: PlanePt,
}

/// An edge of the graph, and whether the renderer should draw it.
///
/// `weight` is 1 for a passage and 0 for a wall, so a renderer that uses it
/// as a line width draws exactly the passages.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct EdgeLine {
    pub from: Node,
    pub to: Node,
    pub weight: u8,
}

/// Everything a renderer needs to draw a maze.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RenderLayout {
    pub rows: usize,
    pub cols: usize,

    /// Every node of the maze, in the graph's node order.
    pub nodes: Vec<NodePosition>,

    /// Every edge of the graph, passage or wall, in edge id order.
    pub edges: Vec<EdgeLine>,
}

impl RenderLayout {
    pub fn new<G: Graph>(maze: &Maze<G>) -> RenderLayout {
        let nodes: Vec<NodePosition> = maze.graph.nodes()
            .map(|node| NodePosition { node, point: PlanePt::of(node) })
            .collect();

        let edges = maze.graph.edges()
            .enumerate()
            .map(|(id, edge)| {
                let (from, to) = edge.endpoints();
                EdgeLine { from, to, weight: if maze.open.is_open_id(id) { 1 } else { 0 } }
            })
            .collect();

        // The extent of the grid, as one past the largest row and column.
        let rows = nodes.iter().map(|p| p.node.row + 1).max().unwrap_or(0);
        let cols = nodes.iter().map(|p| p.node.col + 1).max().unwrap_or(0);

        RenderLayout { rows, cols, nodes, edges }
    }

    /// Return the lines a renderer should actually draw: the passages.
    pub fn passages<'a>(&'a self) -> Box<dyn Iterator<Item=(PlanePt, PlanePt)> + 'a> {
        Box::new(self.edges.iter()
                 .filter(|line| line.weight > 0)
                 .map(|line| (PlanePt::of(line.from), PlanePt::of(line.to))))
    }
}

#[cfg(test)]
mod tests {
    use graph::Node;
    use map::Maze;
    use super::{EdgeLine, PlanePt, RenderLayout};
    use xorshift::XorShift128Plus;

    use serde_json;

    fn n(row: usize, col: usize) -> Node { Node::new(row, col) }

    #[test]
    fn positions() {
        assert_eq!(PlanePt::of(n(0, 0)), PlanePt([0, 0]));
        assert_eq!(PlanePt::of(n(0, 3)), PlanePt([3, 0]));
        assert_eq!(PlanePt::of(n(2, 0)), PlanePt([0, -2]));
        assert_eq!(PlanePt::of(n(4, 7)), PlanePt([7, -4]));
    }

    #[test]
    fn two_by_two() {
        let maze = Maze::generate(2, 2, n(0, 0), &mut XorShift128Plus::new([1, 4])).unwrap();
        let layout = RenderLayout::new(&maze);

        assert_eq!((layout.rows, layout.cols), (2, 2));
        assert_eq!(layout.nodes.iter().map(|p| p.point).collect::<Vec<_>>(),
                   vec![PlanePt([0, 0]), PlanePt([1, 0]), PlanePt([0, -1]), PlanePt([1, -1])]);
        assert_eq!(layout.edges,
                   vec![EdgeLine { from: n(0, 0), to: n(1, 0), weight: 0 },
                        EdgeLine { from: n(0, 0), to: n(0, 1), weight: 1 },
                        EdgeLine { from: n(0, 1), to: n(1, 1), weight: 1 },
                        EdgeLine { from: n(1, 0), to: n(1, 1), weight: 1 }]);

        assert_same_elements!(layout.passages().collect::<Vec<_>>(),
                              vec![(PlanePt([0, 0]), PlanePt([1, 0])),
                                   (PlanePt([1, 0]), PlanePt([1, -1])),
                                   (PlanePt([0, -1]), PlanePt([1, -1]))]);
    }

    #[test]
    fn weights_count_passages() {
        let maze = Maze::generate(7, 11, n(3, 3), &mut XorShift128Plus::new([5, 6])).unwrap();
        let layout = RenderLayout::new(&maze);
        assert_eq!(layout.nodes.len(), 77);
        assert_eq!(layout.edges.len(), 7 * 10 + 11 * 6);
        let total: usize = layout.edges.iter().map(|line| line.weight as usize).sum();
        assert_eq!(total, 76);
        assert_eq!(layout.passages().count(), 76);
    }

    #[test]
    fn json_shape() {
        let maze = Maze::generate(1, 2, n(0, 0), &mut XorShift128Plus::new([1, 4])).unwrap();
        let json = serde_json::to_value(&RenderLayout::new(&maze)).unwrap();
        assert_eq!(json, json!({
            "rows": 1,
            "cols": 2,
            "nodes": [
                { "node": { "row": 0, "col": 0 }, "point": [0, 0] },
                { "node": { "row": 0, "col": 1 }, "point": [1, 0] }
            ],
            "edges": [
                { "from": { "row": 0, "col": 0 }, "to": { "row": 0, "col": 1 }, "weight": 1 }
            ]
        }));
    }
}
