//! Carving perfect mazes with a randomized depth-first traversal.
//!
//! A perfect maze is a spanning tree of a graph: its passages connect every
//! cell, and there is exactly one way to get from any cell to any other. A
//! depth-first traversal finds one: each time the traversal steps from a
//! visited node to an unvisited one, the edge it crossed becomes a passage. The
//! traversal never crosses into a node twice, so the passages can't form a
//! cycle; and it reaches every node of a connected graph, so they connect
//! everything.
//!
//! Shuffling each node's neighbors before trying them is all it takes to make
//! the result random. The shuffle draws on a caller-supplied `Rng`, so the same
//! graph, origin and random stream always produce the same maze.
//!
//! The traversal keeps its own stack of frames instead of recursing: its depth
//! can reach the number of nodes in the graph, and a long corridor of a large
//! maze would overflow the thread's stack.

use errors::*;
use graph::{Edge, EdgeId, Graph, Node};

use rand::Rng;
use rand::seq::SliceRandom;

use std::collections::btree_set;
use std::collections::BTreeSet;

/// How far the traversal has gotten with a particular node.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NodeState {
    /// The traversal has not reached this node yet.
    Unvisited,

    /// The node is on the traversal stack: we're still exploring its
    /// neighbors.
    Visiting,

    /// We've tried all the node's neighbors and backtracked past it.
    Visited,
}

/// How far a `Generation` has gotten overall.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Nothing has happened yet; not even the origin has been visited.
    Idle,

    /// The traversal stack is not empty.
    Traversing,

    /// The traversal stack has emptied; the open edges are final.
    Complete,
}

/// One move of a traversal, as reported by `Generation::step`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Step {
    /// The traversal began at the given node.
    Start(Node),

    /// The traversal crossed `edge` from `from`, a node on the stack, to `to`,
    /// which it had never visited. `edge` is now a passage.
    Carve { from: Node, to: Node, edge: EdgeId },

    /// The given node had no unvisited neighbors left, so the traversal
    /// returned to the node it came from.
    Backtrack(Node),
}

/// An entry on the traversal stack.
#[derive(Clone, Debug)]
struct Frame {
    node: Node,

    /// The dense index of `node` in the graph.
    index: usize,

    /// `node`'s neighbors, in the random order we'll try them.
    neighbors: Vec<Node>,

    /// How many elements of `neighbors` we've tried so far.
    next: usize,
}

/// A single maze generation in progress.
///
/// A `Generation` holds all the mutable state of one traversal: the state of
/// each node, which edges have been opened, and the traversal stack. Nothing
/// is shared between generations, even over the same graph.
///
/// You can drive a `Generation` one step at a time with `step`, which is handy
/// for animating the carving, or all at once with `run`.
pub struct Generation<'a, G: 'a + Graph + ?Sized, R: 'a + Rng + ?Sized> {
    graph: &'a G,
    rng: &'a mut R,

    origin: Node,
    origin_index: usize,

    /// The state of each node, indexed by the node's dense index.
    states: Vec<NodeState>,

    /// Whether each edge is open, indexed by `EdgeId`.
    open: Vec<bool>,

    /// The number of `true` elements in `open`.
    open_count: usize,

    stack: Vec<Frame>,
    phase: Phase,
}

impl<'a, G: 'a + Graph + ?Sized, R: 'a + Rng + ?Sized> Generation<'a, G, R> {
    /// Prepare to generate a maze over `graph`, starting from `origin` and
    /// drawing random numbers from `rng`.
    pub fn new(graph: &'a G, origin: Node, rng: &'a mut R) -> Result<Generation<'a, G, R>> {
        let origin_index = match graph.index(origin) {
            Some(index) => index,
            None => bail!(ErrorKind::InvalidOrigin(origin)),
        };

        Ok(Generation {
            graph,
            rng,
            origin,
            origin_index,
            states: vec![NodeState::Unvisited; graph.node_count()],
            open: vec![false; graph.edge_count()],
            open_count: 0,
            stack: Vec::new(),
            phase: Phase::Idle,
        })
    }

    pub fn phase(&self) -> Phase { self.phase }

    pub fn origin(&self) -> Node { self.origin }

    /// Return the number of edges opened so far.
    pub fn open_count(&self) -> usize { self.open_count }

    /// Return the number of frames on the traversal stack.
    pub fn depth(&self) -> usize { self.stack.len() }

    /// Return the state of `node`, or `None` if it isn't in the graph.
    pub fn node_state(&self, node: Node) -> Option<NodeState> {
        self.graph.index(node).map(|index| self.states[index])
    }

    /// Return true if the traversal has entered `node`.
    pub fn is_visited(&self, node: Node) -> bool {
        match self.node_state(node) {
            Some(NodeState::Visiting) | Some(NodeState::Visited) => true,
            _ => false,
        }
    }

    /// Take one step of the traversal. Return `None` once the traversal is
    /// complete.
    pub fn step(&mut self) -> Result<Option<Step>> {
        match self.phase {
            Phase::Complete => return Ok(None),
            Phase::Idle => {
                self.phase = Phase::Traversing;
                let (origin, index) = (self.origin, self.origin_index);
                self.enter(origin, index);
                return Ok(Some(Step::Start(origin)));
            }
            Phase::Traversing => (),
        }

        let (current, current_index) = match self.stack.last() {
            Some(frame) => (frame.node, frame.index),
            None => {
                self.phase = Phase::Complete;
                return Ok(None);
            }
        };

        while let Some(candidate) = self.next_candidate() {
            let index = match self.graph.index(candidate) {
                Some(index) => index,
                None => bail!(ErrorKind::InternalInvariantViolation(Edge::new(current, candidate))),
            };
            if self.states[index] != NodeState::Unvisited {
                continue;
            }

            let edge = match self.graph.edge_between(current, candidate) {
                Some(edge) => edge,
                None => bail!(ErrorKind::InternalInvariantViolation(Edge::new(current, candidate))),
            };
            self.open[edge] = true;
            self.open_count += 1;
            self.enter(candidate, index);

            trace!("carved {} -> {}", current, candidate);
            return Ok(Some(Step::Carve { from: current, to: candidate, edge }));
        }

        self.stack.pop();
        self.states[current_index] = NodeState::Visited;
        if self.stack.is_empty() {
            self.phase = Phase::Complete;
        }

        Ok(Some(Step::Backtrack(current)))
    }

    /// Run the traversal to completion, and return the passages it carved.
    pub fn run(mut self) -> Result<OpenEdges> {
        while self.step()?.is_some() { }
        Ok(self.into_open_edges())
    }

    /// Return the passages carved so far.
    pub fn open_edges(&self) -> OpenEdges {
        OpenEdges::from_flags(self.graph, self.open.clone())
    }

    fn into_open_edges(self) -> OpenEdges {
        OpenEdges::from_flags(self.graph, self.open)
    }

    /// Mark `node` as visiting, and push a frame for it with its neighbors
    /// in random order.
    fn enter(&mut self, node: Node, index: usize) {
        self.states[index] = NodeState::Visiting;
        let mut neighbors = self.graph.neighbors(node);
        neighbors.shuffle(&mut *self.rng);
        self.stack.push(Frame { node, index, neighbors, next: 0 });
    }

    /// Return the next untried neighbor of the node atop the stack, if any.
    fn next_candidate(&mut self) -> Option<Node> {
        let frame = self.stack.last_mut()?;
        let candidate = frame.neighbors.get(frame.next).cloned();
        if candidate.is_some() {
            frame.next += 1;
        }
        candidate
    }
}

/// Generate a perfect maze over `graph` by randomized depth-first traversal
/// from `origin`, and return its passages.
///
/// If `graph` is connected, the result is a spanning tree: exactly
/// `graph.node_count() - 1` open edges joining every node.
pub fn generate<G, R>(graph: &G, origin: Node, rng: &mut R) -> Result<OpenEdges>
    where G: Graph + ?Sized,
          R: Rng + ?Sized
{
    let open = Generation::new(graph, origin, rng)?.run()?;
    debug!("generated maze from {}: {} of {} edges open, {} nodes",
           origin, open.len(), graph.edge_count(), graph.node_count());
    Ok(open)
}

/// The passages of a maze: the edges a traversal crossed. Every other edge of
/// the graph is a wall.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OpenEdges {
    /// Whether each edge is open, indexed by `EdgeId`.
    flags: Vec<bool>,

    /// The open edges themselves.
    open: BTreeSet<Edge>,
}

impl OpenEdges {
    fn from_flags<G: Graph + ?Sized>(graph: &G, flags: Vec<bool>) -> OpenEdges {
        let open = flags.iter()
            .enumerate()
            .filter(|&(_, &is_open)| is_open)
            .map(|(id, _)| graph.edge(id))
            .collect();
        OpenEdges { flags, open }
    }

    /// Return the number of open edges.
    pub fn len(&self) -> usize { self.open.len() }

    pub fn is_empty(&self) -> bool { self.open.is_empty() }

    /// Return true if `edge` is a passage.
    pub fn contains(&self, edge: &Edge) -> bool {
        self.open.contains(edge)
    }

    /// Return true if there is a passage between `u` and `v`. The order of the
    /// nodes doesn't matter.
    pub fn is_open(&self, u: Node, v: Node) -> bool {
        self.open.contains(&Edge::new(u, v))
    }

    /// Return true if the edge with the given id is a passage.
    pub fn is_open_id(&self, id: EdgeId) -> bool {
        self.flags.get(id).cloned().unwrap_or(false)
    }

    /// Return the open flag of every edge of the graph, indexed by `EdgeId`.
    pub fn flags(&self) -> &[bool] { &self.flags }

    /// Iterate over the open edges in order.
    pub fn iter(&self) -> btree_set::Iter<'_, Edge> {
        self.open.iter()
    }
}

impl<'a> IntoIterator for &'a OpenEdges {
    type Item = &'a Edge;
    type IntoIter = btree_set::Iter<'a, Edge>;

    fn into_iter(self) -> btree_set::Iter<'a, Edge> {
        self.open.iter()
    }
}
