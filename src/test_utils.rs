/// Utilities for tests.

use generator::OpenEdges;
use graph::Graph;

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::FromIterator;

/// If `left` and `right` hold the same elements, ignoring order and repetition,
/// return `None`. Otherwise, return `Some(left_only, right_only)`, where
/// `left_only` and `right_only` are vectors of the elements appearing only one
/// one side or the other.
pub fn diff_elements<T: Clone + Hash + Eq>(left: &[T], right: &[T])
    -> Option<(HashSet<T>, HashSet<T>)>
{
    let left: HashSet<_> = FromIterator::from_iter(left.iter().cloned());
    let right: HashSet<_> = FromIterator::from_iter(right.iter().cloned());
    if left == right {
        None
    } else {
        Some((HashSet::from_iter(left.difference(&right).cloned()),
              HashSet::from_iter(right.difference(&left).cloned())))
    }
}

/// Take ownership of LEFT and RIGHT, and assert that they hold the same
/// elements, ignoring order and repetition.
macro_rules! assert_same_elements {
    ($left:expr, $right:expr) => ({
        let left = $left;
        let right = $right;
        if let Some((left_only, right_only)) = ::test_utils::diff_elements(&left, &right) {
            panic!("assertion failed: left and right have different elements:\n\
                    left has only `{:#?}`,\n\
                    right has only `{:#?}`",
                   left_only, right_only);
        }
    });
}

/// Return the representative of `i`'s set, compressing the path as we go.
fn find(parents: &mut [usize], i: usize) -> usize {
    let mut root = i;
    while parents[root] != root {
        root = parents[root];
    }
    let mut i = i;
    while parents[i] != root {
        let next = parents[i];
        parents[i] = root;
        i = next;
    }
    root
}

/// Assert that `open` is a spanning tree of `graph`.
///
/// This works by union-find rather than by walking the maze: each open edge
/// must join two nodes not yet connected by earlier open edges (so there are
/// no cycles), and once all open edges are in, everything must be in one set.
pub fn assert_spanning_tree<G: Graph>(graph: &G, open: &OpenEdges) {
    let mut parents: Vec<usize> = (0..graph.node_count()).collect();
    let mut sets = graph.node_count();

    for edge in open {
        let (u, v) = edge.endpoints();
        let u = graph.index(u).expect("open edge endpoint not in graph");
        let v = graph.index(v).expect("open edge endpoint not in graph");
        let (ru, rv) = (find(&mut parents, u), find(&mut parents, v));
        assert_ne!(ru, rv, "open edge {} closes a cycle", edge);
        parents[ru] = rv;
        sets -= 1;
    }

    assert_eq!(sets, 1, "open edges leave the maze in {} pieces", sets);
}
