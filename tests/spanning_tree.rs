extern crate proptest;
extern crate rand;
extern crate rmaze;

use proptest::prelude::*;
use rand::SeedableRng;
use rmaze::{generate, ErrorKind, Generation, Graph, Maze, Node, NodeState, SquareGrid, XorShift128Plus};

proptest! {
    #[test]
    fn every_maze_is_perfect(rows in 1usize..30, cols in 1usize..30,
                             row in any::<usize>(), col in any::<usize>(),
                             seed in any::<u64>()) {
        let origin = Node::new(row % rows, col % cols);
        let mut rng = XorShift128Plus::seed_from_u64(seed);
        let maze = Maze::generate(rows, cols, origin, &mut rng).unwrap();

        prop_assert_eq!(maze.open.len(), rows * cols - 1);
        prop_assert!(maze.is_perfect());
        for edge in &maze.open {
            let (u, v) = edge.endpoints();
            prop_assert!(u.is_adjacent(&v));
            prop_assert!(maze.open.is_open(v, u));
        }
    }

    #[test]
    fn same_seed_same_maze(rows in 1usize..20, cols in 1usize..20, seed in any::<u64>()) {
        let grid = SquareGrid::new(rows, cols).unwrap();
        let first = generate(&grid, Node::new(0, 0), &mut XorShift128Plus::seed_from_u64(seed)).unwrap();
        let second = generate(&grid, Node::new(0, 0), &mut XorShift128Plus::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_node_visited_once(rows in 1usize..16, cols in 1usize..16, seed in any::<u64>()) {
        let grid = SquareGrid::new(rows, cols).unwrap();
        let mut rng = XorShift128Plus::seed_from_u64(seed);
        let mut generation = Generation::new(&grid, Node::new(rows - 1, 0), &mut rng).unwrap();

        let mut entered = vec![0; grid.node_count()];
        while let Some(step) = generation.step().unwrap() {
            match step {
                rmaze::Step::Start(node) | rmaze::Step::Carve { to: node, .. } => {
                    entered[grid.index(node).unwrap()] += 1;
                }
                rmaze::Step::Backtrack(_) => (),
            }
        }

        prop_assert!(entered.iter().all(|&count| count == 1));
        for node in grid.nodes() {
            prop_assert_eq!(generation.node_state(node), Some(NodeState::Visited));
        }
    }

    #[test]
    fn origin_outside_grid_rejected(rows in 1usize..10, cols in 1usize..10,
                                    extra_row in 0usize..5, extra_col in 0usize..5,
                                    seed in any::<u64>()) {
        let grid = SquareGrid::new(rows, cols).unwrap();
        let origin = Node::new(rows + extra_row, cols + extra_col);
        let mut rng = XorShift128Plus::seed_from_u64(seed);
        let result = generate(&grid, origin, &mut rng);
        let rejected = match result {
            Err(ref e) => match *e.kind() { ErrorKind::InvalidOrigin(o) => o == origin, _ => false },
            Ok(_) => false,
        };
        prop_assert!(rejected);
    }
}

#[test]
fn zero_dimensions_rejected() {
    for &(rows, cols) in &[(0, 0), (0, 1), (1, 0), (0, 100)] {
        let result = SquareGrid::new(rows, cols);
        assert!(match result {
            Err(ref e) => match *e.kind() { ErrorKind::InvalidDimensions(..) => true, _ => false },
            Ok(_) => false,
        });
    }
}
