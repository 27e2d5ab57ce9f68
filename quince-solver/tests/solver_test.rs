use std::collections::HashMap;

use itertools::Itertools;
use quince_solver::branch_and_bound::BranchAndBound;
use quince_solver::branch_and_bound::NodeId;
use quince_solver::branch_and_bound::NodeStatus;
use quince_solver::branch_and_bound::SearchEvent;
use quince_solver::branch_and_bound::SearchOutcome;
use quince_solver::CostMatrix;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

const EPSILON: f64 = 1e-9;

fn solve(rows: Vec<Vec<f64>>) -> SearchOutcome {
    let matrix = CostMatrix::from_rows(rows).unwrap();
    BranchAndBound.solve(&matrix)
}

/// Exhaustive oracle: the cheapest permutation of jobs over workers.
fn brute_force(matrix: &CostMatrix) -> (f64, Vec<usize>) {
    let n = matrix.dimension();

    (0..n)
        .permutations(n)
        .map(|assignment| (matrix.assignment_cost(&assignment), assignment))
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .expect("a square matrix has at least one assignment")
}

fn random_matrix(rng: &mut SmallRng, n: usize) -> CostMatrix {
    let rows = (0..n)
        .map(|_| (0..n).map(|_| f64::from(rng.gen_range(0..25))).collect())
        .collect();
    CostMatrix::from_rows(rows).unwrap()
}

#[test]
fn returned_cost_matches_the_brute_force_oracle() {
    let mut rng = SmallRng::seed_from_u64(42);

    for n in 2..=6 {
        for _ in 0..5 {
            let matrix = random_matrix(&mut rng, n);
            let (expected_cost, _) = brute_force(&matrix);

            let outcome = BranchAndBound.solve(&matrix);

            assert_eq!(Some(expected_cost), outcome.cost);
            assert_eq!(expected_cost, matrix.assignment_cost(&outcome.assignment));
        }
    }
}

#[test]
fn two_by_two_scenario() {
    let outcome = solve(vec![vec![1.0, 2.0], vec![2.0, 1.0]]);

    assert_eq!(Some(2.0), outcome.cost);
    assert_eq!(vec![0, 1], outcome.assignment);
}

#[test]
fn three_by_three_scenario_is_checked_against_the_oracle() {
    let matrix = CostMatrix::from_rows(vec![
        vec![9.0, 2.0, 7.0],
        vec![6.0, 4.0, 3.0],
        vec![5.0, 8.0, 1.0],
    ])
    .unwrap();
    let (expected_cost, expected_assignment) = brute_force(&matrix);

    let outcome = BranchAndBound.solve(&matrix);

    assert_eq!(Some(expected_cost), outcome.cost);
    assert_eq!(expected_assignment, outcome.assignment);
}

#[test]
fn one_by_one_scenario_marks_the_whole_tree_optimal() {
    let outcome = solve(vec![vec![5.0]]);

    assert_eq!(Some(5.0), outcome.cost);
    assert_eq!(vec![0], outcome.assignment);

    // The root and the single complete node below it.
    assert_eq!(2, outcome.tree.len());
    assert!(outcome
        .tree
        .iter()
        .all(|node| node.status() == NodeStatus::Optimal));
}

#[test]
fn bounds_are_admissible_and_non_decreasing_towards_the_leaves() {
    let mut rng = SmallRng::seed_from_u64(7);

    for _ in 0..5 {
        let matrix = random_matrix(&mut rng, 4);
        let outcome = BranchAndBound.solve(&matrix);

        for node in outcome.tree.iter() {
            assert!(node.bound() >= node.cost() - EPSILON);

            // Admissibility: some completion of the node's path costs at
            // least as much as the bound claims, and none costs less.
            let cheapest_completion = cheapest_completion(&matrix, node.path());
            assert!(node.bound() <= cheapest_completion + EPSILON);

            if let Some(parent) = node.parent() {
                let parent_bound = outcome.tree.node(parent).bound();
                assert!(parent_bound <= node.bound() + EPSILON);
            }
        }
    }
}

/// The cheapest complete assignment extending `path`, by brute force.
fn cheapest_completion(matrix: &CostMatrix, path: &[usize]) -> f64 {
    let n = matrix.dimension();
    let remaining = (0..n).filter(|job| !path.contains(job)).collect::<Vec<_>>();
    let remaining_len = remaining.len();

    remaining
        .into_iter()
        .permutations(remaining_len)
        .map(|suffix| {
            let complete = path.iter().copied().chain(suffix).collect::<Vec<_>>();
            matrix.assignment_cost(&complete)
        })
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn incumbent_updates_are_strictly_decreasing() {
    let mut rng = SmallRng::seed_from_u64(13);
    let matrix = random_matrix(&mut rng, 5);

    let outcome = BranchAndBound.solve(&matrix);

    let improvements = outcome
        .history
        .events()
        .iter()
        .filter_map(|event| match event {
            SearchEvent::SolutionImproved { cost, .. } => Some(*cost),
            _ => None,
        })
        .collect::<Vec<_>>();

    assert!(!improvements.is_empty());
    for pair in improvements.windows(2) {
        assert!(pair[1] < pair[0]);
    }
}

#[test]
fn the_tree_is_a_strict_arborescence() {
    let mut rng = SmallRng::seed_from_u64(99);
    let matrix = random_matrix(&mut rng, 4);

    let outcome = BranchAndBound.solve(&matrix);
    let tree = &outcome.tree;
    let n = matrix.dimension();

    let mut roots = 0;
    for node in tree.iter() {
        assert_eq!(node.level(), node.path().len());

        if node.level() == n {
            assert!(node.children().is_empty());
        }

        match node.parent() {
            None => roots += 1,
            Some(parent) => {
                let occurrences = tree
                    .node(parent)
                    .children()
                    .iter()
                    .filter(|&&child| child == node.id())
                    .count();
                assert_eq!(1, occurrences);
            }
        }
    }

    assert_eq!(1, roots);
}

#[test]
fn optimal_marks_form_exactly_one_root_to_leaf_path() {
    let mut rng = SmallRng::seed_from_u64(21);
    let matrix = random_matrix(&mut rng, 4);
    let n = matrix.dimension();

    let outcome = BranchAndBound.solve(&matrix);
    let tree = &outcome.tree;

    let optimal_nodes = tree
        .iter()
        .filter(|node| node.status() == NodeStatus::Optimal)
        .collect::<Vec<_>>();

    // One node per level, each the parent of the next.
    assert_eq!(n + 1, optimal_nodes.len());
    for level in 0..=n {
        let node = optimal_nodes
            .iter()
            .find(|node| node.level() == level)
            .expect("one optimal node per level");
        assert_eq!(node.path(), &outcome.assignment[..level]);

        if level > 0 {
            let parent = node.parent().expect("non-root optimal nodes have parents");
            assert_eq!(NodeStatus::Optimal, tree.node(parent).status());
        }
    }
}

#[test]
fn no_pruned_node_lies_on_the_optimal_path() {
    let mut rng = SmallRng::seed_from_u64(5);

    for _ in 0..5 {
        let matrix = random_matrix(&mut rng, 5);
        let outcome = BranchAndBound.solve(&matrix);

        for node in outcome.tree.iter() {
            if node.status() == NodeStatus::Pruned {
                assert_ne!(node.path(), &outcome.assignment[..node.level()]);
            }
        }
    }
}

#[test]
fn replaying_the_history_reconstructs_every_status() {
    let mut rng = SmallRng::seed_from_u64(64);
    let matrix = random_matrix(&mut rng, 4);

    let outcome = BranchAndBound.solve(&matrix);

    let mut replayed: HashMap<NodeId, NodeStatus> = HashMap::new();
    for event in outcome.history.events() {
        match event {
            SearchEvent::NodeSelected { node_id, .. } => {
                let _ = replayed.entry(*node_id).or_insert(NodeStatus::Explored);
            }
            SearchEvent::ChildGenerated { child_id, .. } => {
                let _ = replayed.insert(*child_id, NodeStatus::Explored);
            }
            SearchEvent::NodePruned { node_id, .. } => {
                let _ = replayed.insert(*node_id, NodeStatus::Pruned);
            }
            SearchEvent::ChildPruned { child_id, .. } => {
                let _ = replayed.insert(*child_id, NodeStatus::Pruned);
            }
            SearchEvent::SolutionImproved { .. } => {}
        }
    }

    for node in outcome.tree.iter() {
        // The optimal tags come from the explicit marking pass, which is
        // not part of the history; replay reconstructs them as explored.
        let expected = match node.status() {
            NodeStatus::Optimal => NodeStatus::Explored,
            status => status,
        };

        assert_eq!(Some(&expected), replayed.get(&node.id()));
    }
}

#[test]
fn the_report_serializes_the_wire_shape() {
    let matrix = CostMatrix::from_rows(vec![vec![5.0]]).unwrap();

    let report = quince_solver::solve(&matrix);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(5.0, json["cost"]);
    assert_eq!(0, json["tree"]["id"]);
    assert_eq!("optimal", json["tree"]["status"]);
    assert_eq!("optimal", json["tree"]["children"][0]["status"]);
    assert!(json["history"].is_array());
}

#[test]
fn selection_events_snapshot_the_frontier_in_bound_order() {
    let outcome = solve(vec![
        vec![9.0, 2.0, 7.0],
        vec![6.0, 4.0, 3.0],
        vec![5.0, 8.0, 1.0],
    ]);

    let mut selections = 0;
    for event in outcome.history.events() {
        if let SearchEvent::NodeSelected {
            frontier_bounds, ..
        } = event
        {
            selections += 1;
            for pair in frontier_bounds.windows(2) {
                assert!(pair[0] <= pair[1]);
            }
        }
    }

    assert!(selections > 0);
}
