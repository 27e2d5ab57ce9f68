use log::debug;
use serde::Serialize;

use crate::basic_types::CostMatrix;
use crate::branch_and_bound::completion_bound;
use crate::branch_and_bound::frontier::Frontier;
use crate::branch_and_bound::NodeStatus;
use crate::branch_and_bound::SearchEvent;
use crate::branch_and_bound::SearchHistory;
use crate::branch_and_bound::SearchTree;
use crate::statistics::log_statistic;
use crate::statistics::should_log_statistics;

/// The best-first branch-and-bound engine.
///
/// Every call to [`BranchAndBound::solve`] runs with a fresh tree, frontier,
/// and history, so invocations are independent and can run concurrently
/// without sharing any state.
#[derive(Clone, Copy, Debug, Default)]
pub struct BranchAndBound;

/// Everything produced by one solve invocation.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// The optimal total cost, or `None` if the search exhausted the
    /// frontier without completing a single assignment.
    pub cost: Option<f64>,
    /// The job assigned to each worker in the optimal solution; empty iff
    /// `cost` is `None`.
    pub assignment: Vec<usize>,
    /// The full expansion tree, with statuses finalized.
    pub tree: SearchTree,
    /// The ordered record of every decision the search took.
    pub history: SearchHistory,
    pub statistics: SearchStatistics,
}

/// Counters accumulated over one search.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct SearchStatistics {
    pub num_selected: u64,
    pub num_pruned_on_selection: u64,
    pub num_children_generated: u64,
    pub num_pruned_on_generation: u64,
    pub num_incumbent_updates: u64,
}

impl SearchStatistics {
    /// Writes the counters to the configured statistic sink, if any.
    pub fn log_statistics(&self) {
        if !should_log_statistics() {
            return;
        }

        log_statistic("num_selected", self.num_selected);
        log_statistic("num_pruned_on_selection", self.num_pruned_on_selection);
        log_statistic("num_children_generated", self.num_children_generated);
        log_statistic("num_pruned_on_generation", self.num_pruned_on_generation);
        log_statistic("num_incumbent_updates", self.num_incumbent_updates);
    }
}

impl BranchAndBound {
    /// Finds the minimum-cost assignment for `matrix`.
    ///
    /// The search keeps a frontier of partial assignments ordered by their
    /// admissible lower bound and repeatedly processes the most promising
    /// one. A node whose bound meets the incumbent is pruned; a complete
    /// node may improve the incumbent; any other node is expanded one job
    /// per child. Children whose bound already meets the incumbent are
    /// pruned on generation and never reach the frontier. When the frontier
    /// empties, the incumbent is optimal and the path realizing it is tagged
    /// in the tree.
    pub fn solve(&self, matrix: &CostMatrix) -> SearchOutcome {
        let n = matrix.dimension();

        let mut tree = SearchTree::new();
        let mut frontier = Frontier::default();
        let mut history = SearchHistory::default();
        let mut statistics = SearchStatistics::default();

        let mut incumbent: Option<f64> = None;
        let mut best_assignment: Vec<usize> = Vec::new();

        let root_bound = completion_bound(matrix, 0, &[]);
        let root = tree.create_node(None, Vec::new(), 0.0, root_bound);
        frontier.push(root, root_bound);

        while let Some((node_id, bound)) = frontier.pop() {
            statistics.num_selected += 1;

            let node = tree.node(node_id);
            let path = node.path().to_vec();
            let cost = node.cost();
            let level = node.level();

            history.record(SearchEvent::NodeSelected {
                node_id,
                path: path.clone(),
                cost,
                bound,
                incumbent,
                frontier_bounds: frontier.bounds(),
            });

            if incumbent.is_some_and(|best| bound >= best) {
                tree.set_status(node_id, NodeStatus::Pruned);
                history.record(SearchEvent::NodePruned {
                    node_id,
                    bound,
                    incumbent,
                });
                statistics.num_pruned_on_selection += 1;
                continue;
            }

            if level == n {
                // Complete assignment; it has no children to expand.
                if incumbent.map_or(true, |best| cost < best) {
                    incumbent = Some(cost);
                    best_assignment = path;
                    statistics.num_incumbent_updates += 1;

                    debug!("incumbent improved to {cost} by {best_assignment:?}");
                    history.record(SearchEvent::SolutionImproved {
                        node_id,
                        cost,
                        assignment: best_assignment.clone(),
                    });
                }
                continue;
            }

            for job in 0..n {
                if path.contains(&job) {
                    continue;
                }

                let mut child_path = path.clone();
                child_path.push(job);
                let child_cost = cost + matrix.cost(level, job);
                let child_bound = completion_bound(matrix, level + 1, &child_path);

                let child_id = tree.create_node(Some(node_id), child_path, child_cost, child_bound);
                statistics.num_children_generated += 1;

                history.record(SearchEvent::ChildGenerated {
                    parent_id: node_id,
                    child_id,
                    path: tree.node(child_id).path().to_vec(),
                    cost: child_cost,
                    bound: child_bound,
                });

                if incumbent.is_some_and(|best| child_bound >= best) {
                    tree.set_status(child_id, NodeStatus::Pruned);
                    history.record(SearchEvent::ChildPruned {
                        child_id,
                        bound: child_bound,
                        incumbent,
                    });
                    statistics.num_pruned_on_generation += 1;
                } else {
                    frontier.push(child_id, child_bound);
                }
            }
        }

        if !best_assignment.is_empty() {
            tree.mark_optimal_path(&best_assignment);
        }

        debug!(
            "search finished: cost {incumbent:?}, {} nodes, {} events",
            tree.len(),
            history.len()
        );

        SearchOutcome {
            cost: incumbent,
            assignment: best_assignment,
            tree,
            history,
            statistics,
        }
    }
}
