use serde::Serialize;

use crate::branch_and_bound::SearchHistory;
use crate::branch_and_bound::SearchOutcome;
use crate::branch_and_bound::SearchStatistics;
use crate::branch_and_bound::TreeNode;

/// The full product of one instrumented branch-and-bound solve: the optimum
/// plus everything a visualization client needs to replay the search.
#[derive(Clone, Debug, Serialize)]
pub struct SolveReport {
    /// The optimal total cost; `None` signals that no complete assignment
    /// was found, which is distinct from a valid zero-cost solution.
    pub cost: Option<f64>,
    pub assignment: Vec<usize>,
    /// The serialized root of the expansion tree, children nested inside.
    pub tree: TreeNode,
    pub history: SearchHistory,
}

impl From<SearchOutcome> for SolveReport {
    fn from(outcome: SearchOutcome) -> SolveReport {
        SolveReport {
            cost: outcome.cost,
            assignment: outcome.assignment,
            tree: outcome.tree.to_shared(),
            history: outcome.history,
        }
    }
}

/// The outcome shape shared by every strategy.
#[derive(Clone, Debug, Serialize)]
pub struct StrategyOutcome {
    /// Total cost of the produced assignment; `None` signals that the
    /// strategy found no complete assignment.
    pub cost: Option<f64>,
    /// The job assigned to each worker.
    pub assignment: Vec<usize>,
    /// Strategy-specific reporting.
    #[serde(flatten)]
    pub detail: StrategyDetail,
}

/// The strategy-specific part of an outcome.
///
/// Only the branch-and-bound search carries the expansion tree and the
/// decision history; the sibling strategies report lighter diagnostics.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "strategy", rename_all = "kebab-case")]
pub enum StrategyDetail {
    BranchAndBound {
        tree: TreeNode,
        history: SearchHistory,
        statistics: SearchStatistics,
    },
    Greedy {
        /// The cost each worker's pick contributed, in worker order.
        row_costs: Vec<f64>,
    },
    Flow {
        /// The cost of each augmenting path, in the order they were applied.
        augmentation_costs: Vec<f64>,
    },
    Hungarian {
        /// The dual potentials per worker at termination.
        worker_potentials: Vec<f64>,
        /// The dual potentials per job at termination.
        job_potentials: Vec<f64>,
    },
}
