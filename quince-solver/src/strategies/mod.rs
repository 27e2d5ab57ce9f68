//! The solving strategies sitting behind the common
//! [`AssignmentStrategy`](crate::AssignmentStrategy) contract.
//!
//! Every strategy consumes the same instance shape and produces the same
//! outcome shape; only the branch-and-bound search additionally reports the
//! expansion tree and the decision history.

mod flow;
mod greedy;
mod hungarian;

pub use flow::FlowStrategy;
pub use greedy::GreedyStrategy;
pub use hungarian::HungarianStrategy;

use crate::api::AssignmentStrategy;
use crate::api::StrategyDetail;
use crate::api::StrategyOutcome;
use crate::basic_types::Instance;
use crate::branch_and_bound::BranchAndBound;

/// Adapter exposing the instrumented search engine through the common
/// strategy contract.
#[derive(Clone, Copy, Debug, Default)]
pub struct BranchAndBoundStrategy;

impl AssignmentStrategy for BranchAndBoundStrategy {
    fn name(&self) -> &'static str {
        "branch-and-bound"
    }

    fn solve_instance(&self, instance: &Instance) -> StrategyOutcome {
        let outcome = BranchAndBound.solve(instance.matrix());

        StrategyOutcome {
            cost: outcome.cost,
            assignment: outcome.assignment,
            detail: StrategyDetail::BranchAndBound {
                tree: outcome.tree.to_shared(),
                history: outcome.history,
                statistics: outcome.statistics,
            },
        }
    }
}
