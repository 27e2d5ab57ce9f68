//! The user-facing surface of the crate: strategy selection, the common
//! strategy contract, result shapes, and the execution ledger kept by
//! boundaries.

mod ledger;
mod outputs;

pub use ledger::ExecutionId;
pub use ledger::ExecutionLedger;
pub use ledger::ExecutionRecord;
pub use outputs::SolveReport;
pub use outputs::StrategyDetail;
pub use outputs::StrategyOutcome;
use serde::Deserialize;
use serde::Serialize;

use crate::basic_types::CostMatrix;
use crate::basic_types::Instance;
use crate::branch_and_bound::BranchAndBound;
use crate::strategies::BranchAndBoundStrategy;
use crate::strategies::FlowStrategy;
use crate::strategies::GreedyStrategy;
use crate::strategies::HungarianStrategy;

/// The solving procedure applied to an instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum StrategyKind {
    /// Exhaustive best-first branch and bound. The only strategy that also
    /// produces the full search tree and the decision history.
    #[default]
    BranchAndBound,
    /// Row-by-row heuristic: every worker takes the cheapest job still
    /// available. Fast, not optimal.
    Greedy,
    /// Successive shortest augmenting paths over the bipartite cost graph.
    Flow,
    /// The exact dual-potential shortest augmenting path method.
    Hungarian,
}

/// The contract shared by every solving strategy.
///
/// All strategies accept the same [`Instance`] and produce the same outcome
/// shape, which lets a boundary select one by name and package the response
/// uniformly.
pub trait AssignmentStrategy {
    /// The name under which the strategy is selected and reported.
    fn name(&self) -> &'static str;

    /// Solves a validated instance.
    fn solve_instance(&self, instance: &Instance) -> StrategyOutcome;
}

/// Runs the strategy selected by `kind` on a validated instance.
pub fn solve_with_strategy(instance: &Instance, kind: StrategyKind) -> StrategyOutcome {
    match kind {
        StrategyKind::BranchAndBound => BranchAndBoundStrategy.solve_instance(instance),
        StrategyKind::Greedy => GreedyStrategy.solve_instance(instance),
        StrategyKind::Flow => FlowStrategy.solve_instance(instance),
        StrategyKind::Hungarian => HungarianStrategy.solve_instance(instance),
    }
}

/// Runs the instrumented branch-and-bound search on `matrix` and packages
/// the optimum together with the serialized tree and history.
pub fn solve(matrix: &CostMatrix) -> SolveReport {
    BranchAndBound.solve(matrix).into()
}
