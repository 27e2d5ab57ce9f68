use crate::api::AssignmentStrategy;
use crate::api::StrategyDetail;
use crate::api::StrategyOutcome;
use crate::basic_types::Instance;

/// Row-by-row heuristic: every worker takes the cheapest job still
/// available.
///
/// Runs in `O(n^2)` and always produces a feasible assignment, but an early
/// cheap pick can force expensive picks later, so the result is not
/// optimal in general.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyStrategy;

impl AssignmentStrategy for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve_instance(&self, instance: &Instance) -> StrategyOutcome {
        let matrix = instance.matrix();
        let n = matrix.dimension();

        let mut taken = vec![false; n];
        let mut assignment = Vec::with_capacity(n);
        let mut row_costs = Vec::with_capacity(n);

        for worker in 0..n {
            let (job, cost) = matrix
                .row(worker)
                .iter()
                .copied()
                .enumerate()
                .filter(|(job, _)| !taken[*job])
                .min_by(|(_, a), (_, b)| a.total_cmp(b))
                .expect("a square matrix leaves at least one job per worker");

            taken[job] = true;
            assignment.push(job);
            row_costs.push(cost);
        }

        StrategyOutcome {
            cost: Some(row_costs.iter().sum()),
            assignment,
            detail: StrategyDetail::Greedy { row_costs },
        }
    }
}
