use crate::api::AssignmentStrategy;
use crate::api::StrategyDetail;
use crate::api::StrategyOutcome;
use crate::basic_types::CostMatrix;
use crate::basic_types::Instance;
use crate::quince_assert_moderate;

/// Solves the instance as a minimum-cost flow over the bipartite cost
/// graph: every round sends one unit of flow along the cheapest augmenting
/// path from an unmatched worker to an unmatched job, flipping the matched
/// edges on that path.
///
/// Path costs are found with Bellman-Ford over the residual graph, which
/// tolerates the negative reduced costs of backward edges without
/// maintaining dual potentials.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlowStrategy;

impl AssignmentStrategy for FlowStrategy {
    fn name(&self) -> &'static str {
        "flow"
    }

    fn solve_instance(&self, instance: &Instance) -> StrategyOutcome {
        let matrix = instance.matrix();
        let n = matrix.dimension();

        let mut match_of_worker: Vec<Option<usize>> = vec![None; n];
        let mut match_of_job: Vec<Option<usize>> = vec![None; n];
        let mut augmentation_costs = Vec::with_capacity(n);

        for _ in 0..n {
            let (end_job, path_cost, predecessor) =
                cheapest_augmenting_path(matrix, &match_of_worker, &match_of_job);
            augmentation_costs.push(path_cost);

            // Flip the matched edges along the alternating path, walking
            // from the free job back to the free worker.
            let mut job = end_job;
            loop {
                let worker = predecessor[job]
                    .expect("every job on the augmenting path has a predecessor");
                let previous_job = match_of_worker[worker];

                match_of_worker[worker] = Some(job);
                match_of_job[job] = Some(worker);

                match previous_job {
                    Some(previous) => job = previous,
                    None => break,
                }
            }
        }

        let assignment = match_of_worker
            .iter()
            .map(|job| job.expect("after n augmentations every worker is matched"))
            .collect::<Vec<_>>();

        quince_assert_moderate!(
            (matrix.assignment_cost(&assignment) - augmentation_costs.iter().sum::<f64>()).abs()
                < 1e-6
        );

        StrategyOutcome {
            cost: Some(matrix.assignment_cost(&assignment)),
            assignment,
            detail: StrategyDetail::Flow { augmentation_costs },
        }
    }
}

/// Finds the cheapest alternating path from any unmatched worker to an
/// unmatched job in the residual graph.
///
/// Returns the reached job, the net cost of the path, and, per job, the
/// worker whose forward edge reaches it on the shortest-path tree.
fn cheapest_augmenting_path(
    matrix: &CostMatrix,
    match_of_worker: &[Option<usize>],
    match_of_job: &[Option<usize>],
) -> (usize, f64, Vec<Option<usize>>) {
    let n = matrix.dimension();

    let mut dist_worker = vec![f64::INFINITY; n];
    let mut dist_job = vec![f64::INFINITY; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];

    for (worker, matched) in match_of_worker.iter().enumerate() {
        if matched.is_none() {
            dist_worker[worker] = 0.0;
        }
    }

    // Bellman-Ford: forward edges worker -> job at the cell cost, backward
    // edges job -> matched worker at the negated cell cost. The residual
    // graph of a min-cost prefix matching has no negative cycle, so the
    // relaxation reaches a fixpoint.
    loop {
        let mut changed = false;

        for worker in 0..n {
            if !dist_worker[worker].is_finite() {
                continue;
            }

            for job in 0..n {
                if match_of_worker[worker] == Some(job) {
                    continue;
                }

                let candidate = dist_worker[worker] + matrix.cost(worker, job);
                if candidate < dist_job[job] {
                    dist_job[job] = candidate;
                    predecessor[job] = Some(worker);
                    changed = true;
                }
            }
        }

        for job in 0..n {
            if !dist_job[job].is_finite() {
                continue;
            }

            if let Some(worker) = match_of_job[job] {
                let candidate = dist_job[job] - matrix.cost(worker, job);
                if candidate < dist_worker[worker] {
                    dist_worker[worker] = candidate;
                    changed = true;
                }
            }
        }

        if !changed {
            break;
        }
    }

    let (end_job, path_cost) = (0..n)
        .filter(|&job| match_of_job[job].is_none())
        .map(|job| (job, dist_job[job]))
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .expect("an unmatched job remains while augmentations are running");

    (end_job, path_cost, predecessor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(rows: Vec<Vec<f64>>) -> StrategyOutcome {
        let instance = Instance::new(CostMatrix::from_rows(rows).unwrap());
        FlowStrategy.solve_instance(&instance)
    }

    #[test]
    fn augmenting_paths_recover_from_greedy_traps() {
        // A pure row-greedy pass would pay 101.0 here; the second
        // augmentation reroutes worker 0 through the backward edge.
        let outcome = solve(vec![vec![1.0, 2.0], vec![1.0, 100.0]]);

        assert_eq!(Some(3.0), outcome.cost);
        assert_eq!(vec![1, 0], outcome.assignment);
    }

    #[test]
    fn augmentation_costs_sum_to_the_total_cost() {
        let outcome = solve(vec![
            vec![9.0, 2.0, 7.0],
            vec![6.0, 4.0, 3.0],
            vec![5.0, 8.0, 1.0],
        ]);

        let StrategyDetail::Flow { augmentation_costs } = &outcome.detail else {
            panic!("flow reports augmentation costs");
        };
        assert_eq!(3, augmentation_costs.len());
        assert!((augmentation_costs.iter().sum::<f64>() - outcome.cost.unwrap()).abs() < 1e-9);
    }

    #[test]
    fn one_by_one_matrix_needs_a_single_augmentation() {
        let outcome = solve(vec![vec![5.0]]);

        assert_eq!(Some(5.0), outcome.cost);
        assert_eq!(vec![0], outcome.assignment);
    }
}
