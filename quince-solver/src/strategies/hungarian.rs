use crate::api::AssignmentStrategy;
use crate::api::StrategyDetail;
use crate::api::StrategyOutcome;
use crate::basic_types::CostMatrix;
use crate::basic_types::Instance;

/// The exact dual-potential method for the assignment problem.
///
/// Workers are inserted one at a time; for each, the cheapest augmenting
/// path in the reduced-cost graph is grown Dijkstra-style while the dual
/// potentials are updated to keep all reduced costs non-negative. Runs in
/// `O(n^3)` and produces a provably optimal assignment.
#[derive(Clone, Copy, Debug, Default)]
pub struct HungarianStrategy;

impl AssignmentStrategy for HungarianStrategy {
    fn name(&self) -> &'static str {
        "hungarian"
    }

    fn solve_instance(&self, instance: &Instance) -> StrategyOutcome {
        let matrix = instance.matrix();
        let (assignment, worker_potentials, job_potentials) = dual_assignment(matrix);

        StrategyOutcome {
            cost: Some(matrix.assignment_cost(&assignment)),
            assignment,
            detail: StrategyDetail::Hungarian {
                worker_potentials,
                job_potentials,
            },
        }
    }
}

/// Computes the optimal assignment together with the dual potentials at
/// termination.
///
/// Index 0 of every internal array is a sentinel: `matched_worker[j]` is the
/// 1-based worker matched to 1-based job `j`, with 0 meaning unmatched, and
/// column 0 is the virtual start of each augmenting path.
fn dual_assignment(matrix: &CostMatrix) -> (Vec<usize>, Vec<f64>, Vec<f64>) {
    let n = matrix.dimension();

    let mut worker_potential = vec![0.0; n + 1];
    let mut job_potential = vec![0.0; n + 1];
    let mut matched_worker = vec![0_usize; n + 1];
    let mut way = vec![0_usize; n + 1];

    for worker in 1..=n {
        matched_worker[0] = worker;
        let mut current_job = 0_usize;
        let mut min_reduced = vec![f64::INFINITY; n + 1];
        let mut visited = vec![false; n + 1];

        // Grow the alternating tree until an unmatched job is reached.
        loop {
            visited[current_job] = true;
            let current_worker = matched_worker[current_job];
            let mut delta = f64::INFINITY;
            let mut next_job = 0_usize;

            for job in 1..=n {
                if visited[job] {
                    continue;
                }

                let reduced = matrix.cost(current_worker - 1, job - 1)
                    - worker_potential[current_worker]
                    - job_potential[job];
                if reduced < min_reduced[job] {
                    min_reduced[job] = reduced;
                    way[job] = current_job;
                }
                if min_reduced[job] < delta {
                    delta = min_reduced[job];
                    next_job = job;
                }
            }

            for job in 0..=n {
                if visited[job] {
                    worker_potential[matched_worker[job]] += delta;
                    job_potential[job] -= delta;
                } else {
                    min_reduced[job] -= delta;
                }
            }

            current_job = next_job;
            if matched_worker[current_job] == 0 {
                break;
            }
        }

        // Flip the matching along the path found above.
        loop {
            let previous_job = way[current_job];
            matched_worker[current_job] = matched_worker[previous_job];
            current_job = previous_job;
            if current_job == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0_usize; n];
    for job in 1..=n {
        assignment[matched_worker[job] - 1] = job - 1;
    }

    (
        assignment,
        worker_potential[1..].to_vec(),
        job_potential[1..].to_vec(),
    )
}
