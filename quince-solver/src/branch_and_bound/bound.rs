use crate::basic_types::CostMatrix;

/// Computes a lower bound on the total cost of any complete assignment that
/// extends `path`.
///
/// The bound is the exact cost of the `level` decisions already taken, plus,
/// for every remaining worker, the cheapest cell among the jobs `path` has
/// not claimed. Conflicts between the remaining workers are ignored, so the
/// bound never overestimates the true completion cost; that admissibility is
/// what makes discarding nodes with `bound >= incumbent` safe.
pub fn completion_bound(matrix: &CostMatrix, level: usize, path: &[usize]) -> f64 {
    let n = matrix.dimension();

    let mut taken = vec![false; n];
    let mut bound = 0.0;
    for (worker, &job) in path.iter().take(level).enumerate() {
        bound += matrix.cost(worker, job);
        taken[job] = true;
    }

    for worker in level..n {
        let cheapest = matrix
            .row(worker)
            .iter()
            .enumerate()
            .filter(|(job, _)| !taken[*job])
            .map(|(_, &cost)| cost)
            .fold(f64::INFINITY, f64::min);

        // A row with every job already claimed cannot occur for a square
        // matrix used correctly; contribute nothing instead of poisoning the
        // bound with infinity.
        if cheapest.is_finite() {
            bound += cheapest;
        }
    }

    bound
}
