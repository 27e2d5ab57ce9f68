use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// A square matrix of assignment costs; the cell at row `worker` and column
/// `job` is the cost of giving that job to that worker.
///
/// Construction validates the shape once, so every downstream consumer can
/// index without bounds anxiety: the matrix is non-empty, square, and every
/// cell is a finite number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct CostMatrix {
    rows: Vec<Vec<f64>>,
}

impl CostMatrix {
    /// Creates a matrix from row-major data, rejecting empty, ragged, and
    /// non-finite input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<CostMatrix, InstanceError> {
        if rows.is_empty() {
            return Err(InstanceError::EmptyMatrix);
        }

        let expected = rows.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(InstanceError::NotSquare {
                    row,
                    expected,
                    actual: cells.len(),
                });
            }

            for (column, cell) in cells.iter().enumerate() {
                if !cell.is_finite() {
                    return Err(InstanceError::NonFiniteCost { row, column });
                }
            }
        }

        Ok(CostMatrix { rows })
    }

    /// The number of workers (equivalently, jobs) in the instance.
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// The cost of assigning `job` to `worker`.
    pub fn cost(&self, worker: usize, job: usize) -> f64 {
        self.rows[worker][job]
    }

    pub fn row(&self, worker: usize) -> &[f64] {
        &self.rows[worker]
    }

    /// The total cost of a complete assignment of jobs to workers `0..n`.
    pub fn assignment_cost(&self, assignment: &[usize]) -> f64 {
        assignment
            .iter()
            .enumerate()
            .map(|(worker, &job)| self.cost(worker, job))
            .sum()
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = InstanceError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<CostMatrix, InstanceError> {
        CostMatrix::from_rows(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<f64>> {
    fn from(matrix: CostMatrix) -> Vec<Vec<f64>> {
        matrix.rows
    }
}

/// The ways in which an instance can be rejected before any solving starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InstanceError {
    #[error("the cost matrix is empty")]
    EmptyMatrix,
    #[error("row {row} has {actual} columns, expected {expected} for a square matrix")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("the cost at row {row}, column {column} is not a finite number")]
    NonFiniteCost { row: usize, column: usize },
    #[error("expected {expected} worker capacities, got {actual}")]
    CapacityMismatch { expected: usize, actual: usize },
    #[error("expected {expected} job durations, got {actual}")]
    DurationMismatch { expected: usize, actual: usize },
}
