use serde::Deserialize;
use serde::Serialize;

use crate::basic_types::CostMatrix;
use crate::basic_types::InstanceError;

/// The input shared by every solving strategy: the cost matrix, plus the
/// optional per-worker capacities and per-job durations some strategies
/// consult.
///
/// Capacities and durations are carried so that all strategies can be invoked
/// interchangeably with the same request shape; a strategy that has no use
/// for them simply ignores them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    matrix: CostMatrix,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    worker_capacities: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    job_durations: Option<Vec<f64>>,
}

impl Instance {
    pub fn new(matrix: CostMatrix) -> Instance {
        Instance {
            matrix,
            worker_capacities: None,
            job_durations: None,
        }
    }

    /// Attaches one capacity per worker; the list must match the matrix
    /// dimension.
    pub fn with_worker_capacities(
        mut self,
        capacities: Vec<f64>,
    ) -> Result<Instance, InstanceError> {
        if capacities.len() != self.matrix.dimension() {
            return Err(InstanceError::CapacityMismatch {
                expected: self.matrix.dimension(),
                actual: capacities.len(),
            });
        }

        self.worker_capacities = Some(capacities);
        Ok(self)
    }

    /// Attaches one duration per job; the list must match the matrix
    /// dimension.
    pub fn with_job_durations(mut self, durations: Vec<f64>) -> Result<Instance, InstanceError> {
        if durations.len() != self.matrix.dimension() {
            return Err(InstanceError::DurationMismatch {
                expected: self.matrix.dimension(),
                actual: durations.len(),
            });
        }

        self.job_durations = Some(durations);
        Ok(self)
    }

    /// Re-checks the optional fields against the matrix dimension.
    ///
    /// Deserialized instances validate the matrix shape on construction but
    /// not the lengths of the optional lists; boundaries call this before
    /// handing the instance to a strategy.
    pub fn validate(&self) -> Result<(), InstanceError> {
        let expected = self.matrix.dimension();

        if let Some(capacities) = &self.worker_capacities {
            if capacities.len() != expected {
                return Err(InstanceError::CapacityMismatch {
                    expected,
                    actual: capacities.len(),
                });
            }
        }

        if let Some(durations) = &self.job_durations {
            if durations.len() != expected {
                return Err(InstanceError::DurationMismatch {
                    expected,
                    actual: durations.len(),
                });
            }
        }

        Ok(())
    }

    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    pub fn worker_capacities(&self) -> Option<&[f64]> {
        self.worker_capacities.as_deref()
    }

    pub fn job_durations(&self) -> Option<&[f64]> {
        self.job_durations.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix_2x2() -> CostMatrix {
        CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 1.0]]).unwrap()
    }

    #[test]
    fn capacity_list_must_match_the_dimension() {
        let result = Instance::new(matrix_2x2()).with_worker_capacities(vec![1.0]);

        assert_eq!(
            Err(InstanceError::CapacityMismatch {
                expected: 2,
                actual: 1,
            }),
            result
        );
    }

    #[test]
    fn validate_catches_mismatches_in_deserialized_instances() {
        let instance: Instance = serde_json::from_str(
            r#"{"matrix": [[1.0, 2.0], [2.0, 1.0]], "job_durations": [1.0, 2.0, 3.0]}"#,
        )
        .unwrap();

        assert_eq!(
            Err(InstanceError::DurationMismatch {
                expected: 2,
                actual: 3,
            }),
            instance.validate()
        );
    }
}
