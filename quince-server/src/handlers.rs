//! Request handlers: validate, solve, record, respond.

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use log::info;
use quince_solver::solve_with_strategy;
use quince_solver::CostMatrix;
use quince_solver::ExecutionId;
use quince_solver::ExecutionRecord;
use quince_solver::Instance;
use quince_solver::InstanceError;
use quince_solver::StrategyKind;
use quince_solver::StrategyOutcome;
use serde::Deserialize;
use serde::Serialize;

use crate::state::AppState;

/// The body accepted by `POST /solve`.
#[derive(Debug, Deserialize)]
pub(crate) struct SolveRequest {
    matrix: Vec<Vec<f64>>,
    #[serde(default)]
    strategy: StrategyKind,
    #[serde(default)]
    worker_capacities: Option<Vec<f64>>,
    #[serde(default)]
    job_durations: Option<Vec<f64>>,
}

impl SolveRequest {
    /// Turns the raw body into a validated instance; this is the boundary
    /// where malformed matrices are rejected, before any search state
    /// exists.
    fn into_instance(self) -> Result<(Instance, StrategyKind), InstanceError> {
        let mut instance = Instance::new(CostMatrix::from_rows(self.matrix)?);

        if let Some(capacities) = self.worker_capacities {
            instance = instance.with_worker_capacities(capacities)?;
        }
        if let Some(durations) = self.job_durations {
            instance = instance.with_job_durations(durations)?;
        }

        Ok((instance, self.strategy))
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SolveResponse {
    execution_id: ExecutionId,
    #[serde(flatten)]
    outcome: StrategyOutcome,
}

/// One row of the `GET /executions` listing.
#[derive(Debug, Serialize)]
pub(crate) struct ExecutionSummary {
    id: ExecutionId,
    strategy: StrategyKind,
    cost: Option<f64>,
}

#[derive(Debug)]
pub(crate) enum ApiError {
    InvalidInstance(InstanceError),
    UnknownExecution(u32),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidInstance(error) => (StatusCode::BAD_REQUEST, error.to_string()),
            ApiError::UnknownExecution(id) => {
                (StatusCode::NOT_FOUND, format!("no execution with id {id}"))
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// `POST /solve`: validate the matrix, run the selected strategy, append
/// the outcome to the ledger, and return it under its execution id.
pub(crate) async fn solve(
    State(state): State<AppState>,
    Json(request): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, ApiError> {
    let (instance, strategy) = request
        .into_instance()
        .map_err(ApiError::InvalidInstance)?;

    let outcome = solve_with_strategy(&instance, strategy);
    let execution_id = state.ledger().record(strategy, outcome.clone());

    info!(
        "execution {execution_id:?}: solved a {0}x{0} instance with {strategy:?}",
        instance.matrix().dimension()
    );

    Ok(Json(SolveResponse {
        execution_id,
        outcome,
    }))
}

/// `GET /executions`: summaries of every recorded execution, oldest first.
pub(crate) async fn list_executions(State(state): State<AppState>) -> Json<Vec<ExecutionSummary>> {
    let summaries = state
        .ledger()
        .iter()
        .map(|record| ExecutionSummary {
            id: record.id,
            strategy: record.strategy,
            cost: record.outcome.cost,
        })
        .collect();

    Json(summaries)
}

/// `GET /executions/{id}`: the full record, including tree and history for
/// branch-and-bound runs.
pub(crate) async fn get_execution(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ExecutionRecord>, ApiError> {
    state
        .ledger()
        .get(ExecutionId::from(id))
        .cloned()
        .map(Json)
        .ok_or(ApiError::UnknownExecution(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: &str) -> SolveRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn the_strategy_defaults_to_branch_and_bound() {
        let request = request(r#"{"matrix": [[1.0, 2.0], [2.0, 1.0]]}"#);

        let (_, strategy) = request.into_instance().unwrap();
        assert_eq!(StrategyKind::BranchAndBound, strategy);
    }

    #[test]
    fn a_ragged_matrix_is_rejected_before_solving() {
        let request = request(r#"{"matrix": [[1.0, 2.0], [3.0]]}"#);

        assert!(request.into_instance().is_err());
    }

    #[test]
    fn capacity_mismatches_are_rejected() {
        let request = request(
            r#"{"matrix": [[1.0, 2.0], [2.0, 1.0]], "worker_capacities": [1.0, 2.0, 3.0]}"#,
        );

        assert_eq!(
            Err(InstanceError::CapacityMismatch {
                expected: 2,
                actual: 3,
            }),
            request.into_instance().map(|_| ())
        );
    }
}
