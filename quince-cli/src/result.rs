use thiserror::Error;

pub(crate) type QuinceResult<T> = Result<T, QuinceError>;

#[derive(Debug, Error)]
pub(crate) enum QuinceError {
    #[error("IO error, more details: {0}")]
    IoError(#[from] std::io::Error),
    #[error("The instance file is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("The instance is not solvable as given: {0}")]
    InvalidInstance(#[from] quince_solver::InstanceError),
}
