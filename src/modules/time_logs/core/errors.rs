use crate::modules::time_logs::core::ownership::OwnershipError;
use crate::modules::time_logs::core::rules::DecideError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("time log {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Forbidden(#[from] OwnershipError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}
