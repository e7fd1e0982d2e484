use crate::modules::time_logs::core::time_log::TimeLog;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("user {user_id} does not own time log {time_log_id}")]
pub struct OwnershipError {
    pub time_log_id: String,
    pub user_id: String,
}

/// A time log may only be read for editing, updated or deleted by the user who created it.
pub fn ensure_owner(time_log: &TimeLog, user_id: &str) -> Result<(), OwnershipError> {
    if time_log.user_id == user_id {
        return Ok(());
    }
    Err(OwnershipError {
        time_log_id: time_log.time_log_id.clone(),
        user_id: user_id.to_string(),
    })
}
