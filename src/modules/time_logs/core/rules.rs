use crate::modules::time_logs::core::project::Project;

pub const TASK_NAME_MAX_CHARS: usize = 255;
pub const MAX_HOURS_PER_LOG: f64 = 24.0;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("the selected project does not exist")]
    UnknownProject,

    #[error("the task name is required")]
    EmptyTaskName,

    #[error("the task name may not be longer than 255 characters")]
    TaskNameTooLong,

    #[error("the time must be more than 0 and at most 24 hours")]
    TimeOutOfRange,
}

impl DecideError {
    /// Form field the rule belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            DecideError::UnknownProject => "project_id",
            DecideError::EmptyTaskName | DecideError::TaskNameTooLong => "task_name",
            DecideError::TimeOutOfRange => "time",
        }
    }
}

/// Rules shared by logging and editing time. Returns the first violation.
///
/// `project` is the lookup result for the submitted project id.
pub fn check_details(
    project: Option<&Project>,
    task_name: &str,
    time: f64,
) -> Result<(), DecideError> {
    if project.is_none() {
        return Err(DecideError::UnknownProject);
    }
    let task_name = task_name.trim();
    if task_name.is_empty() {
        return Err(DecideError::EmptyTaskName);
    }
    if task_name.chars().count() > TASK_NAME_MAX_CHARS {
        return Err(DecideError::TaskNameTooLong);
    }
    if !time.is_finite() || time <= 0.0 || time > MAX_HOURS_PER_LOG {
        return Err(DecideError::TimeOutOfRange);
    }
    Ok(())
}
